//! Entity to model mappers
//!
//! - `TryFrom<Model> for Entity`: Convert database rows to domain objects
//! - `AccountWrite`: Prepare entity data for database writes

mod account;
mod audit_log;

pub use account::AccountWrite;
