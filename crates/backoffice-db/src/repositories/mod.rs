//! Repository implementations
//!
//! Implementations of the account port defined in backoffice-core: PostgreSQL
//! for deployments and an in-memory store for development and tests.

mod account;
mod error;
mod memory;

pub use account::PgAccountRepository;
pub use memory::InMemoryAccountRepository;
