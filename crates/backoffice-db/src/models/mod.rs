//! Database models - SQLx-compatible structs for PostgreSQL tables

mod account;
mod audit_log;

pub use account::AccountModel;
pub use audit_log::AuditLogModel;
