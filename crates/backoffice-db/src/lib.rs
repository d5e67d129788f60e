//! # backoffice-db
//!
//! Persistence layer implementing the account port from `backoffice-core`.
//!
//! ## Overview
//!
//! - Connection pool management and migrations
//! - Database models with SQLx `FromRow` derives
//! - Entity ↔ Model mappers
//! - `PgAccountRepository` (PostgreSQL) and `InMemoryAccountRepository`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use backoffice_db::pool::{create_pool, run_migrations, DatabaseConfig, DEFAULT_MIGRATIONS_DIR};
//! use backoffice_db::PgAccountRepository;
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = create_pool(&DatabaseConfig::default()).await?;
//!     run_migrations(&pool, DEFAULT_MIGRATIONS_DIR).await?;
//!     let accounts = PgAccountRepository::new(pool);
//!
//!     // Use the repository...
//!     Ok(())
//! }
//! ```

pub mod mappers;
pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, PgPool, DEFAULT_MIGRATIONS_DIR};
pub use repositories::{InMemoryAccountRepository, PgAccountRepository};
