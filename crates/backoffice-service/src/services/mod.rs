//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod audit;
pub mod badge;
pub mod context;
pub mod deletion;
pub mod error;
pub mod moderation;
pub mod note;
pub mod profile;

#[cfg(test)]
pub(crate) mod testing;

// Re-export all services for convenience
pub use audit::AuditService;
pub use badge::BadgeService;
pub use context::{ServiceContext, ServiceContextBuilder};
pub use deletion::{DeletionSweeper, SweepReport, SweeperConfig};
pub use error::{ServiceError, ServiceResult};
pub use moderation::{ModerationOutcome, ModerationService};
pub use note::NoteService;
pub use profile::ProfileService;
