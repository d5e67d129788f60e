//! # backoffice-service
//!
//! Application layer containing moderation workflows, services, and DTOs.

pub mod dto;
pub mod services;

pub use services::{
    AuditService, BadgeService, DeletionSweeper, ModerationOutcome, ModerationService,
    NoteService, ProfileService, ServiceContext, ServiceContextBuilder, ServiceError,
    ServiceResult, SweepReport, SweeperConfig,
};
