//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs
//! - Mappers for converting domain entities to DTOs

pub mod mappers;
pub mod requests;
pub mod responses;

pub use requests::{
    AddBadgeRequest, AddNoteRequest, ApplyActionRequest, BlockUserRequest, CancelDeletionRequest,
    ChangeStatusRequest, DeleteUserRequest, ListNotesQuery, ProvisionAccountRequest,
    RemoveBadgeRequest, SuspendUserRequest,
};

pub use responses::{
    ActionResponse, AuditLogResponse, BadgeCreatedResponse, DataResponse, HealthChecks,
    HealthResponse, MessageResponse, NoteCreatedResponse, NotesResponse, ProfileResponse,
    ReadinessResponse, StatusChangeData, SuspensionResponse,
};
