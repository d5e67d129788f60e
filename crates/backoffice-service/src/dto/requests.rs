//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize` and `Validate` for input validation.
//! Required string fields default to empty so a missing field surfaces as a
//! validation failure rather than a deserialization error.

use serde::Deserialize;
use serde_json::{Map, Value};
use validator::Validate;

// ============================================================================
// Account Requests
// ============================================================================

/// Register an account on behalf of the registration flow
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvisionAccountRequest {
    #[validate(length(min = 1, max = 128, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "userType is required"))]
    pub user_type: String,

    pub profile: Option<Map<String, Value>>,
}

// ============================================================================
// Moderation Requests
// ============================================================================

/// Generic moderation action (`POST /profile/status`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplyActionRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "action is required"))]
    pub action: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,

    /// Required for `suspend`
    pub start_date: Option<String>,

    /// Required for `suspend`
    pub end_date: Option<String>,
}

/// Legacy block endpoint; deactivates the account
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct BlockUserRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    pub reason: Option<String>,
}

/// Schedule an account for deletion
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct DeleteUserRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
}

/// Move an account to a target status
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ChangeStatusRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "status is required"))]
    pub status: String,

    pub reason: Option<String>,
}

/// Suspend an account for an inclusive date window
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct SuspendUserRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, message = "startDate is required"))]
    pub start_date: String,

    #[validate(length(min = 1, message = "endDate is required"))]
    pub end_date: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
}

/// Cancel a scheduled deletion
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct CancelDeletionRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    pub reason: Option<String>,
}

// ============================================================================
// Badge Requests
// ============================================================================

/// Attach a badge to an account
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AddBadgeRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 64, message = "label must be 1-64 characters"))]
    pub label: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,
}

/// Remove a badge (query parameters of `DELETE /profile/badges`)
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoveBadgeRequest {
    #[validate(length(min = 1, message = "badgeId is required"))]
    pub badge_id: String,

    #[validate(length(min = 1, message = "reason is required"))]
    pub reason: String,

    /// Resolved from the badge when omitted
    pub user_id: Option<String>,
}

// ============================================================================
// Note Requests
// ============================================================================

/// Append a staff note
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct AddNoteRequest {
    #[validate(length(min = 1, message = "userId is required"))]
    pub user_id: String,

    #[validate(length(min = 1, max = 4000, message = "content must be 1-4000 characters"))]
    pub content: String,

    #[validate(length(min = 1, max = 64, message = "category must be 1-64 characters"))]
    pub category: String,

    pub is_private: bool,
}

/// Query parameters of `GET /profile/notes`
///
/// A missing `userId` is reported by the handler with its own message.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase", default)]
pub struct ListNotesQuery {
    pub user_id: Option<String>,
}
