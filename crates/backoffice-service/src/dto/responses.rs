//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output with camelCase keys.

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use serde_json::{Map, Value};

use backoffice_core::{AccountStatus, AuditLogEntry, Badge, StaffNote, UserType};

// ============================================================================
// Common Response Types
// ============================================================================

/// `{success, message}` acknowledgement
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
        }
    }
}

/// `{success, message, data}` envelope used by the `/users` endpoints
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn ok(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Suspension window as shown to staff
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuspensionResponse {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

/// Account profile with its lifecycle fields
///
/// Free-form profile attributes are flattened next to the lifecycle fields.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub user_type: UserType,
    pub status: AccountStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspension: Option<SuspensionResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_scheduled_at: Option<DateTime<Utc>>,
    pub badges: Vec<Badge>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

// ============================================================================
// Moderation Responses
// ============================================================================

/// Response of `POST /profile/status`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    pub new_status: AccountStatus,
    /// Whether the affected user was notified
    pub notified: bool,
}

/// `data` payload of the `/users` status endpoints
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeData {
    pub user_id: String,
    pub status: AccountStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deletion_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    pub notified: bool,
}

// ============================================================================
// Badge & Note Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct BadgeCreatedResponse {
    pub success: bool,
    pub badge: Badge,
}

#[derive(Debug, Clone, Serialize)]
pub struct NoteCreatedResponse {
    pub success: bool,
    pub note: StaffNote,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotesResponse {
    pub notes: Vec<StaffNote>,
}

// ============================================================================
// Audit Responses
// ============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct AuditLogResponse {
    pub entries: Vec<AuditLogEntry>,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Basic health check response
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

impl HealthResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: Utc::now(),
        }
    }
}

/// Readiness check response
#[derive(Debug, Clone, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub checks: HealthChecks,
}

/// Health check status for each collaborator
#[derive(Debug, Clone, Serialize)]
pub struct HealthChecks {
    pub repository: String,
    pub notifications: String,
}

fn health_label(healthy: bool) -> String {
    if healthy { "healthy" } else { "unhealthy" }.to_string()
}

impl ReadinessResponse {
    pub fn ready(repository_healthy: bool, notifications_healthy: bool) -> Self {
        let all_healthy = repository_healthy && notifications_healthy;
        Self {
            status: if all_healthy { "ready" } else { "not_ready" }.to_string(),
            timestamp: Utc::now(),
            checks: HealthChecks {
                repository: health_label(repository_healthy),
                notifications: health_label(notifications_healthy),
            },
        }
    }

    pub fn is_ready(&self) -> bool {
        self.status == "ready"
    }
}
