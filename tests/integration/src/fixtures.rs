//! Test fixtures and data generators
//!
//! Provides reusable request bodies and response shapes for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> u64 {
    COUNTER.fetch_add(1, Ordering::SeqCst)
}

/// Provision request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProvisionRequest {
    pub user_id: String,
    pub user_type: String,
    pub profile: Map<String, Value>,
}

impl ProvisionRequest {
    pub fn jobseeker() -> Self {
        Self::unique("jobseeker")
    }

    pub fn recruiter() -> Self {
        Self::unique("recruiter")
    }

    fn unique(user_type: &str) -> Self {
        let suffix = unique_suffix();
        let mut profile = Map::new();
        profile.insert("firstName".to_string(), Value::from(format!("Test{suffix}")));
        Self {
            user_id: format!("{user_type}-{suffix}"),
            user_type: user_type.to_string(),
            profile,
        }
    }
}

/// Moderation action request
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub user_id: String,
    pub action: String,
    pub reason: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
}

impl ActionRequest {
    pub fn new(user_id: &str, action: &str, reason: &str) -> Self {
        Self {
            user_id: user_id.to_string(),
            action: action.to_string(),
            reason: reason.to_string(),
            start_date: None,
            end_date: None,
        }
    }

    pub fn suspend(user_id: &str, start: &str, end: &str) -> Self {
        Self {
            start_date: Some(start.to_string()),
            end_date: Some(end.to_string()),
            ..Self::new(user_id, "suspend", "Repeated spam")
        }
    }
}

/// Profile response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub id: String,
    pub user_type: String,
    pub status: String,
    pub suspension: Option<Value>,
    pub deletion_scheduled_at: Option<String>,
    pub badges: Vec<BadgeResponse>,
    #[serde(flatten)]
    pub profile: Map<String, Value>,
}

/// `POST /profile/status` response
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionResponse {
    pub success: bool,
    pub message: String,
    pub new_status: String,
    pub notified: bool,
}

/// `{success, message, data}` envelope of the `/users` endpoints
#[derive(Debug, Deserialize)]
pub struct StatusChangeResponse {
    pub success: bool,
    pub message: String,
    pub data: StatusChangeData,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusChangeData {
    pub user_id: String,
    pub status: String,
    pub reason: Option<String>,
    pub deletion_date: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Badge
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeResponse {
    pub id: String,
    pub label: String,
    pub reason: String,
    pub added_by: String,
}

#[derive(Debug, Deserialize)]
pub struct BadgeCreatedResponse {
    pub success: bool,
    pub badge: BadgeResponse,
}

/// Staff note
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteResponse {
    pub id: String,
    pub content: String,
    pub category: String,
    pub is_private: bool,
}

#[derive(Debug, Deserialize)]
pub struct NotesResponse {
    pub notes: Vec<NoteResponse>,
}

/// Audit entry
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntryResponse {
    pub action: String,
    pub actor_id: String,
    pub details: Value,
}

#[derive(Debug, Deserialize)]
pub struct AuditLogResponse {
    pub entries: Vec<AuditEntryResponse>,
}

/// `{success, message}` acknowledgement
#[derive(Debug, Deserialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

/// Error response
#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
    pub details: Option<Value>,
}
