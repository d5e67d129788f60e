//! Audit log database model

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;
use uuid::Uuid;

/// Database model for account_audit_log table
#[derive(Debug, Clone, FromRow)]
pub struct AuditLogModel {
    pub id: Uuid,
    pub target_user_id: String,
    pub actor_id: String,
    pub actor_role: String,
    /// Dotted action name, e.g. `account.blocked`
    pub action: String,
    pub details: JsonValue,
    pub created_at: DateTime<Utc>,
}
