//! User account database model

use chrono::{DateTime, NaiveDate, Utc};
use serde_json::Value as JsonValue;
use sqlx::FromRow;

/// Database model for user_accounts table
#[derive(Debug, Clone, FromRow)]
pub struct AccountModel {
    pub id: String,
    pub user_type: String,
    /// Kebab-case account status
    pub status: String,
    pub suspension_start: Option<NaiveDate>,
    pub suspension_end: Option<NaiveDate>,
    pub deletion_scheduled_at: Option<DateTime<Utc>>,
    /// JSON array of badges
    pub badges: JsonValue,
    /// JSON array of staff notes, oldest first
    pub notes: JsonValue,
    pub profile: JsonValue,
    pub revision: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
