//! Badge entity - moderator-assigned label on an account

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::Actor;

/// Badge attached to a user account; immutable once created
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: Uuid,
    pub label: String,
    /// Display name of the moderator
    pub added_by: String,
    pub added_by_id: String,
    pub added_at: DateTime<Utc>,
    pub reason: String,
}

impl Badge {
    /// Create a badge with a fresh ID
    ///
    /// # Errors
    /// Returns `ValidationError` if `label` or `reason` is blank
    pub fn new(
        label: &str,
        reason: &str,
        added_by: &Actor,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        let label = label.trim();
        let reason = reason.trim();
        if label.is_empty() {
            return Err(DomainError::validation("label is required"));
        }
        if reason.is_empty() {
            return Err(DomainError::validation("reason is required"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            label: label.to_string(),
            added_by: added_by.name.clone(),
            added_by_id: added_by.id.clone(),
            added_at: now,
            reason: reason.to_string(),
        })
    }
}
