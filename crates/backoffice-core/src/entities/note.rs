//! Staff note entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;
use crate::value_objects::Actor;

/// Internal note left by a staff member on an account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StaffNote {
    pub id: Uuid,
    pub content: String,
    pub category: String,
    pub author: String,
    pub author_id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub is_private: bool,
}

impl StaffNote {
    /// # Errors
    /// Returns `ValidationError` if `content` or `category` is blank
    pub fn new(
        content: &str,
        category: &str,
        is_private: bool,
        author: &Actor,
        now: DateTime<Utc>,
    ) -> Result<Self, DomainError> {
        if content.trim().is_empty() {
            return Err(DomainError::validation("content is required"));
        }
        let category = category.trim();
        if category.is_empty() {
            return Err(DomainError::validation("category is required"));
        }

        Ok(Self {
            id: Uuid::new_v4(),
            content: content.to_string(),
            category: category.to_string(),
            author: author.name.clone(),
            author_id: author.id.clone(),
            created_at: now,
            is_private,
        })
    }

    /// Whether `actor_id` wrote this note
    #[inline]
    pub fn is_authored_by(&self, actor_id: &str) -> bool {
        self.author_id == actor_id
    }
}
