//! Notification entity - message delivered to the affected user

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::events::AccountEvent;
use crate::value_objects::UserId;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: UserId,
    pub event: AccountEvent,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    /// Build the notification for a lifecycle event
    pub fn for_event(user_id: UserId, event: AccountEvent, created_at: DateTime<Utc>) -> Self {
        let message = event.user_message();
        Self {
            id: Uuid::new_v4(),
            user_id,
            event,
            message,
            created_at,
        }
    }
}
