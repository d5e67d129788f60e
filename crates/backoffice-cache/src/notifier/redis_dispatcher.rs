//! Redis-backed `NotificationDispatcher`
//!
//! Each notification is published once on the affected user's channel. The
//! gateway subscribed to that channel fans it out to sessions and, for
//! `BLOCKED`, revokes them.

use async_trait::async_trait;
use backoffice_core::{DomainError, Notification, NotificationDispatcher};
use tracing::instrument;

use crate::pool::RedisPool;
use crate::pubsub::{PubSubChannel, PubSubEvent, Publisher};

/// Build the pub/sub envelope for a notification
pub fn notification_event(notification: &Notification) -> Result<PubSubEvent, serde_json::Error> {
    Ok(PubSubEvent::new(
        notification.event.name(),
        serde_json::to_value(notification)?,
    ))
}

#[derive(Clone)]
pub struct RedisNotificationDispatcher {
    publisher: Publisher,
}

impl RedisNotificationDispatcher {
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            publisher: Publisher::new(pool),
        }
    }
}

#[async_trait]
impl NotificationDispatcher for RedisNotificationDispatcher {
    #[instrument(skip(self, notification), fields(user_id = %notification.user_id, event = notification.event.name()))]
    async fn dispatch(&self, notification: &Notification) -> Result<(), DomainError> {
        let event = notification_event(notification)
            .map_err(|e| DomainError::NotificationError(e.to_string()))?;
        let channel = PubSubChannel::user(notification.user_id.clone());

        self.publisher
            .publish(&channel, &event)
            .await
            .map_err(|e| DomainError::NotificationError(e.to_string()))?;

        Ok(())
    }

    async fn ping(&self) -> Result<(), DomainError> {
        self.publisher
            .health_check()
            .await
            .map_err(|e| DomainError::CacheError(e.to_string()))
    }
}
