//! Redis Pub/Sub publisher.
//!
//! Publishes events to Redis channels for delivery by the notification gateway.

use crate::pool::{RedisPool, RedisResult};
use crate::pubsub::PubSubChannel;
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};

/// Event wrapper for Pub/Sub messages
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PubSubEvent {
    /// Event type name (e.g., "BLOCKED", "DELETION_SCHEDULED")
    pub event_type: String,
    /// Event payload
    pub data: serde_json::Value,
}

impl PubSubEvent {
    /// Create a new event
    #[must_use]
    pub fn new(event_type: impl Into<String>, data: serde_json::Value) -> Self {
        Self {
            event_type: event_type.into(),
            data,
        }
    }

    /// Serialize to JSON
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

/// Redis Pub/Sub publisher
#[derive(Clone)]
pub struct Publisher {
    pool: RedisPool,
}

impl Publisher {
    /// Create a new publisher
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self { pool }
    }

    /// Publish an event to a channel, returning the number of receivers
    pub async fn publish(&self, channel: &PubSubChannel, event: &PubSubEvent) -> RedisResult<u32> {
        let mut conn = self.pool.get().await?;
        let channel_name = channel.name();
        let payload = event.to_json()?;

        let receivers: u32 = conn.publish(&channel_name, &payload).await?;

        tracing::debug!(
            channel = %channel_name,
            event_type = %event.event_type,
            receivers = receivers,
            "Published event"
        );

        Ok(receivers)
    }

    /// Check the underlying pool
    pub async fn health_check(&self) -> RedisResult<()> {
        self.pool.health_check().await
    }
}
