//! # backoffice-cache
//!
//! Redis layer for delivering lifecycle notifications over pub/sub.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Pub/Sub**: Per-user notification channels
//! - **Notifier**: `NotificationDispatcher` implementation publishing to Redis
//!
//! ## Example
//!
//! ```ignore
//! use backoffice_cache::{RedisNotificationDispatcher, RedisPool, RedisPoolConfig};
//!
//! let pool = RedisPool::new(RedisPoolConfig::default())?;
//! let dispatcher = RedisNotificationDispatcher::new(pool);
//! dispatcher.dispatch(&notification).await?;
//! ```

pub mod notifier;
pub mod pool;
pub mod pubsub;

pub use notifier::{notification_event, RedisNotificationDispatcher, TracingNotificationDispatcher};
pub use pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};
pub use pubsub::{PubSubChannel, PubSubEvent, Publisher, USER_NOTIFICATION_PREFIX};
