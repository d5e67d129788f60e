//! Notification delivery over Redis Pub/Sub

mod log_dispatcher;
mod redis_dispatcher;

pub use log_dispatcher::TracingNotificationDispatcher;
pub use redis_dispatcher::{notification_event, RedisNotificationDispatcher};
