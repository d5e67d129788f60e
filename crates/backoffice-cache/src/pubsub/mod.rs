//! Redis Pub/Sub module.
//!
//! Provides publish functionality for user-facing notifications.

mod channels;
mod publisher;

pub use channels::{PubSubChannel, USER_NOTIFICATION_PREFIX};
pub use publisher::{PubSubEvent, Publisher};
