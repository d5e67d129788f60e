//! Pub/Sub channel definitions.
//!
//! Defines the channel naming conventions for Redis Pub/Sub.

use backoffice_core::UserId;

/// Channel prefix for per-user notifications
pub const USER_NOTIFICATION_PREFIX: &str = "notifications:user:";

/// Pub/Sub channel types
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PubSubChannel {
    /// Notifications for one user (all their sessions and devices)
    User(UserId),
    /// Custom channel name
    Custom(String),
}

impl PubSubChannel {
    /// Create a user notification channel
    #[must_use]
    pub fn user(user_id: UserId) -> Self {
        Self::User(user_id)
    }

    /// Get the Redis channel name
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::User(id) => format!("{USER_NOTIFICATION_PREFIX}{id}"),
            Self::Custom(name) => name.clone(),
        }
    }

    /// Parse a channel name back to a `PubSubChannel`
    #[must_use]
    pub fn parse(name: &str) -> Self {
        name.strip_prefix(USER_NOTIFICATION_PREFIX)
            .and_then(|id| UserId::parse(id).ok())
            .map_or_else(|| Self::Custom(name.to_string()), Self::User)
    }
}

impl std::fmt::Display for PubSubChannel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
