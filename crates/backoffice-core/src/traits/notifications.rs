//! Notification port

use async_trait::async_trait;

use crate::entities::Notification;
use crate::error::DomainError;

/// Delivers lifecycle notifications to affected users
///
/// Called once per accepted transition, after the account is committed.
/// Implementations must not retry; a failure is reported to the caller.
#[async_trait]
pub trait NotificationDispatcher: Send + Sync {
    async fn dispatch(&self, notification: &Notification) -> Result<(), DomainError>;

    /// Readiness probe
    async fn ping(&self) -> Result<(), DomainError> {
        Ok(())
    }
}
