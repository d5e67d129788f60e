//! Log-only `NotificationDispatcher` for deployments without Redis

use async_trait::async_trait;
use backoffice_core::{DomainError, Notification, NotificationDispatcher};
use tracing::info;

/// Writes each notification to the log instead of delivering it
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingNotificationDispatcher;

#[async_trait]
impl NotificationDispatcher for TracingNotificationDispatcher {
    async fn dispatch(&self, notification: &Notification) -> Result<(), DomainError> {
        info!(
            notification_id = %notification.id,
            user_id = %notification.user_id,
            event = notification.event.name(),
            message = %notification.message,
            "Notification dispatched"
        );
        Ok(())
    }
}
