//! Account events - emitted when an account's lifecycle status changes
//!
//! These events are used for:
//! - Notifying the affected user
//! - Naming the audit action for the transition

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::entities::AuditAction;

/// Lifecycle events, one per accepted transition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum AccountEvent {
    Suspended {
        start_date: NaiveDate,
        end_date: NaiveDate,
        reason: String,
    },
    Unsuspended {
        reason: String,
    },
    Blocked {
        reason: String,
        /// Sessions must be revoked by the notification consumer
        revoke_sessions: bool,
        /// The user should be told to withdraw remaining funds
        withdraw_funds: bool,
    },
    Unblocked {
        reason: String,
    },
    Activated {
        reason: String,
    },
    Deactivated {
        reason: String,
    },
    DeletionScheduled {
        reason: String,
        deletion_date: DateTime<Utc>,
    },
    DeletionCancelled {
        reason: String,
    },
    Deleted,
}

impl AccountEvent {
    /// Event type name as used on the wire
    pub fn name(&self) -> &'static str {
        match self {
            Self::Suspended { .. } => "SUSPENDED",
            Self::Unsuspended { .. } => "UNSUSPENDED",
            Self::Blocked { .. } => "BLOCKED",
            Self::Unblocked { .. } => "UNBLOCKED",
            Self::Activated { .. } => "ACTIVATED",
            Self::Deactivated { .. } => "DEACTIVATED",
            Self::DeletionScheduled { .. } => "DELETION_SCHEDULED",
            Self::DeletionCancelled { .. } => "DELETION_CANCELLED",
            Self::Deleted => "DELETED",
        }
    }

    /// Audit action recorded for the transition that produced this event
    pub fn audit_action(&self) -> AuditAction {
        match self {
            Self::Suspended { .. } => AuditAction::AccountSuspended,
            Self::Unsuspended { .. } => AuditAction::AccountUnsuspended,
            Self::Blocked { .. } => AuditAction::AccountBlocked,
            Self::Unblocked { .. } => AuditAction::AccountUnblocked,
            Self::Activated { .. } => AuditAction::AccountActivated,
            Self::Deactivated { .. } => AuditAction::AccountDeactivated,
            Self::DeletionScheduled { .. } => AuditAction::DeletionScheduled,
            Self::DeletionCancelled { .. } => AuditAction::DeletionCancelled,
            Self::Deleted => AuditAction::AccountDeleted,
        }
    }

    /// Moderator-supplied reason, if the event carries one
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Suspended { reason, .. }
            | Self::Unsuspended { reason }
            | Self::Blocked { reason, .. }
            | Self::Unblocked { reason }
            | Self::Activated { reason }
            | Self::Deactivated { reason }
            | Self::DeletionScheduled { reason, .. }
            | Self::DeletionCancelled { reason } => Some(reason),
            Self::Deleted => None,
        }
    }

    /// Human-readable message delivered to the affected user
    pub fn user_message(&self) -> String {
        match self {
            Self::Suspended {
                start_date,
                end_date,
                ..
            } => format!("Your account has been suspended from {start_date} to {end_date}."),
            Self::Unsuspended { .. } => "Your account suspension has been lifted.".to_string(),
            Self::Blocked { .. } => "Your account has been blocked. All active sessions were \
                 signed out. Please withdraw any remaining funds."
                .to_string(),
            Self::Unblocked { .. } => "Your account has been unblocked.".to_string(),
            Self::Activated { .. } => "Your account has been activated.".to_string(),
            Self::Deactivated { .. } => "Your account has been deactivated.".to_string(),
            Self::DeletionScheduled { deletion_date, .. } => format!(
                "Your account is scheduled for deletion on {}.",
                deletion_date.format("%Y-%m-%d")
            ),
            Self::DeletionCancelled { .. } => {
                "The scheduled deletion of your account was cancelled.".to_string()
            }
            Self::Deleted => "Your account has been deleted.".to_string(),
        }
    }
}
