//! Account state machine
//!
//! All status mutations of a [`UserAccount`] go through the methods in this
//! module. Each accepted transition yields a [`Transition`] that the service
//! layer turns into exactly one audit entry and one notification.

use chrono::{DateTime, Duration, Utc};

use super::action::ModerationAction;
use super::status::AccountStatus;
use crate::entities::{SuspensionWindow, UserAccount};
use crate::error::DomainError;
use crate::events::AccountEvent;

/// Days between a `delete` action and the account becoming `deleted`
pub const DELETION_GRACE_PERIOD_DAYS: i64 = 30;

/// An accepted status change
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub from: AccountStatus,
    pub to: AccountStatus,
    pub event: AccountEvent,
    /// Suspension window dropped because the account left `suspended`
    pub cleared_suspension: Option<SuspensionWindow>,
    /// Deletion deadline dropped because a block overrode a pending deletion
    pub cancelled_deletion: Option<DateTime<Utc>>,
}

/// Result of applying a moderation action
#[derive(Debug, Clone, PartialEq)]
pub enum ActionOutcome {
    Applied(Transition),
    /// The account was already in the target state; nothing was written
    Unchanged(AccountStatus),
}

impl ActionOutcome {
    /// Status after the action
    pub fn status(&self) -> AccountStatus {
        match self {
            Self::Applied(t) => t.to,
            Self::Unchanged(status) => *status,
        }
    }

    pub fn transition(&self) -> Option<&Transition> {
        match self {
            Self::Applied(t) => Some(t),
            Self::Unchanged(_) => None,
        }
    }
}

fn require_reason(reason: &str) -> Result<String, DomainError> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(DomainError::validation("reason is required"));
    }
    Ok(reason.to_string())
}

impl UserAccount {
    /// Apply a moderation action
    ///
    /// `suspension` is only read for [`ModerationAction::Suspend`].
    ///
    /// # Errors
    /// - `TerminalState` when the account is deleted
    /// - `ValidationError` for an empty reason or a missing suspension window
    /// - `InvalidTransition` when the action is not allowed from the current status
    ///
    /// `block` is accepted from every non-terminal status and also drops a
    /// pending deletion. `delete` on an account already pending deletion keeps
    /// the original deadline and returns [`ActionOutcome::Unchanged`].
    pub fn apply_action(
        &mut self,
        action: ModerationAction,
        reason: &str,
        suspension: Option<SuspensionWindow>,
        now: DateTime<Utc>,
    ) -> Result<ActionOutcome, DomainError> {
        self.ensure_not_terminal()?;
        let reason = require_reason(reason)?;

        let from = self.status;
        let reject = || DomainError::InvalidTransition {
            from,
            action: action.as_str(),
        };

        // Pending deletion is left by cancellation, finalization or a block
        if from == AccountStatus::PendingDeletion {
            match action {
                ModerationAction::Block => {}
                ModerationAction::Delete => return Ok(ActionOutcome::Unchanged(from)),
                _ => return Err(reject()),
            }
        }

        let event = match action {
            ModerationAction::Suspend => {
                let window = suspension.ok_or_else(|| {
                    DomainError::validation("startDate and endDate are required to suspend")
                })?;
                if from == AccountStatus::Suspended {
                    return Err(reject());
                }
                self.suspension = Some(window);
                AccountEvent::Suspended {
                    start_date: window.start,
                    end_date: window.end,
                    reason,
                }
            }
            ModerationAction::Unsuspend => {
                if from != AccountStatus::Suspended {
                    return Err(reject());
                }
                AccountEvent::Unsuspended { reason }
            }
            ModerationAction::Block => {
                AccountEvent::Blocked {
                    reason,
                    revoke_sessions: true,
                    withdraw_funds: true,
                }
            }
            ModerationAction::Unblock => {
                if from != AccountStatus::Blocked {
                    return Err(reject());
                }
                AccountEvent::Unblocked { reason }
            }
            ModerationAction::Activate => {
                if from == AccountStatus::Active {
                    return Ok(ActionOutcome::Unchanged(from));
                }
                AccountEvent::Activated { reason }
            }
            ModerationAction::Deactivate => {
                if from == AccountStatus::Inactive {
                    return Ok(ActionOutcome::Unchanged(from));
                }
                AccountEvent::Deactivated { reason }
            }
            ModerationAction::Delete => {
                let deletion_date = now + Duration::days(DELETION_GRACE_PERIOD_DAYS);
                self.deletion_scheduled_at = Some(deletion_date);
                AccountEvent::DeletionScheduled {
                    reason,
                    deletion_date,
                }
            }
        };

        let to = action.target_status();
        let cleared_suspension = if to == AccountStatus::Suspended {
            None
        } else {
            self.suspension.take()
        };
        let cancelled_deletion = if to == AccountStatus::PendingDeletion {
            None
        } else {
            self.deletion_scheduled_at.take()
        };

        self.status = to;
        self.updated_at = now;

        Ok(ActionOutcome::Applied(Transition {
            from,
            to,
            event,
            cleared_suspension,
            cancelled_deletion,
        }))
    }

    /// Cancel a scheduled deletion, returning the account to `active`
    ///
    /// # Errors
    /// - `TerminalState` when the account is deleted
    /// - `InvalidTransition` unless the account is pending deletion
    pub fn cancel_deletion(
        &mut self,
        reason: Option<&str>,
        now: DateTime<Utc>,
    ) -> Result<Transition, DomainError> {
        self.ensure_not_terminal()?;

        let from = self.status;
        if from != AccountStatus::PendingDeletion {
            return Err(DomainError::InvalidTransition {
                from,
                action: "cancel deletion of",
            });
        }

        let reason = reason
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or("Deletion cancelled")
            .to_string();

        self.status = AccountStatus::Active;
        self.deletion_scheduled_at = None;
        self.updated_at = now;

        Ok(Transition {
            from,
            to: AccountStatus::Active,
            event: AccountEvent::DeletionCancelled { reason },
            cleared_suspension: None,
            cancelled_deletion: None,
        })
    }

    /// Finalize a due deletion
    ///
    /// Returns `Ok(None)` when the account is not pending deletion or its
    /// deadline has not been reached. Profile attributes are erased; badges,
    /// notes and the audit trail are kept.
    ///
    /// # Errors
    /// Returns `TerminalState` when the account is already deleted
    pub fn finalize_deletion(
        &mut self,
        now: DateTime<Utc>,
    ) -> Result<Option<Transition>, DomainError> {
        self.ensure_not_terminal()?;

        if self.status != AccountStatus::PendingDeletion {
            return Ok(None);
        }
        match self.deletion_scheduled_at {
            Some(deadline) if now >= deadline => {}
            _ => return Ok(None),
        }

        let from = self.status;
        self.status = AccountStatus::Deleted;
        self.deletion_scheduled_at = None;
        self.profile.clear();
        self.updated_at = now;

        Ok(Some(Transition {
            from,
            to: AccountStatus::Deleted,
            event: AccountEvent::Deleted,
            cleared_suspension: None,
            cancelled_deletion: None,
        }))
    }
}
