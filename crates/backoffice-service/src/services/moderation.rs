//! Moderation service
//!
//! Drives the account state machine: loads the account, applies the action,
//! commits the account together with its audit entry and notifies the user.

use chrono::{DateTime, Utc};
use tracing::{info, instrument, warn};

use backoffice_core::{
    AccountEvent, AccountStatus, ActionOutcome, Actor, AuditLogEntry, ModerationAction,
    Notification, SuspensionWindow, Transition, UserAccount, UserId,
};

use crate::dto::{
    ApplyActionRequest, BlockUserRequest, CancelDeletionRequest, ChangeStatusRequest,
    DeleteUserRequest, SuspendUserRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

const LEGACY_BLOCK_REASON: &str = "Deactivated by staff";

/// Result of a moderation operation
#[derive(Debug, Clone)]
pub struct ModerationOutcome {
    pub user_id: UserId,
    pub status: AccountStatus,
    /// `None` when the account was already in the requested state
    pub transition: Option<Transition>,
    pub suspension: Option<SuspensionWindow>,
    pub deletion_scheduled_at: Option<DateTime<Utc>>,
    /// Whether the notification dispatch succeeded
    pub notified: bool,
}

impl ModerationOutcome {
    fn unchanged(account: &UserAccount) -> Self {
        Self {
            user_id: account.id.clone(),
            status: account.status,
            transition: None,
            suspension: account.suspension,
            deletion_scheduled_at: account.deletion_scheduled_at,
            notified: false,
        }
    }

    pub fn is_changed(&self) -> bool {
        self.transition.is_some()
    }

    /// Moderator reason recorded with the transition
    pub fn reason(&self) -> Option<&str> {
        self.transition.as_ref().and_then(|t| t.event.reason())
    }

    /// Short summary for API responses
    pub fn message(&self) -> String {
        let Some(transition) = &self.transition else {
            return format!("User {} is already {}", self.user_id, self.status);
        };
        let verb = match transition.event {
            AccountEvent::Suspended { .. } => "suspended",
            AccountEvent::Unsuspended { .. } => "unsuspended",
            AccountEvent::Blocked { .. } => "blocked",
            AccountEvent::Unblocked { .. } => "unblocked",
            AccountEvent::Activated { .. } => "activated",
            AccountEvent::Deactivated { .. } => "deactivated",
            AccountEvent::DeletionScheduled { .. } => "scheduled for deletion",
            AccountEvent::DeletionCancelled { .. } => "restored",
            AccountEvent::Deleted => "deleted",
        };
        format!("User {} {verb} successfully", self.user_id)
    }
}

fn require_reason(reason: &str) -> ServiceResult<&str> {
    let reason = reason.trim();
    if reason.is_empty() {
        return Err(ServiceError::validation("reason is required"));
    }
    Ok(reason)
}

fn suspension_window(start: Option<&str>, end: Option<&str>) -> ServiceResult<SuspensionWindow> {
    match (start, end) {
        (Some(start), Some(end)) if !start.trim().is_empty() && !end.trim().is_empty() => {
            Ok(SuspensionWindow::parse(start, end)?)
        }
        _ => Err(ServiceError::validation(
            "startDate and endDate are required to suspend",
        )),
    }
}

/// Moderation service
pub struct ModerationService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ModerationService<'a> {
    /// Create a new ModerationService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Apply any recognized moderation action
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id, action = %request.action))]
    pub async fn apply_action(
        &self,
        actor: &Actor,
        request: ApplyActionRequest,
    ) -> ServiceResult<ModerationOutcome> {
        let user_id = UserId::parse(&request.user_id)?;
        let action = ModerationAction::parse(request.action.trim())?;
        let reason = require_reason(&request.reason)?;

        let suspension = if action == ModerationAction::Suspend {
            Some(suspension_window(
                request.start_date.as_deref(),
                request.end_date.as_deref(),
            )?)
        } else {
            None
        };

        self.execute(actor, &user_id, action, reason, suspension)
            .await
    }

    /// Legacy block endpoint
    ///
    /// Kept for existing dashboard clients; it deactivates rather than blocks.
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn block_user(
        &self,
        actor: &Actor,
        request: BlockUserRequest,
    ) -> ServiceResult<ModerationOutcome> {
        let user_id = UserId::parse(&request.user_id)?;
        let reason = request
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(LEGACY_BLOCK_REASON);

        self.execute(actor, &user_id, ModerationAction::Deactivate, reason, None)
            .await
    }

    /// Schedule an account for deletion after the grace period
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn delete_user(
        &self,
        actor: &Actor,
        request: DeleteUserRequest,
    ) -> ServiceResult<ModerationOutcome> {
        let user_id = UserId::parse(&request.user_id)?;
        let reason = require_reason(&request.reason)?;

        self.execute(actor, &user_id, ModerationAction::Delete, reason, None)
            .await
    }

    /// Move an account to a target status
    ///
    /// Suspension needs a date window and goes through [`Self::suspend_user`].
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id, status = %request.status))]
    pub async fn change_status(
        &self,
        actor: &Actor,
        request: ChangeStatusRequest,
    ) -> ServiceResult<ModerationOutcome> {
        let user_id = UserId::parse(&request.user_id)?;
        let target = AccountStatus::parse(request.status.trim())
            .ok_or_else(|| ServiceError::validation(format!("Invalid status: {}", request.status)))?;

        let action = match target {
            AccountStatus::Suspended => {
                return Err(ServiceError::validation(
                    "Suspension requires startDate and endDate; use /users/suspend",
                ))
            }
            other => ModerationAction::for_target_status(other).ok_or_else(|| {
                ServiceError::validation(format!("Status '{other}' cannot be set directly"))
            })?,
        };

        let default_reason = format!("Status changed to {target}");
        let reason = request
            .reason
            .as_deref()
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .unwrap_or(&default_reason);

        self.execute(actor, &user_id, action, reason, None).await
    }

    /// Suspend an account for an inclusive date window
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn suspend_user(
        &self,
        actor: &Actor,
        request: SuspendUserRequest,
    ) -> ServiceResult<ModerationOutcome> {
        let user_id = UserId::parse(&request.user_id)?;
        let reason = require_reason(&request.reason)?;
        let window = suspension_window(Some(&request.start_date), Some(&request.end_date))?;

        self.execute(
            actor,
            &user_id,
            ModerationAction::Suspend,
            reason,
            Some(window),
        )
        .await
    }

    /// Cancel a scheduled deletion
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn cancel_deletion(
        &self,
        actor: &Actor,
        request: CancelDeletionRequest,
    ) -> ServiceResult<ModerationOutcome> {
        let user_id = UserId::parse(&request.user_id)?;
        let now = self.ctx.now();

        let mut account = self.ctx.load_account(&user_id).await?;
        let transition = account.cancel_deletion(request.reason.as_deref(), now)?;

        self.commit_transition(actor, account, transition, now)
            .await
    }

    /// Finalize a deletion whose grace period has elapsed
    ///
    /// Returns `Ok(None)` when the account is not due.
    #[instrument(skip(self))]
    pub async fn finalize_deletion(
        &self,
        user_id: &UserId,
    ) -> ServiceResult<Option<ModerationOutcome>> {
        let now = self.ctx.now();

        let mut account = self.ctx.load_account(user_id).await?;
        let Some(transition) = account.finalize_deletion(now)? else {
            return Ok(None);
        };

        self.commit_transition(&Actor::system(), account, transition, now)
            .await
            .map(Some)
    }

    async fn execute(
        &self,
        actor: &Actor,
        user_id: &UserId,
        action: ModerationAction,
        reason: &str,
        suspension: Option<SuspensionWindow>,
    ) -> ServiceResult<ModerationOutcome> {
        let now = self.ctx.now();
        let mut account = self.ctx.load_account(user_id).await?;

        match account.apply_action(action, reason, suspension, now)? {
            ActionOutcome::Unchanged(status) => {
                info!(user_id = %user_id, status = %status, action = %action, "Account already in requested state");
                Ok(ModerationOutcome::unchanged(&account))
            }
            ActionOutcome::Applied(transition) => {
                self.commit_transition(actor, account, transition, now)
                    .await
            }
        }
    }

    async fn commit_transition(
        &self,
        actor: &Actor,
        account: UserAccount,
        transition: Transition,
        now: DateTime<Utc>,
    ) -> ServiceResult<ModerationOutcome> {
        let entry = AuditLogEntry::for_transition(actor, account.id.clone(), &transition, now);
        let revision = self.ctx.account_repo().commit(&account, &entry).await?;

        info!(
            user_id = %account.id,
            actor_id = %actor.id,
            from = %transition.from,
            to = %transition.to,
            revision,
            "Account status changed"
        );

        let notified = self.notify(&account.id, &transition.event, now).await;

        Ok(ModerationOutcome {
            user_id: account.id,
            status: account.status,
            suspension: account.suspension,
            deletion_scheduled_at: account.deletion_scheduled_at,
            transition: Some(transition),
            notified,
        })
    }

    /// Deliver the user notification for a committed transition
    ///
    /// A failed dispatch is logged and reported, never retried.
    async fn notify(&self, user_id: &UserId, event: &AccountEvent, now: DateTime<Utc>) -> bool {
        let notification = Notification::for_event(user_id.clone(), event.clone(), now);

        match self.ctx.notifier().dispatch(&notification).await {
            Ok(()) => true,
            Err(e) => {
                warn!(user_id = %user_id, event = event.name(), error = %e, "Failed to notify user");
                false
            }
        }
    }
}
