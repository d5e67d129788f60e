//! Badge service
//!
//! Handles attaching and removing moderator badges.

use serde_json::json;
use tracing::{info, instrument};
use uuid::Uuid;

use backoffice_core::{Actor, AuditAction, AuditLogEntry, Badge, DomainError, UserId};

use crate::dto::{AddBadgeRequest, RemoveBadgeRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Badge service
pub struct BadgeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BadgeService<'a> {
    /// Create a new BadgeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Attach a badge to an account
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn add_badge(&self, actor: &Actor, request: AddBadgeRequest) -> ServiceResult<Badge> {
        let user_id = UserId::parse(&request.user_id)?;
        let now = self.ctx.now();

        let badge = Badge::new(&request.label, &request.reason, actor, now)?;
        let mut account = self.ctx.load_account(&user_id).await?;
        account.add_badge(badge.clone(), now)?;

        let entry = AuditLogEntry::new(
            actor,
            AuditAction::BadgeAdded,
            user_id.clone(),
            json!({
                "badgeId": badge.id,
                "label": badge.label,
                "reason": badge.reason,
            }),
            now,
        );
        self.ctx.account_repo().commit(&account, &entry).await?;

        info!(user_id = %user_id, badge_id = %badge.id, label = %badge.label, "Badge added");
        Ok(badge)
    }

    /// Remove a badge, resolving its owner when `userId` is omitted
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, badge_id = %request.badge_id))]
    pub async fn remove_badge(
        &self,
        actor: &Actor,
        request: RemoveBadgeRequest,
    ) -> ServiceResult<Badge> {
        let raw_id = request.badge_id.trim();
        if raw_id.is_empty() {
            return Err(ServiceError::validation("badgeId is required"));
        }
        // Ids are always UUIDs, so anything else cannot name an existing badge
        let badge_id =
            Uuid::parse_str(raw_id).map_err(|_| DomainError::BadgeNotFound(raw_id.to_string()))?;
        let reason = request.reason.trim();
        if reason.is_empty() {
            return Err(ServiceError::validation("reason is required"));
        }

        let user_id = match request.user_id.as_deref().map(str::trim) {
            Some(raw) if !raw.is_empty() => UserId::parse(raw)?,
            _ => self
                .ctx
                .account_repo()
                .find_badge_owner(badge_id)
                .await?
                .ok_or_else(|| DomainError::BadgeNotFound(badge_id.to_string()))?,
        };

        let now = self.ctx.now();
        let mut account = self.ctx.load_account(&user_id).await?;
        let removed = account.remove_badge(badge_id, now)?;

        let entry = AuditLogEntry::new(
            actor,
            AuditAction::BadgeRemoved,
            user_id.clone(),
            json!({
                "badgeId": removed.id,
                "label": removed.label,
                "reason": reason,
            }),
            now,
        );
        self.ctx.account_repo().commit(&account, &entry).await?;

        info!(user_id = %user_id, badge_id = %badge_id, "Badge removed");
        Ok(removed)
    }
}
