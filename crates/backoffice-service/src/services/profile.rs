//! Profile service
//!
//! Handles reading, editing and provisioning account profiles.

use serde_json::{json, Map, Value};
use tracing::{debug, info, instrument};

use backoffice_core::{
    Actor, AuditAction, AuditLogEntry, DomainError, UserAccount, UserId, UserType,
};

use crate::dto::{ProfileResponse, ProvisionAccountRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Profile service
pub struct ProfileService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ProfileService<'a> {
    /// Create a new ProfileService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Look up an account of the given type
    ///
    /// An account of a different type is reported as not found.
    async fn load_typed(&self, user_type: &str, user_id: &str) -> ServiceResult<UserAccount> {
        let user_type = UserType::parse(user_type)?;
        let user_id = UserId::parse(user_id)?;

        let account = self.ctx.load_account(&user_id).await?;
        if account.user_type != user_type {
            return Err(DomainError::UserNotFound(user_id).into());
        }
        Ok(account)
    }

    /// Get a profile
    #[instrument(skip(self))]
    pub async fn get_profile(&self, user_type: &str, user_id: &str) -> ServiceResult<ProfileResponse> {
        let account = self.load_typed(user_type, user_id).await?;
        Ok(ProfileResponse::from(&account))
    }

    /// Merge a partial update into a profile
    ///
    /// Returns the keys that changed. Nothing is written when no key changes.
    #[instrument(skip(self, actor, patch), fields(actor_id = %actor.id))]
    pub async fn update_profile(
        &self,
        actor: &Actor,
        user_type: &str,
        user_id: &str,
        patch: Value,
    ) -> ServiceResult<Vec<String>> {
        let Value::Object(patch) = patch else {
            return Err(ServiceError::validation(
                "Profile update must be a JSON object",
            ));
        };

        let mut account = self.load_typed(user_type, user_id).await?;
        let now = self.ctx.now();
        let changed = account.merge_profile(patch, now)?;

        if changed.is_empty() {
            debug!(user_id = %account.id, "Profile update changed nothing");
            return Ok(changed);
        }

        let entry = AuditLogEntry::new(
            actor,
            AuditAction::ProfileUpdated,
            account.id.clone(),
            json!({ "fields": changed }),
            now,
        );
        self.ctx.account_repo().commit(&account, &entry).await?;

        info!(user_id = %account.id, fields = ?changed, "Profile updated");
        Ok(changed)
    }

    /// Create an active account for a newly registered user
    #[instrument(skip(self, actor, request), fields(actor_id = %actor.id, user_id = %request.user_id))]
    pub async fn provision_account(
        &self,
        actor: &Actor,
        request: ProvisionAccountRequest,
    ) -> ServiceResult<ProfileResponse> {
        let user_id = UserId::parse(&request.user_id)?;
        let user_type = UserType::parse(request.user_type.trim())?;
        let now = self.ctx.now();

        let mut account = UserAccount::new(user_id.clone(), user_type, Map::new(), now);
        account.merge_profile(request.profile.unwrap_or_default(), now)?;

        let entry = AuditLogEntry::new(
            actor,
            AuditAction::AccountProvisioned,
            user_id.clone(),
            json!({ "userType": user_type }),
            now,
        );
        self.ctx.account_repo().create(&account, &entry).await?;

        info!(user_id = %user_id, user_type = %user_type, "Account provisioned");
        Ok(ProfileResponse::from(&account))
    }
}
