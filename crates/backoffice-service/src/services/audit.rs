//! Audit log queries

use tracing::instrument;

use backoffice_core::{AuditLogEntry, UserId};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Audit service
pub struct AuditService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuditService<'a> {
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Audit entries for an account, oldest first
    #[instrument(skip(self))]
    pub async fn list_audit_log(&self, user_id: &str) -> ServiceResult<Vec<AuditLogEntry>> {
        let user_id = UserId::parse(user_id)?;
        self.ctx.load_account(&user_id).await?;

        let mut entries = self.ctx.account_repo().audit_log(&user_id).await?;
        entries.sort_by_key(|entry| entry.timestamp);
        Ok(entries)
    }
}
