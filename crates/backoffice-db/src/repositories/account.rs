//! PostgreSQL implementation of AccountRepository

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgConnection, PgPool};
use tracing::{debug, instrument};
use uuid::Uuid;

use backoffice_core::entities::{AuditLogEntry, UserAccount};
use backoffice_core::error::DomainError;
use backoffice_core::traits::{AccountRepository, RepoResult};
use backoffice_core::value_objects::UserId;

use crate::mappers::AccountWrite;
use crate::models::{AccountModel, AuditLogModel};

use super::error::{map_db_error, map_unique_violation, user_not_found};

/// PostgreSQL implementation of AccountRepository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new PgAccountRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

async fn insert_audit_entry(conn: &mut PgConnection, entry: &AuditLogEntry) -> RepoResult<()> {
    sqlx::query(
        r"
        INSERT INTO account_audit_log (id, target_user_id, actor_id, actor_role, action, details, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7)
        ",
    )
    .bind(entry.id)
    .bind(entry.target_user_id.as_str())
    .bind(&entry.actor_id)
    .bind(entry.actor_role.as_str())
    .bind(entry.action.as_str())
    .bind(&entry.details)
    .bind(entry.timestamp)
    .execute(conn)
    .await
    .map_err(map_db_error)?;

    Ok(())
}

fn parse_user_id(raw: &str) -> RepoResult<UserId> {
    UserId::parse(raw).map_err(|e| DomainError::DatabaseError(e.to_string()))
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    #[instrument(skip(self))]
    async fn load(&self, id: &UserId) -> RepoResult<Option<UserAccount>> {
        let result = sqlx::query_as::<_, AccountModel>(
            r"
            SELECT id, user_type, status, suspension_start, suspension_end, deletion_scheduled_at,
                   badges, notes, profile, revision, created_at, updated_at
            FROM user_accounts
            WHERE id = $1
            ",
        )
        .bind(id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.map(UserAccount::try_from).transpose()
    }

    #[instrument(skip(self, account, entry), fields(user_id = %account.id))]
    async fn create(&self, account: &UserAccount, entry: &AuditLogEntry) -> RepoResult<()> {
        let write = AccountWrite::new(account)?;
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        sqlx::query(
            r"
            INSERT INTO user_accounts (id, user_type, status, suspension_start, suspension_end,
                                       deletion_scheduled_at, badges, notes, profile, revision,
                                       created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            ",
        )
        .bind(write.id)
        .bind(write.user_type)
        .bind(write.status)
        .bind(write.suspension_start)
        .bind(write.suspension_end)
        .bind(write.deletion_scheduled_at)
        .bind(&write.badges)
        .bind(&write.notes)
        .bind(&write.profile)
        .bind(account.revision)
        .bind(write.created_at)
        .bind(write.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, || DomainError::UserAlreadyExists(account.id.clone())))?;

        insert_audit_entry(&mut *tx, entry).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(())
    }

    #[instrument(skip(self, account, entry), fields(user_id = %account.id, revision = account.revision))]
    async fn commit(&self, account: &UserAccount, entry: &AuditLogEntry) -> RepoResult<i64> {
        let write = AccountWrite::new(account)?;
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        let new_revision = sqlx::query_scalar::<_, i64>(
            r"
            UPDATE user_accounts
            SET status = $3, suspension_start = $4, suspension_end = $5,
                deletion_scheduled_at = $6, badges = $7, notes = $8, profile = $9,
                updated_at = $10, revision = revision + 1
            WHERE id = $1 AND revision = $2
            RETURNING revision
            ",
        )
        .bind(write.id)
        .bind(account.revision)
        .bind(write.status)
        .bind(write.suspension_start)
        .bind(write.suspension_end)
        .bind(write.deletion_scheduled_at)
        .bind(&write.badges)
        .bind(&write.notes)
        .bind(&write.profile)
        .bind(write.updated_at)
        .fetch_optional(&mut *tx)
        .await
        .map_err(map_db_error)?;

        let Some(new_revision) = new_revision else {
            let exists = sqlx::query_scalar::<_, bool>(
                r"
                SELECT EXISTS(SELECT 1 FROM user_accounts WHERE id = $1)
                ",
            )
            .bind(write.id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_db_error)?;

            debug!(exists, "Revision check failed, rolling back");
            return Err(if exists {
                DomainError::ConcurrentModification(account.id.clone())
            } else {
                user_not_found(&account.id)
            });
        };

        insert_audit_entry(&mut *tx, entry).await?;
        tx.commit().await.map_err(map_db_error)?;

        Ok(new_revision)
    }

    #[instrument(skip(self))]
    async fn find_badge_owner(&self, badge_id: Uuid) -> RepoResult<Option<UserId>> {
        let result = sqlx::query_scalar::<_, String>(
            r"
            SELECT id FROM user_accounts
            WHERE badges @> jsonb_build_array(jsonb_build_object('id', $1::text))
            LIMIT 1
            ",
        )
        .bind(badge_id.to_string())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        result.as_deref().map(parse_user_id).transpose()
    }

    #[instrument(skip(self))]
    async fn find_due_deletions(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> RepoResult<Vec<UserId>> {
        let ids = sqlx::query_scalar::<_, String>(
            r"
            SELECT id FROM user_accounts
            WHERE status = 'pending-deletion' AND deletion_scheduled_at <= $1
            ORDER BY deletion_scheduled_at ASC
            LIMIT $2
            ",
        )
        .bind(now)
        .bind(i64::try_from(limit).unwrap_or(i64::MAX))
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        ids.iter().map(|id| parse_user_id(id)).collect()
    }

    #[instrument(skip(self))]
    async fn audit_log(&self, id: &UserId) -> RepoResult<Vec<AuditLogEntry>> {
        let rows = sqlx::query_as::<_, AuditLogModel>(
            r"
            SELECT id, target_user_id, actor_id, actor_role, action, details, created_at
            FROM account_audit_log
            WHERE target_user_id = $1
            ORDER BY created_at ASC, seq ASC
            ",
        )
        .bind(id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(map_db_error)?;

        rows.into_iter().map(AuditLogEntry::try_from).collect()
    }

    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
