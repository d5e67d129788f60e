//! In-memory implementation of AccountRepository
//!
//! Each account and its audit trail live in one map entry, so a commit is a
//! single entry update under the shard lock.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use tracing::instrument;
use uuid::Uuid;

use backoffice_core::entities::{AuditLogEntry, UserAccount};
use backoffice_core::error::DomainError;
use backoffice_core::lifecycle::AccountStatus;
use backoffice_core::traits::{AccountRepository, RepoResult};
use backoffice_core::value_objects::UserId;

use super::error::user_not_found;

#[derive(Debug, Clone)]
struct StoredAccount {
    account: UserAccount,
    audit: Vec<AuditLogEntry>,
}

/// DashMap-backed account store
#[derive(Debug, Default)]
pub struct InMemoryAccountRepository {
    accounts: DashMap<UserId, StoredAccount>,
}

impl InMemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored accounts
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn load(&self, id: &UserId) -> RepoResult<Option<UserAccount>> {
        Ok(self.accounts.get(id).map(|stored| stored.account.clone()))
    }

    #[instrument(skip(self, account, entry), fields(user_id = %account.id))]
    async fn create(&self, account: &UserAccount, entry: &AuditLogEntry) -> RepoResult<()> {
        match self.accounts.entry(account.id.clone()) {
            Entry::Occupied(_) => Err(DomainError::UserAlreadyExists(account.id.clone())),
            Entry::Vacant(slot) => {
                slot.insert(StoredAccount {
                    account: account.clone(),
                    audit: vec![entry.clone()],
                });
                Ok(())
            }
        }
    }

    #[instrument(skip(self, account, entry), fields(user_id = %account.id, revision = account.revision))]
    async fn commit(&self, account: &UserAccount, entry: &AuditLogEntry) -> RepoResult<i64> {
        let mut stored = self
            .accounts
            .get_mut(&account.id)
            .ok_or_else(|| user_not_found(&account.id))?;

        if stored.account.revision != account.revision {
            return Err(DomainError::ConcurrentModification(account.id.clone()));
        }

        let mut updated = account.clone();
        updated.revision += 1;
        let revision = updated.revision;

        stored.account = updated;
        stored.audit.push(entry.clone());

        Ok(revision)
    }

    async fn find_badge_owner(&self, badge_id: Uuid) -> RepoResult<Option<UserId>> {
        Ok(self
            .accounts
            .iter()
            .find(|stored| stored.account.badge(badge_id).is_some())
            .map(|stored| stored.key().clone()))
    }

    async fn find_due_deletions(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> RepoResult<Vec<UserId>> {
        let mut due: Vec<(DateTime<Utc>, UserId)> = self
            .accounts
            .iter()
            .filter(|stored| stored.account.status == AccountStatus::PendingDeletion)
            .filter_map(|stored| {
                stored
                    .account
                    .deletion_scheduled_at
                    .filter(|deadline| *deadline <= now)
                    .map(|deadline| (deadline, stored.key().clone()))
            })
            .collect();

        due.sort();
        Ok(due.into_iter().take(limit).map(|(_, id)| id).collect())
    }

    async fn audit_log(&self, id: &UserId) -> RepoResult<Vec<AuditLogEntry>> {
        self.accounts
            .get(id)
            .map(|stored| stored.audit.clone())
            .ok_or_else(|| user_not_found(id))
    }
}
