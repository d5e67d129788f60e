//! Repository traits (ports) - define the interface for data access
//!
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::entities::{AuditLogEntry, UserAccount};
use crate::error::DomainError;
use crate::value_objects::UserId;

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// Account Repository
// ============================================================================

/// Persistence port for user accounts and their audit trail
///
/// Every write carries exactly one audit entry and is applied atomically with
/// it. Writes are guarded by [`UserAccount::revision`]: the stored revision
/// must equal the one the account was loaded at.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Load an account by ID
    async fn load(&self, id: &UserId) -> RepoResult<Option<UserAccount>>;

    /// Insert a new account
    ///
    /// Fails with `UserAlreadyExists` if the ID is taken.
    async fn create(&self, account: &UserAccount, entry: &AuditLogEntry) -> RepoResult<()>;

    /// Persist a mutated account together with its audit entry
    ///
    /// Returns the new revision. Fails with `ConcurrentModification` if the
    /// account changed since it was loaded, in which case nothing is written.
    async fn commit(&self, account: &UserAccount, entry: &AuditLogEntry) -> RepoResult<i64>;

    /// Find which account holds a badge
    async fn find_badge_owner(&self, badge_id: Uuid) -> RepoResult<Option<UserId>>;

    /// Accounts pending deletion whose deadline is at or before `now`, oldest deadline first
    async fn find_due_deletions(
        &self,
        now: DateTime<Utc>,
        limit: usize,
    ) -> RepoResult<Vec<UserId>>;

    /// Audit entries for an account, oldest first
    async fn audit_log(&self, id: &UserId) -> RepoResult<Vec<AuditLogEntry>>;

    /// Readiness probe
    async fn ping(&self) -> RepoResult<()> {
        Ok(())
    }
}
