//! Service context - dependency container for services
//!
//! Holds the ports every service needs: account storage, notification
//! delivery, the clock and the note visibility policy.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use backoffice_core::{
    AccountRepository, Clock, DefaultNoteAccessPolicy, DomainError, NoteAccessPolicy,
    NotificationDispatcher, SystemClock, UserAccount, UserId,
};

use super::error::{ServiceError, ServiceResult};

/// Service context containing all dependencies
#[derive(Clone)]
pub struct ServiceContext {
    account_repo: Arc<dyn AccountRepository>,
    notifier: Arc<dyn NotificationDispatcher>,
    clock: Arc<dyn Clock>,
    note_policy: Arc<dyn NoteAccessPolicy>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        account_repo: Arc<dyn AccountRepository>,
        notifier: Arc<dyn NotificationDispatcher>,
        clock: Arc<dyn Clock>,
        note_policy: Arc<dyn NoteAccessPolicy>,
    ) -> Self {
        Self {
            account_repo,
            notifier,
            clock,
            note_policy,
        }
    }

    /// Get the account repository
    pub fn account_repo(&self) -> &dyn AccountRepository {
        self.account_repo.as_ref()
    }

    /// Get the notification dispatcher
    pub fn notifier(&self) -> &dyn NotificationDispatcher {
        self.notifier.as_ref()
    }

    /// Get the note visibility policy
    pub fn note_policy(&self) -> &dyn NoteAccessPolicy {
        self.note_policy.as_ref()
    }

    /// Current time according to the injected clock
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    /// Load an account or fail with `UserNotFound`
    pub(crate) async fn load_account(&self, id: &UserId) -> ServiceResult<UserAccount> {
        self.account_repo
            .load(id)
            .await?
            .ok_or_else(|| ServiceError::Domain(DomainError::UserNotFound(id.clone())))
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("account_repo", &"AccountRepository")
            .field("notifier", &"NotificationDispatcher")
            .finish_non_exhaustive()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    account_repo: Option<Arc<dyn AccountRepository>>,
    notifier: Option<Arc<dyn NotificationDispatcher>>,
    clock: Option<Arc<dyn Clock>>,
    note_policy: Option<Arc<dyn NoteAccessPolicy>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn account_repo(mut self, repo: Arc<dyn AccountRepository>) -> Self {
        self.account_repo = Some(repo);
        self
    }

    pub fn notifier(mut self, notifier: Arc<dyn NotificationDispatcher>) -> Self {
        self.notifier = Some(notifier);
        self
    }

    /// Defaults to [`SystemClock`]
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Defaults to [`DefaultNoteAccessPolicy`]
    pub fn note_policy(mut self, policy: Arc<dyn NoteAccessPolicy>) -> Self {
        self.note_policy = Some(policy);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if a required dependency is missing
    pub fn build(self) -> ServiceResult<ServiceContext> {
        Ok(ServiceContext::new(
            self.account_repo
                .ok_or_else(|| ServiceError::validation("account_repo is required"))?,
            self.notifier
                .ok_or_else(|| ServiceError::validation("notifier is required"))?,
            self.clock.unwrap_or_else(|| Arc::new(SystemClock)),
            self.note_policy
                .unwrap_or_else(|| Arc::new(DefaultNoteAccessPolicy)),
        ))
    }
}
