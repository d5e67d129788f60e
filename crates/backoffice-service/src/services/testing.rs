//! Shared fixtures for service tests

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use parking_lot::Mutex;
use serde_json::Map;

use backoffice_core::{
    AccountRepository, Actor, AuditAction, AuditLogEntry, Clock, DomainError, ManualClock,
    Notification, NotificationDispatcher, StaffRole, UserAccount, UserId, UserType,
};
use backoffice_db::InMemoryAccountRepository;

use super::context::{ServiceContext, ServiceContextBuilder};

/// Dispatcher that records every notification and can be told to fail
#[derive(Default)]
pub struct RecordingDispatcher {
    sent: Mutex<Vec<Notification>>,
    failing: AtomicBool,
}

impl RecordingDispatcher {
    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().clone()
    }

    pub fn fail(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }
}

#[async_trait]
impl NotificationDispatcher for RecordingDispatcher {
    async fn dispatch(&self, notification: &Notification) -> Result<(), DomainError> {
        if self.failing.load(Ordering::SeqCst) {
            return Err(DomainError::NotificationError("broker unavailable".to_string()));
        }
        self.sent.lock().push(notification.clone());
        Ok(())
    }
}

pub struct Harness {
    pub ctx: ServiceContext,
    pub repo: Arc<InMemoryAccountRepository>,
    pub dispatcher: Arc<RecordingDispatcher>,
    pub clock: Arc<ManualClock>,
}

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap()
}

pub fn moderator() -> Actor {
    Actor::new("staff-1", "Morgan", StaffRole::Admin)
}

pub fn harness() -> Harness {
    let repo = Arc::new(InMemoryAccountRepository::new());
    let dispatcher = Arc::new(RecordingDispatcher::default());
    let clock = Arc::new(ManualClock::new(t0()));

    let ctx = ServiceContextBuilder::new()
        .account_repo(repo.clone())
        .notifier(dispatcher.clone())
        .clock(clock.clone())
        .build()
        .unwrap();

    Harness {
        ctx,
        repo,
        dispatcher,
        clock,
    }
}

impl Harness {
    /// Store a fresh active account
    pub async fn seed(&self, id: &str, user_type: UserType) -> UserId {
        let id = UserId::parse(id).unwrap();
        let account = UserAccount::new(id.clone(), user_type, Map::new(), self.clock.now());
        let entry = AuditLogEntry::new(
            &Actor::system(),
            AuditAction::AccountProvisioned,
            id.clone(),
            serde_json::json!({}),
            self.clock.now(),
        );
        self.repo.create(&account, &entry).await.unwrap();
        id
    }

    pub async fn account(&self, id: &UserId) -> UserAccount {
        self.ctx.load_account(id).await.unwrap()
    }

    pub async fn audit_actions(&self, id: &UserId) -> Vec<AuditAction> {
        self.repo
            .audit_log(id)
            .await
            .unwrap()
            .into_iter()
            .map(|entry| entry.action)
            .collect()
    }
}
