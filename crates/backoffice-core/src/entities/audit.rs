//! Audit log entity - append-only record of every moderation mutation

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::lifecycle::Transition;
use crate::value_objects::{Actor, StaffRole, UserId};

/// Kind of mutation recorded in the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AuditAction {
    #[serde(rename = "account.provisioned")]
    AccountProvisioned,
    #[serde(rename = "profile.updated")]
    ProfileUpdated,
    #[serde(rename = "account.suspended")]
    AccountSuspended,
    #[serde(rename = "account.unsuspended")]
    AccountUnsuspended,
    #[serde(rename = "account.blocked")]
    AccountBlocked,
    #[serde(rename = "account.unblocked")]
    AccountUnblocked,
    #[serde(rename = "account.activated")]
    AccountActivated,
    #[serde(rename = "account.deactivated")]
    AccountDeactivated,
    #[serde(rename = "account.deletion_scheduled")]
    DeletionScheduled,
    #[serde(rename = "account.deletion_cancelled")]
    DeletionCancelled,
    #[serde(rename = "account.deleted")]
    AccountDeleted,
    #[serde(rename = "badge.added")]
    BadgeAdded,
    #[serde(rename = "badge.removed")]
    BadgeRemoved,
    #[serde(rename = "note.added")]
    NoteAdded,
}

impl AuditAction {
    pub const ALL: [Self; 14] = [
        Self::AccountProvisioned,
        Self::ProfileUpdated,
        Self::AccountSuspended,
        Self::AccountUnsuspended,
        Self::AccountBlocked,
        Self::AccountUnblocked,
        Self::AccountActivated,
        Self::AccountDeactivated,
        Self::DeletionScheduled,
        Self::DeletionCancelled,
        Self::AccountDeleted,
        Self::BadgeAdded,
        Self::BadgeRemoved,
        Self::NoteAdded,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AccountProvisioned => "account.provisioned",
            Self::ProfileUpdated => "profile.updated",
            Self::AccountSuspended => "account.suspended",
            Self::AccountUnsuspended => "account.unsuspended",
            Self::AccountBlocked => "account.blocked",
            Self::AccountUnblocked => "account.unblocked",
            Self::AccountActivated => "account.activated",
            Self::AccountDeactivated => "account.deactivated",
            Self::DeletionScheduled => "account.deletion_scheduled",
            Self::DeletionCancelled => "account.deletion_cancelled",
            Self::AccountDeleted => "account.deleted",
            Self::BadgeAdded => "badge.added",
            Self::BadgeRemoved => "badge.removed",
            Self::NoteAdded => "note.added",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown audit action: {s}"))
    }
}

/// A single audit log record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuditLogEntry {
    pub id: Uuid,
    pub actor_id: String,
    pub actor_role: StaffRole,
    pub action: AuditAction,
    pub target_user_id: UserId,
    pub timestamp: DateTime<Utc>,
    pub details: Value,
}

impl AuditLogEntry {
    pub fn new(
        actor: &Actor,
        action: AuditAction,
        target_user_id: UserId,
        details: Value,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            actor_id: actor.id.clone(),
            actor_role: actor.role,
            action,
            target_user_id,
            timestamp,
            details,
        }
    }

    /// Entry for a status transition
    ///
    /// Details carry the event payload (reason, dates, flags) plus `from`/`to`.
    pub fn for_transition(
        actor: &Actor,
        target_user_id: UserId,
        transition: &Transition,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let mut details = match serde_json::to_value(&transition.event) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        details.remove("type");
        details.insert("from".to_string(), json!(transition.from));
        details.insert("to".to_string(), json!(transition.to));
        if let Some(window) = transition.cleared_suspension {
            details.insert("clearedSuspension".to_string(), json!(window));
        }
        if let Some(deadline) = transition.cancelled_deletion {
            details.insert("cancelledDeletion".to_string(), json!(deadline));
        }

        Self::new(
            actor,
            transition.event.audit_action(),
            target_user_id,
            Value::Object(details),
            timestamp,
        )
    }
}
