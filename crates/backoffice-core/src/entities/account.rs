//! User account entity - the aggregate owned by the lifecycle state machine

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::badge::Badge;
use super::note::StaffNote;
use crate::error::DomainError;
use crate::lifecycle::AccountStatus;
use crate::value_objects::UserId;

/// Profile keys owned by the lifecycle and never writable through a profile patch
pub const RESERVED_PROFILE_KEYS: &[&str] = &[
    "id",
    "userId",
    "userType",
    "status",
    "suspension",
    "deletionScheduledAt",
    "badges",
    "notes",
    "revision",
    "createdAt",
    "updatedAt",
];

/// Kind of account as seen by the admin dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserType {
    Jobseeker,
    Recruiter,
    Staff,
}

impl UserType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Jobseeker => "jobseeker",
            Self::Recruiter => "recruiter",
            Self::Staff => "staff",
        }
    }

    /// # Errors
    /// Returns `DomainError::InvalidUserType` for unknown values
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        match s {
            "jobseeker" => Ok(Self::Jobseeker),
            "recruiter" => Ok(Self::Recruiter),
            "staff" => Ok(Self::Staff),
            other => Err(DomainError::InvalidUserType(other.to_string())),
        }
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive suspension window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuspensionWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SuspensionWindow {
    /// # Errors
    /// Returns a validation error when `start` is after `end`
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DomainError> {
        if start > end {
            return Err(DomainError::validation(
                "startDate must be on or before endDate",
            ));
        }
        Ok(Self { start, end })
    }

    /// Parse a window from `YYYY-MM-DD` or RFC 3339 timestamps
    pub fn parse(start: &str, end: &str) -> Result<Self, DomainError> {
        Self::new(parse_date("startDate", start)?, parse_date("endDate", end)?)
    }

    /// Whether `date` falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

fn parse_date(field: &str, value: &str) -> Result<NaiveDate, DomainError> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value).map(|dt| dt.date_naive()))
        .map_err(|_| DomainError::validation(format!("{field} is not a valid date")))
}

/// A user account and everything moderators attach to it
#[derive(Debug, Clone, PartialEq)]
pub struct UserAccount {
    pub id: UserId,
    pub user_type: UserType,
    pub status: AccountStatus,
    /// Present only while `status == Suspended`
    pub suspension: Option<SuspensionWindow>,
    /// Present only while `status == PendingDeletion`
    pub deletion_scheduled_at: Option<DateTime<Utc>>,
    pub badges: Vec<Badge>,
    /// Insertion order is chronological
    pub notes: Vec<StaffNote>,
    pub profile: Map<String, Value>,
    /// Revision the account was loaded at; bumped by every commit
    pub revision: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserAccount {
    /// Create a freshly registered, active account
    pub fn new(
        id: UserId,
        user_type: UserType,
        profile: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            user_type,
            status: AccountStatus::Active,
            suspension: None,
            deletion_scheduled_at: None,
            badges: Vec::new(),
            notes: Vec::new(),
            profile,
            revision: 0,
            created_at: now,
            updated_at: now,
        }
    }

    #[inline]
    pub fn is_deleted(&self) -> bool {
        self.status.is_terminal()
    }

    /// # Errors
    /// Returns `DomainError::TerminalState` once the account is deleted
    pub fn ensure_not_terminal(&self) -> Result<(), DomainError> {
        if self.is_deleted() {
            return Err(DomainError::TerminalState(self.id.clone()));
        }
        Ok(())
    }

    /// Look up a badge by ID
    pub fn badge(&self, badge_id: uuid::Uuid) -> Option<&Badge> {
        self.badges.iter().find(|b| b.id == badge_id)
    }

    /// Attach a badge
    pub fn add_badge(&mut self, badge: Badge, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.ensure_not_terminal()?;
        if self.badge(badge.id).is_some() {
            return Err(DomainError::InternalError(format!(
                "duplicate badge id {}",
                badge.id
            )));
        }
        self.badges.push(badge);
        self.updated_at = now;
        Ok(())
    }

    /// Remove a badge, returning the removed record
    pub fn remove_badge(
        &mut self,
        badge_id: uuid::Uuid,
        now: DateTime<Utc>,
    ) -> Result<Badge, DomainError> {
        self.ensure_not_terminal()?;
        let index = self
            .badges
            .iter()
            .position(|b| b.id == badge_id)
            .ok_or_else(|| DomainError::BadgeNotFound(badge_id.to_string()))?;
        self.updated_at = now;
        Ok(self.badges.remove(index))
    }

    /// Append a staff note
    pub fn add_note(&mut self, note: StaffNote, now: DateTime<Utc>) -> Result<(), DomainError> {
        self.ensure_not_terminal()?;
        if self.notes.iter().any(|n| n.id == note.id) {
            return Err(DomainError::InternalError(format!(
                "duplicate note id {}",
                note.id
            )));
        }
        self.notes.push(note);
        self.updated_at = now;
        Ok(())
    }

    /// Merge a partial profile update
    ///
    /// Keys mapped to `null` are removed. Returns the keys that changed.
    pub fn merge_profile(
        &mut self,
        patch: Map<String, Value>,
        now: DateTime<Utc>,
    ) -> Result<Vec<String>, DomainError> {
        self.ensure_not_terminal()?;

        if let Some(key) = patch
            .keys()
            .find(|k| RESERVED_PROFILE_KEYS.contains(&k.as_str()))
        {
            return Err(DomainError::validation(format!(
                "field '{key}' cannot be changed through a profile update"
            )));
        }

        let mut changed = Vec::new();
        for (key, value) in patch {
            if value.is_null() {
                if self.profile.remove(&key).is_some() {
                    changed.push(key);
                }
            } else if self.profile.get(&key) != Some(&value) {
                self.profile.insert(key.clone(), value);
                changed.push(key);
            }
        }

        if !changed.is_empty() {
            self.updated_at = now;
        }
        Ok(changed)
    }
}
