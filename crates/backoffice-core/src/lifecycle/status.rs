//! Account status taxonomy

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle status of a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum AccountStatus {
    /// Initial state set by registration
    #[default]
    Active,
    Inactive,
    Suspended,
    Blocked,
    /// Deletion scheduled, cancellable until the deadline
    PendingDeletion,
    /// Terminal
    Deleted,
}

impl AccountStatus {
    pub const ALL: [Self; 6] = [
        Self::Active,
        Self::Inactive,
        Self::Suspended,
        Self::Blocked,
        Self::PendingDeletion,
        Self::Deleted,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Suspended => "suspended",
            Self::Blocked => "blocked",
            Self::PendingDeletion => "pending-deletion",
            Self::Deleted => "deleted",
        }
    }

    /// Parse the kebab-case wire representation
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Deleted)
    }
}

impl fmt::Display for AccountStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
