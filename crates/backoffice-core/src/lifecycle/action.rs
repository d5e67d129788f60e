//! Moderation actions accepted by the state machine

use serde::{Deserialize, Serialize};
use std::fmt;

use super::status::AccountStatus;
use crate::error::DomainError;

/// An action a moderator can apply to an account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModerationAction {
    Suspend,
    Unsuspend,
    Block,
    Unblock,
    Activate,
    Deactivate,
    Delete,
}

impl ModerationAction {
    pub const ALL: [Self; 7] = [
        Self::Suspend,
        Self::Unsuspend,
        Self::Block,
        Self::Unblock,
        Self::Activate,
        Self::Deactivate,
        Self::Delete,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Suspend => "suspend",
            Self::Unsuspend => "unsuspend",
            Self::Block => "block",
            Self::Unblock => "unblock",
            Self::Activate => "activate",
            Self::Deactivate => "deactivate",
            Self::Delete => "delete",
        }
    }

    /// Parse an action name
    ///
    /// # Errors
    /// Returns `DomainError::InvalidAction` for anything outside the recognized set
    pub fn parse(s: &str) -> Result<Self, DomainError> {
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| DomainError::InvalidAction(s.to_string()))
    }

    /// Status the action produces when accepted
    ///
    /// `Delete` produces `PendingDeletion`; `Deleted` is only reached by finalization.
    pub fn target_status(&self) -> AccountStatus {
        match self {
            Self::Suspend => AccountStatus::Suspended,
            Self::Unsuspend | Self::Unblock | Self::Activate => AccountStatus::Active,
            Self::Block => AccountStatus::Blocked,
            Self::Deactivate => AccountStatus::Inactive,
            Self::Delete => AccountStatus::PendingDeletion,
        }
    }

    /// The action needed to move an account into `status`, if one exists
    pub fn for_target_status(status: AccountStatus) -> Option<Self> {
        match status {
            AccountStatus::Active => Some(Self::Activate),
            AccountStatus::Inactive => Some(Self::Deactivate),
            AccountStatus::Suspended => Some(Self::Suspend),
            AccountStatus::Blocked => Some(Self::Block),
            AccountStatus::PendingDeletion => Some(Self::Delete),
            AccountStatus::Deleted => None,
        }
    }
}

impl fmt::Display for ModerationAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ModerationAction {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ModerationAction::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_table() {
        use AccountStatus as S;
        use ModerationAction as A;

        let expected = [
            (A::Suspend, S::Suspended),
            (A::Unsuspend, S::Active),
            (A::Block, S::Blocked),
            (A::Unblock, S::Active),
            (A::Activate, S::Active),
            (A::Deactivate, S::Inactive),
            (A::Delete, S::PendingDeletion),
        ];
        for (action, status) in expected {
            assert_eq!(action.target_status(), status, "{action}");
        }
    }

    #[test]
    fn test_parse_known_actions() {
        for action in ModerationAction::ALL {
            assert_eq!(ModerationAction::parse(action.as_str()).unwrap(), action);
        }
    }

    #[test]
    fn test_parse_unknown_action() {
        let err = ModerationAction::parse("frobnicate").unwrap_err();
        assert!(matches!(err, DomainError::InvalidAction(ref s) if s == "frobnicate"));
        assert!(ModerationAction::parse("Suspend").is_err());
    }

    #[test]
    fn test_for_target_status() {
        assert_eq!(
            ModerationAction::for_target_status(AccountStatus::Inactive),
            Some(ModerationAction::Deactivate)
        );
        assert_eq!(ModerationAction::for_target_status(AccountStatus::Deleted), None);
    }
}
