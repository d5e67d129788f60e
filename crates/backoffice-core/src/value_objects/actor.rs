//! Actor - the authenticated staff member (or system job) performing an operation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier used for actions taken by background jobs
pub const SYSTEM_ACTOR_ID: &str = "system";

/// Staff role of an actor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum StaffRole {
    #[default]
    Staff,
    Admin,
    SuperAdmin,
    /// Background processes (grace-period sweeper)
    System,
}

impl StaffRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Staff => "staff",
            Self::Admin => "admin",
            Self::SuperAdmin => "super-admin",
            Self::System => "system",
        }
    }

    /// Parse the kebab-case wire representation
    pub fn parse(s: &str) -> Option<Self> {
        [Self::Staff, Self::Admin, Self::SuperAdmin, Self::System]
            .into_iter()
            .find(|role| role.as_str() == s)
    }

    #[inline]
    pub fn is_super_admin(&self) -> bool {
        matches!(self, Self::SuperAdmin)
    }
}

impl fmt::Display for StaffRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Caller identity threaded through every mutating operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    pub id: String,
    pub name: String,
    pub role: StaffRole,
}

impl Actor {
    pub fn new(id: impl Into<String>, name: impl Into<String>, role: StaffRole) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            role,
        }
    }

    /// The actor used by scheduled jobs
    pub fn system() -> Self {
        Self::new(SYSTEM_ACTOR_ID, "System", StaffRole::System)
    }

    #[inline]
    pub fn is_system(&self) -> bool {
        self.role == StaffRole::System
    }
}
