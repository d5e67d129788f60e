//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::lifecycle::AccountStatus;
use crate::value_objects::UserId;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    #[error("Badge not found: {0}")]
    BadgeNotFound(String),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid action")]
    InvalidAction(String),

    #[error("Invalid user type")]
    InvalidUserType(String),

    // =========================================================================
    // Lifecycle Errors
    // =========================================================================
    #[error("Cannot {action} an account that is {from}")]
    InvalidTransition {
        from: AccountStatus,
        action: &'static str,
    },

    #[error("Account {0} is deleted")]
    TerminalState(UserId),

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("Account already exists: {0}")]
    UserAlreadyExists(UserId),

    #[error("Account {0} was modified concurrently, reload and retry")]
    ConcurrentModification(UserId),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Notification error: {0}")]
    NotificationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Shorthand for a validation failure
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::ValidationError(msg.into())
    }

    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::BadgeNotFound(_) => "UNKNOWN_BADGE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidAction(_) => "INVALID_ACTION",
            Self::InvalidUserType(_) => "INVALID_USER_TYPE",

            // Lifecycle
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::TerminalState(_) => "TERMINAL_STATE",

            // Conflict
            Self::UserAlreadyExists(_) => "USER_ALREADY_EXISTS",
            Self::ConcurrentModification(_) => "CONCURRENT_MODIFICATION",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::NotificationError(_) => "NOTIFICATION_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::UserNotFound(_) | Self::BadgeNotFound(_))
    }

    /// Check if this is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidAction(_) | Self::InvalidUserType(_)
        )
    }

    /// Check if this error was caused by the account's current state
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::InvalidTransition { .. }
                | Self::TerminalState(_)
                | Self::UserAlreadyExists(_)
                | Self::ConcurrentModification(_)
        )
    }
}
