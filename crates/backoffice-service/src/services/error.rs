//! Service layer error types
//!
//! Provides a unified error type for all service operations.

use backoffice_common::{domain_status_code, AppError};
use backoffice_core::{DomainError, UserIdParseError};

/// Service layer error type
#[derive(Debug, thiserror::Error)]
pub enum ServiceError {
    /// Domain rule violation
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Validation error
    #[error("{0}")]
    Validation(String),
}

impl ServiceError {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Domain(e) => domain_status_code(e),
            Self::Validation(_) => 400,
        }
    }

    /// Get the error code for API responses
    pub fn error_code(&self) -> &str {
        match self {
            Self::Domain(e) => e.code(),
            Self::Validation(_) => "VALIDATION_ERROR",
        }
    }
}

impl From<UserIdParseError> for ServiceError {
    fn from(err: UserIdParseError) -> Self {
        Self::Validation(format!("Invalid userId: {err}"))
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        match err {
            ServiceError::Domain(e) => AppError::Domain(e),
            ServiceError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for service operations
pub type ServiceResult<T> = Result<T, ServiceError>;
