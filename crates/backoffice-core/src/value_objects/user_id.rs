//! User ID - opaque account identifier assigned by the registration system

use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum accepted identifier length
pub const MAX_USER_ID_LEN: usize = 128;

/// Opaque, caller-assigned account identifier
///
/// Serialized as a plain JSON string.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Parse an identifier, trimming surrounding whitespace
    pub fn parse(s: &str) -> Result<Self, UserIdParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(UserIdParseError::Empty);
        }
        if trimmed.len() > MAX_USER_ID_LEN {
            return Err(UserIdParseError::TooLong { max: MAX_USER_ID_LEN });
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Borrow the identifier as a string slice
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume into the inner string
    #[inline]
    pub fn into_inner(self) -> String {
        self.0
    }
}

/// Error when parsing a [`UserId`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum UserIdParseError {
    #[error("user id is empty")]
    Empty,

    #[error("user id longer than {max} characters")]
    TooLong { max: usize },
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for UserId {
    type Err = UserIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserId::parse(s)
    }
}

impl AsRef<str> for UserId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
