//! JWT utilities for staff authentication
//!
//! Sessions are owned by the identity provider; this service only verifies
//! bearer tokens and turns their claims into an [`Actor`]. Token issuance is
//! kept for local tooling and tests.

use backoffice_core::{Actor, StaffRole};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenType {
    Access,
    Refresh,
}

/// JWT claims structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (staff member ID)
    pub sub: String,
    /// Display name recorded on badges and notes
    pub name: String,
    #[serde(default)]
    pub role: StaffRole,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration time (Unix timestamp)
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: TokenType,
}

impl Claims {
    /// The caller identity carried by this token
    #[must_use]
    pub fn actor(&self) -> Actor {
        Actor::new(self.sub.clone(), self.name.clone(), self.role)
    }

    /// Check if the token is expired
    #[must_use]
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() > self.exp
    }

    /// Check if this is an access token
    #[must_use]
    pub fn is_access_token(&self) -> bool {
        self.token_type == TokenType::Access
    }
}

/// JWT service for encoding and decoding tokens
#[derive(Clone)]
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_expiry: i64,
}

impl JwtService {
    /// Create a new JWT service with the given secret and access token lifetime in seconds
    #[must_use]
    pub fn new(secret: &str, access_token_expiry: i64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_expiry,
        }
    }

    /// Issue an access token for a staff member
    ///
    /// # Errors
    /// Returns an error if token encoding fails
    pub fn issue_access_token(&self, actor: &Actor) -> Result<String, AppError> {
        self.encode_token(actor, TokenType::Access)
    }

    fn encode_token(&self, actor: &Actor, token_type: TokenType) -> Result<String, AppError> {
        let now = Utc::now();
        let claims = Claims {
            sub: actor.id.clone(),
            name: actor.name.clone(),
            role: actor.role,
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.access_token_expiry)).timestamp(),
            token_type,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|_| AppError::Internal(anyhow::anyhow!("Failed to encode JWT")))
    }

    /// Decode and validate a JWT token
    ///
    /// # Errors
    /// Returns an error if the token is invalid or expired
    pub fn decode_token(&self, token: &str) -> Result<Claims, AppError> {
        let validation = Validation::default();

        let token_data = decode::<Claims>(token, &self.decoding_key, &validation).map_err(|e| {
            match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => AppError::TokenExpired,
                _ => AppError::InvalidToken,
            }
        })?;

        Ok(token_data.claims)
    }

    /// Validate an access token and return the claims
    ///
    /// # Errors
    /// Returns an error if the token is invalid, expired, not an access token,
    /// or claims the reserved system role
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        let claims = self.decode_token(token)?;

        if !claims.is_access_token() || claims.role == StaffRole::System {
            return Err(AppError::InvalidToken);
        }

        Ok(claims)
    }
}

impl std::fmt::Debug for JwtService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtService")
            .field("access_token_expiry", &self.access_token_expiry)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test-secret-key-that-is-long-enough", 900)
    }

    fn moderator() -> Actor {
        Actor::new("staff-7", "Morgan", StaffRole::Admin)
    }

    #[test]
    fn test_issue_and_validate() {
        let service = create_test_service();
        let token = service.issue_access_token(&moderator()).unwrap();

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.sub, "staff-7");
        assert!(!claims.is_expired());
        assert_eq!(claims.actor(), moderator());
    }

    #[test]
    fn test_refresh_token_rejected_as_access() {
        let service = create_test_service();
        let token = service
            .encode_token(&moderator(), TokenType::Refresh)
            .unwrap();

        assert!(service.decode_token(&token).is_ok());
        assert!(matches!(
            service.validate_access_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_system_role_rejected() {
        let service = create_test_service();
        let token = service.issue_access_token(&Actor::system()).unwrap();
        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_invalid_token() {
        let service = create_test_service();

        let result = service.decode_token("invalid.token.here");
        assert!(matches!(result, Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_wrong_secret() {
        let token = create_test_service()
            .issue_access_token(&moderator())
            .unwrap();
        let other = JwtService::new("a-completely-different-secret", 900);
        assert!(matches!(
            other.validate_access_token(&token),
            Err(AppError::InvalidToken)
        ));
    }

    #[test]
    fn test_expired_token() {
        // Default validation allows 60s of leeway
        let service = JwtService::new("test-secret-key-that-is-long-enough", -120);
        let token = service.issue_access_token(&moderator()).unwrap();
        assert!(matches!(
            service.validate_access_token(&token),
            Err(AppError::TokenExpired)
        ));
    }
}
