//! Authentication extractor
//!
//! Extracts and validates staff JWT tokens from the Authorization header.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use backoffice_core::Actor;

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated staff member extracted from JWT token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub actor: Actor,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(actor: Actor) -> Self {
        Self { actor }
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|rejection| {
                    if rejection.is_missing() {
                        ApiError::MissingAuth
                    } else {
                        ApiError::InvalidAuthFormat
                    }
                })?;

        let app_state = AppState::from_ref(state);

        let claims = app_state
            .jwt_service()
            .validate_access_token(bearer.token())
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::App(e)
            })?;

        Ok(AuthUser::new(claims.actor()))
    }
}
