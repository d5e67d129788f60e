//! Profile handlers
//!
//! Endpoints for reading and editing a user's profile.

use axum::{extract::State, Json};
use backoffice_service::dto::{MessageResponse, ProfileResponse};
use backoffice_service::ProfileService;
use serde_json::Value;

use crate::extractors::{ApiPath, AuthUser, JsonBody, ProfilePath};
use crate::response::ApiResult;
use crate::state::AppState;

/// Get a profile
///
/// GET /profile/{user_type}/{user_id}
pub async fn get_profile(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(path): ApiPath<ProfilePath>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.get_profile(&path.user_type, &path.user_id).await?;
    Ok(Json(profile))
}

/// Merge a partial update into a profile
///
/// PATCH /profile/{user_type}/{user_id}
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ApiPath(path): ApiPath<ProfilePath>,
    JsonBody(patch): JsonBody<Value>,
) -> ApiResult<Json<MessageResponse>> {
    let service = ProfileService::new(state.service_context());
    let changed = service
        .update_profile(&auth.actor, &path.user_type, &path.user_id, patch)
        .await?;

    let message = if changed.is_empty() {
        "Profile unchanged".to_string()
    } else {
        format!("Profile updated: {}", changed.join(", "))
    };
    Ok(Json(MessageResponse::ok(message)))
}
