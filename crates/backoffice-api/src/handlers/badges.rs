//! Badge handlers

use axum::{extract::State, Json};
use backoffice_service::dto::{
    AddBadgeRequest, BadgeCreatedResponse, MessageResponse, RemoveBadgeRequest,
};
use backoffice_service::BadgeService;

use crate::extractors::{AuthUser, ValidatedJson, ValidatedQuery};
use crate::response::ApiResult;
use crate::state::AppState;

/// Attach a badge to a user
///
/// POST /profile/badges
pub async fn add_badge(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<AddBadgeRequest>,
) -> ApiResult<Json<BadgeCreatedResponse>> {
    let service = BadgeService::new(state.service_context());
    let badge = service.add_badge(&auth.actor, request).await?;
    Ok(Json(BadgeCreatedResponse {
        success: true,
        badge,
    }))
}

/// Remove a badge
///
/// DELETE /profile/badges?badgeId=..&reason=..[&userId=..]
pub async fn remove_badge(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedQuery(request): ValidatedQuery<RemoveBadgeRequest>,
) -> ApiResult<Json<MessageResponse>> {
    let service = BadgeService::new(state.service_context());
    let badge = service.remove_badge(&auth.actor, request).await?;
    Ok(Json(MessageResponse::ok(format!(
        "Badge {} removed successfully",
        badge.label
    ))))
}
