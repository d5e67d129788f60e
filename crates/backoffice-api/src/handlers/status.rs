//! Moderation action handler

use axum::{extract::State, Json};
use backoffice_service::dto::{ActionResponse, ApplyActionRequest};
use backoffice_service::ModerationService;

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::ApiResult;
use crate::state::AppState;

/// Apply a moderation action
///
/// POST /profile/status
pub async fn apply_action(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ApplyActionRequest>,
) -> ApiResult<Json<ActionResponse>> {
    let service = ModerationService::new(state.service_context());
    let outcome = service.apply_action(&auth.actor, request).await?;
    Ok(Json(ActionResponse::from(&outcome)))
}
