//! User administration handlers
//!
//! Endpoints for provisioning, lifecycle changes and the audit trail.

use axum::{extract::State, Json};
use backoffice_service::dto::{
    AuditLogResponse, BlockUserRequest, CancelDeletionRequest, ChangeStatusRequest, DataResponse,
    DeleteUserRequest, ProfileResponse, ProvisionAccountRequest, StatusChangeData,
    SuspendUserRequest,
};
use backoffice_service::{AuditService, ModerationOutcome, ModerationService, ProfileService};

use crate::extractors::{ApiPath, AuthUser, UserIdPath, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

type StatusChangeResponse = Json<DataResponse<StatusChangeData>>;

fn status_change(outcome: &ModerationOutcome) -> StatusChangeResponse {
    Json(DataResponse::ok(
        outcome.message(),
        StatusChangeData::from(outcome),
    ))
}

/// Provision an account for a newly registered user
///
/// POST /users
pub async fn provision_account(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ProvisionAccountRequest>,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let profile = service.provision_account(&auth.actor, request).await?;
    Ok(Created(Json(profile)))
}

/// Deactivate a user (legacy block endpoint)
///
/// POST /users/block
pub async fn block_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<BlockUserRequest>,
) -> ApiResult<StatusChangeResponse> {
    let service = ModerationService::new(state.service_context());
    let outcome = service.block_user(&auth.actor, request).await?;
    Ok(status_change(&outcome))
}

/// Schedule a user for deletion
///
/// POST /users/delete
pub async fn delete_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<DeleteUserRequest>,
) -> ApiResult<StatusChangeResponse> {
    let service = ModerationService::new(state.service_context());
    let outcome = service.delete_user(&auth.actor, request).await?;
    Ok(status_change(&outcome))
}

/// Move a user to a target status
///
/// PATCH /users/status
pub async fn change_status(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ChangeStatusRequest>,
) -> ApiResult<StatusChangeResponse> {
    let service = ModerationService::new(state.service_context());
    let outcome = service.change_status(&auth.actor, request).await?;
    Ok(status_change(&outcome))
}

/// Suspend a user for a date window
///
/// POST /users/suspend
pub async fn suspend_user(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<SuspendUserRequest>,
) -> ApiResult<StatusChangeResponse> {
    let service = ModerationService::new(state.service_context());
    let outcome = service.suspend_user(&auth.actor, request).await?;
    Ok(status_change(&outcome))
}

/// Cancel a scheduled deletion
///
/// POST /users/deletion/cancel
pub async fn cancel_deletion(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CancelDeletionRequest>,
) -> ApiResult<StatusChangeResponse> {
    let service = ModerationService::new(state.service_context());
    let outcome = service.cancel_deletion(&auth.actor, request).await?;
    Ok(status_change(&outcome))
}

/// Audit trail of a user
///
/// GET /users/{user_id}/audit
pub async fn get_audit_log(
    State(state): State<AppState>,
    _auth: AuthUser,
    ApiPath(path): ApiPath<UserIdPath>,
) -> ApiResult<Json<AuditLogResponse>> {
    let service = AuditService::new(state.service_context());
    let entries = service.list_audit_log(&path.user_id).await?;
    Ok(Json(AuditLogResponse { entries }))
}
