//! Health check handlers
//!
//! Endpoints for liveness and readiness probes.

use axum::{extract::State, http::StatusCode, Json};
use backoffice_service::dto::{HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(State(state): State<AppState>) -> (StatusCode, Json<ReadinessResponse>) {
    let ctx = state.service_context();

    let repository_healthy = ctx.account_repo().ping().await.is_ok();
    let notifications_healthy = ctx.notifier().ping().await.is_ok();

    let response = ReadinessResponse::ready(repository_healthy, notifications_healthy);
    let status = if response.is_ready() {
        StatusCode::OK
    } else {
        tracing::warn!(
            repository = repository_healthy,
            notifications = notifications_healthy,
            "Readiness check failed"
        );
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}
