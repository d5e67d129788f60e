//! Route definitions
//!
//! All staff routes are mounted under /api; health probes live at the root.

use axum::{
    routing::{get, patch, post},
    Router,
};

use crate::handlers::{badges, health, notes, profile, status, users};
use crate::state::AppState;

/// Create the main API router with all routes (excluding health for separate middleware handling)
pub fn create_router() -> Router<AppState> {
    Router::new().nest("/api", api_routes())
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(profile_routes())
        .merge(user_routes())
}

/// Profile, badge, note and moderation action routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/profile/badges",
            post(badges::add_badge).delete(badges::remove_badge),
        )
        .route("/profile/notes", post(notes::add_note).get(notes::list_notes))
        .route("/profile/status", post(status::apply_action))
        .route(
            "/profile/:user_type/:user_id",
            get(profile::get_profile).patch(profile::update_profile),
        )
}

/// User administration routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(users::provision_account))
        .route("/users/block", post(users::block_user))
        .route("/users/delete", post(users::delete_user))
        .route("/users/status", patch(users::change_status))
        .route("/users/suspend", post(users::suspend_user))
        .route("/users/deletion/cancel", post(users::cancel_deletion))
        .route("/users/:user_id/audit", get(users::get_audit_log))
}
