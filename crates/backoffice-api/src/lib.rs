//! # backoffice-api
//!
//! REST API server for staff moderation, built with the Axum framework.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_production_app, run};
pub use state::AppState;
