//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use backoffice_cache::{RedisNotificationDispatcher, RedisPool, TracingNotificationDispatcher};
use backoffice_common::{AppConfig, AppError};
use backoffice_core::{AccountRepository, NotificationDispatcher};
use backoffice_db::{
    create_pool, run_migrations, DatabaseConfig, InMemoryAccountRepository, PgAccountRepository,
    DEFAULT_MIGRATIONS_DIR,
};
use backoffice_service::{DeletionSweeper, ServiceContextBuilder, SweeperConfig};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{error, info, warn};

use crate::middleware::{apply_middleware, apply_middleware_with_config};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Rate limiting is left out; see [`create_production_app`].
pub fn create_app(state: AppState) -> Router {
    let router = create_router().merge(health_routes());
    let router = apply_middleware(router);
    router.with_state(state)
}

/// Build the application with rate limiting and configured CORS on the API routes
///
/// Health probes bypass the rate limiter.
pub fn create_production_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    )?;
    let health = apply_middleware(health_routes());

    Ok(api.merge(health).with_state(state))
}

async fn account_repository(config: &AppConfig) -> Result<Arc<dyn AccountRepository>, AppError> {
    let Some(database) = &config.database else {
        warn!("DATABASE_URL not set, accounts are kept in memory");
        return Ok(Arc::new(InMemoryAccountRepository::new()));
    };

    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&DatabaseConfig::from(database))
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    run_migrations(&pool, DEFAULT_MIGRATIONS_DIR)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    Ok(Arc::new(PgAccountRepository::new(pool)))
}

fn notification_dispatcher(config: &AppConfig) -> Result<Arc<dyn NotificationDispatcher>, AppError> {
    let Some(redis) = &config.redis else {
        warn!("REDIS_URL not set, notifications are only logged");
        return Ok(Arc::new(TracingNotificationDispatcher));
    };

    info!("Connecting to Redis...");
    let pool = RedisPool::from_config(redis).map_err(|e| AppError::Cache(e.to_string()))?;
    info!("Redis pool created");

    Ok(Arc::new(RedisNotificationDispatcher::new(pool)))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    let account_repo = account_repository(&config).await?;
    let notifier = notification_dispatcher(&config)?;

    let service_context = ServiceContextBuilder::new()
        .account_repo(account_repo)
        .notifier(notifier)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("Received SIGINT, shutting down"),
        () = terminate => info!("Received SIGTERM, shutting down"),
    }
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
///
/// Also starts the background sweeper that finalizes due deletions.
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let address = config.api.address();
    let addr: SocketAddr = address
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid listen address {address}: {e}")))?;
    let sweeper_config = SweeperConfig::from(&config.lifecycle);

    let state = create_app_state(config).await?;

    let sweeper = DeletionSweeper::new(state.service_context().clone(), sweeper_config).spawn();

    let app = create_production_app(state)?;
    let result = run_server(app, addr).await;

    sweeper.abort();
    info!("Server shutdown complete");
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{header, Request, StatusCode};
    use backoffice_core::{Actor, StaffRole};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    fn test_config() -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            "API_PORT" => Some("0".to_string()),
            "JWT_SECRET" => Some("router-test-secret".to_string()),
            _ => None,
        })
        .unwrap()
    }

    async fn app() -> (Router, String) {
        let state = create_app_state(test_config()).await.unwrap();
        let token = state
            .jwt_service()
            .issue_access_token(&Actor::new("staff-1", "Morgan", StaffRole::Admin))
            .unwrap();
        (create_app(state), token)
    }

    async fn body_json(response: axum::response::Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_needs_no_token() {
        let (app, _) = app().await;
        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().contains_key("x-request-id"));
    }

    #[tokio::test]
    async fn test_api_requires_token() {
        let (app, _) = app().await;
        let response = app
            .oneshot(
                Request::get("/api/profile/jobseeker/js-1")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["code"], "MISSING_AUTHORIZATION");
    }

    #[tokio::test]
    async fn test_provision_then_read_profile() {
        let (app, token) = app().await;
        let bearer = format!("Bearer {token}");

        let response = app
            .clone()
            .oneshot(
                Request::post("/api/users")
                    .header(header::AUTHORIZATION, &bearer)
                    .header(header::CONTENT_TYPE, "application/json")
                    .body(Body::from(
                        json!({ "userId": "js-1", "userType": "jobseeker" }).to_string(),
                    ))
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = app
            .oneshot(
                Request::get("/api/profile/jobseeker/js-1")
                    .header(header::AUTHORIZATION, &bearer)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = body_json(response).await;
        assert_eq!(body["id"], "js-1");
        assert_eq!(body["status"], "active");
    }
}
