//! Application state
//!
//! Holds the shared state for the Axum application including
//! the service context, token verification and configuration.

use std::sync::Arc;

use backoffice_common::{AppConfig, JwtService};
use backoffice_service::ServiceContext;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Verifies staff access tokens
    jwt_service: Arc<JwtService>,
    /// Application configuration
    config: Arc<AppConfig>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(service_context: ServiceContext, config: AppConfig) -> Self {
        let jwt_service = JwtService::new(&config.jwt.secret, config.jwt.access_token_expiry);
        Self {
            service_context: Arc::new(service_context),
            jwt_service: Arc::new(jwt_service),
            config: Arc::new(config),
        }
    }

    /// Get the service context
    pub fn service_context(&self) -> &ServiceContext {
        &self.service_context
    }

    /// Get the application configuration
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        &self.jwt_service
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("jwt_service", &self.jwt_service)
            .field("config", &"AppConfig")
            .finish()
    }
}
