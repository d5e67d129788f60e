//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers backed by in-memory
//! adapters and a manual clock, and for making authenticated requests.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use backoffice_api::{create_app, AppState};
use backoffice_cache::TracingNotificationDispatcher;
use backoffice_common::AppConfig;
use backoffice_core::{Actor, ManualClock, StaffRole};
use backoffice_db::InMemoryAccountRepository;
use backoffice_service::{DeletionSweeper, ServiceContextBuilder, SweepReport, SweeperConfig};
use chrono::{TimeZone, Utc};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    /// Clock shared with the service layer
    pub clock: Arc<ManualClock>,
    /// Token of an admin-role staff member
    pub staff_token: String,
    state: AppState,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server
    pub async fn start() -> Result<Self> {
        let config = test_config()?;
        Self::start_with_config(config).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig) -> Result<Self> {
        let clock = Arc::new(ManualClock::new(
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
        ));
        let service_context = ServiceContextBuilder::new()
            .account_repo(Arc::new(InMemoryAccountRepository::new()))
            .notifier(Arc::new(TracingNotificationDispatcher))
            .clock(clock.clone())
            .build()?;
        let state = AppState::new(service_context, config);

        let staff_token = state
            .jwt_service()
            .issue_access_token(&staff_actor())?;

        let app = create_app(state.clone());

        // Port 0 lets the OS pick a free port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder()
            .timeout(Duration::from_secs(10))
            .build()?;

        Ok(Self {
            addr,
            client,
            clock,
            staff_token,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Issue a token for any staff member
    pub fn token_for(&self, actor: &Actor) -> Result<String> {
        Ok(self.state.jwt_service().issue_access_token(actor)?)
    }

    /// Run one pass of the deletion sweeper against the server's state
    pub async fn sweep(&self) -> Result<SweepReport> {
        let sweeper = DeletionSweeper::new(
            self.state.service_context().clone(),
            SweeperConfig::default(),
        );
        Ok(sweeper.run_once().await?)
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a GET request with auth token
    pub async fn get_auth(&self, path: &str, token: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {token}"))
            .send()
            .await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a POST request with auth token
    pub async fn post_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a PATCH request with auth token
    pub async fn patch_auth<T: Serialize>(
        &self,
        path: &str,
        token: &str,
        body: &T,
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .patch(&url)
            .header("Authorization", format!("Bearer {token}"))
            .json(body)
            .send()
            .await?)
    }

    /// Make a DELETE request with auth token and query parameters
    pub async fn delete_auth(
        &self,
        path: &str,
        token: &str,
        query: &[(&str, &str)],
    ) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self
            .client
            .delete(&url)
            .header("Authorization", format!("Bearer {token}"))
            .query(query)
            .send()
            .await?)
    }
}

/// Admin-role staff member used by most tests
pub fn staff_actor() -> Actor {
    Actor::new("staff-1", "Morgan", StaffRole::Admin)
}

/// Create a test configuration with in-memory backends
pub fn test_config() -> Result<AppConfig> {
    let vars: HashMap<&str, &str> = HashMap::from([
        ("API_PORT", "0"),
        ("JWT_SECRET", "integration-test-secret"),
    ]);

    let config = AppConfig::from_lookup(|key| vars.get(key).map(|v| (*v).to_string()))
        .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(response: Response, expected_status: StatusCode) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
