//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers, making HTTP requests and
//! driving the background sweeps on demand.

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Result;
use gym_api::{create_app, create_app_state, AppState};
use gym_common::AppConfig;
use gym_core::{ExpirySweepOutcome, MemberId};
use gym_service::{run_absence_sweep, run_payment_sweep};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

const SWEEP_LIMIT: Duration = Duration::from_secs(30);

/// Test server instance that manages lifecycle
///
/// The scheduler is not started, so sweeps only run when a test asks.
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
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
        // Migrations run here when RUN_MIGRATIONS is on (the default)
        let state = create_app_state(config).await?;
        let app = create_app(state.clone())?;

        // Ephemeral port so tests can run in parallel
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            state,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Shared state of the running app
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Run the absence sweep for today, as the scheduler would
    pub async fn sweep_absences(&self) -> Result<u64> {
        Ok(run_absence_sweep(self.state.service_context(), SWEEP_LIMIT).await?)
    }

    /// Run the payment expiry sweep, as the scheduler would
    pub async fn sweep_payments(&self) -> Result<ExpirySweepOutcome> {
        Ok(run_payment_sweep(self.state.service_context(), SWEEP_LIMIT).await?)
    }

    /// Move a member's payment `days` into the past
    pub async fn backdate_payment(&self, member_id: MemberId, days: i32) -> Result<()> {
        let member_id = member_id.into_inner();
        sqlx::query(
            "UPDATE payments SET payment_date = NOW() - make_interval(days => $2) WHERE member_id = $1",
        )
        .bind(member_id)
        .bind(days)
        .execute(self.state.pool())
        .await?;
        sqlx::query(
            "UPDATE members SET payment_date = NOW() - make_interval(days => $2) WHERE id = $1",
        )
        .bind(member_id)
        .bind(days)
        .execute(self.state.pool())
        .await?;
        Ok(())
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PATCH request with JSON body
    pub async fn patch<T: Serialize + ?Sized>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.patch(&url).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }
}

/// Configuration from the environment, with an ephemeral port and reminders
/// forced onto the logging dispatcher
pub fn test_config() -> Result<AppConfig> {
    dotenvy::dotenv().ok();

    let config = AppConfig::from_lookup(|key| match key {
        "API_PORT" => Some("0".to_string()),
        "MAIL_RELAY_URL" => None,
        other => std::env::var(other).ok(),
    })
    .map_err(|e| anyhow::anyhow!("Config error: {}", e))?;

    Ok(config)
}

/// Helper to check if test environment is available
pub async fn check_test_env() -> bool {
    dotenvy::dotenv().ok();

    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("Skipping test: DATABASE_URL not set");
        return false;
    }

    true
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
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
