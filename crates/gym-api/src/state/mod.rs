//! Application state
//!
//! Holds the shared state for the Axum application: the service context,
//! configuration, the database pool (for readiness probes) and the sweep
//! scheduler.

use std::sync::Arc;

use gym_common::AppConfig;
use gym_db::PgPool;
use gym_service::{Scheduler, ServiceContext};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    /// Service context containing all dependencies
    service_context: Arc<ServiceContext>,
    /// Application configuration
    config: Arc<AppConfig>,
    /// Pool used by the readiness probe
    pool: PgPool,
    /// Background sweeps
    scheduler: Arc<Scheduler>,
}

impl AppState {
    /// Create a new AppState
    pub fn new(
        service_context: Arc<ServiceContext>,
        config: AppConfig,
        pool: PgPool,
        scheduler: Arc<Scheduler>,
    ) -> Self {
        Self {
            service_context,
            config: Arc::new(config),
            pool,
            scheduler,
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

    /// Get the database pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the sweep scheduler
    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Owned handle to the scheduler, for starting and stopping it
    pub fn scheduler_handle(&self) -> Arc<Scheduler> {
        Arc::clone(&self.scheduler)
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("service_context", &"ServiceContext")
            .field("config", &"AppConfig")
            .field("scheduler_running", &self.scheduler.is_running())
            .finish()
    }
}
