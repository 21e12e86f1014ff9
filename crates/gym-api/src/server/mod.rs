//! Server setup and initialization
//!
//! Provides the application builder, dependency wiring and the server runner
//! with graceful shutdown of the background sweeps.

use std::sync::Arc;

use axum::Router;
use gym_common::{AppConfig, AppError};
use gym_db::{create_pool, default_migrations_dir, run_migrations, PgPool};
use gym_service::{Scheduler, ServiceContextBuilder, SweepSchedule};
use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::middleware::{apply_middleware_with_config, apply_request_tracing};
use crate::routes::{create_router, health_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
///
/// Health probes skip rate limiting and the request timeout but still get
/// request ids and access logs.
pub fn create_app(state: AppState) -> Result<Router, AppError> {
    let config = state.config();
    let api = apply_middleware_with_config(
        create_router(),
        &config.rate_limit,
        &config.cors,
        config.api.request_timeout(),
        config.app.env.is_production(),
    )?;

    let router = apply_request_tracing(api.merge(health_routes()));
    Ok(router.with_state(state))
}

/// Wire services and the scheduler around an existing pool
///
/// The scheduler is created but not started.
pub fn create_app_state_with_pool(pool: PgPool, config: AppConfig) -> Result<AppState, AppError> {
    let service_context = ServiceContextBuilder::from_config(pool.clone(), &config)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    let scheduler = Arc::new(Scheduler::new(
        service_context.clone(),
        SweepSchedule::from(&config.scheduler),
    ));

    Ok(AppState::new(
        Arc::new(service_context),
        config,
        pool,
        scheduler,
    ))
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    info!("Connecting to PostgreSQL...");
    let pool = create_pool(&config.database)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    if config.database.run_migrations {
        run_migrations(&pool, &default_migrations_dir())
            .await
            .map_err(|e| AppError::Database(format!("migration failed: {e}")))?;
    } else {
        warn!("RUN_MIGRATIONS is off; assuming the schema is current");
    }

    create_app_state_with_pool(pool, config)
}

/// Serve `app` on `listener` until `shutdown` resolves
pub async fn run_server<F>(app: Router, listener: TcpListener, shutdown: F) -> Result<(), AppError>
where
    F: std::future::Future<Output = ()> + Send + 'static,
{
    let addr = listener
        .local_addr()
        .map_err(|e| AppError::Config(format!("Failed to read local address: {e}")))?;
    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {e}")))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = config.api.address();

    let state = create_app_state(config).await?;
    let scheduler = state.scheduler_handle();
    let app = create_app(state)?;

    info!("Starting HTTP server on {}", addr);
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {addr}: {e}")))?;

    scheduler.start().await;

    let result = run_server(app, listener, shutdown_signal()).await;

    info!("Stopping background sweeps");
    scheduler.shutdown().await;

    result
}

/// Resolves on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                warn!(error = %e, "Failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("Shutdown signal received");
}
