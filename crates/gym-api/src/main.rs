//! Gym API Server entry point
//!
//! Run with:
//! ```bash
//! cargo run -p gym-api
//! ```
//!
//! Configuration is loaded from environment variables (a `.env` file is honoured).

use gym_common::{try_init_tracing, try_init_tracing_with_config, AppConfig, TracingConfig};
use tracing::{error, info};

#[tokio::main]
async fn main() {
    // Load configuration first so the log format can follow APP_ENV
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            let _ = try_init_tracing();
            error!(error = %e, "Failed to load configuration");
            std::process::exit(1);
        }
    };

    // Initialize tracing
    if let Err(e) = try_init_tracing_with_config(TracingConfig::for_environment(config.app.env)) {
        eprintln!("Warning: Failed to initialize tracing: {}", e);
    }

    info!(
        env = ?config.app.env,
        port = config.api.port,
        "Starting Gym API Server..."
    );

    // Run the server
    if let Err(e) = gym_api::run(config).await {
        error!(error = %e, "Server failed to start");
        std::process::exit(1);
    }
}
