//! # gym-api
//!
//! REST API server built with Axum framework. Also owns process startup:
//! database pool, migrations, the sweep scheduler and graceful shutdown.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, create_app_state_with_pool, run, run_server};
pub use state::AppState;
