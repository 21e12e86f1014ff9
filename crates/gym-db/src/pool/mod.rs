//! Database connection pool and schema migrations

mod migrations;
mod postgres;

pub use migrations::{default_migrations_dir, run_migrations};
pub use postgres::{create_lazy_pool, create_pool, PoolOptions};

// Re-export PgPool for convenience
pub use sqlx::postgres::PgPool;
