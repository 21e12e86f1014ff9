//! Schema migrations applied at startup

use sqlx::migrate::{MigrateError, Migrator};
use sqlx::PgPool;
use std::path::{Path, PathBuf};
use tracing::info;

/// `migrations/` directory shipped with this crate
pub fn default_migrations_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("migrations")
}

/// Apply every pending migration found in `dir`
pub async fn run_migrations(pool: &PgPool, dir: &Path) -> Result<(), MigrateError> {
    let migrator = Migrator::new(dir).await?;
    info!(
        dir = %dir.display(),
        known = migrator.iter().count(),
        "Applying database migrations"
    );
    migrator.run(pool).await
}
