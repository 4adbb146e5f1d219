//! Schema migrations for the tutoring tables.

use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::info;

use tutor_core::error::{AppError, ErrorKind};
use tutor_core::result::AppResult;

/// Migrations embedded from the workspace `migrations/` directory.
pub static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// Apply pending migrations. Returns the latest known schema version.
pub async fn run_migrations(pool: &PgPool) -> AppResult<i64> {
    let latest = MIGRATOR.iter().map(|m| m.version).max().unwrap_or_default();
    info!(
        known = MIGRATOR.iter().count(),
        latest, "Applying schema migrations"
    );

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Schema migration failed: {e}"),
            e,
        )
    })?;

    info!(latest, "Schema is up to date");
    Ok(latest)
}
