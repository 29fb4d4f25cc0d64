//! PostgreSQL persistence for rabbis and series.
//!
//! Row models and DTOs live in [`models`], query code in [`repositories`].

use sqlx::postgres::PgPoolOptions;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(10)
        .connect(database_url)
        .await
}

/// Verify the database answers a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await?;
    tracing::debug!("Migrations up to date");
    Ok(())
}

/// Upper bound on an explicitly requested page size.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a caller-supplied page size into `1..=MAX_LIST_LIMIT`.
///
/// `None` stays `None`: list queries then return every row.
pub fn clamp_limit(limit: Option<i64>) -> Option<i64> {
    limit.map(|n| n.clamp(1, MAX_LIST_LIMIT))
}

/// Clamp a caller-supplied offset to be non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
