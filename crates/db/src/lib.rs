//! Database layer for the Playbill backend.
//!
//! Exposes the connection [`DbPool`], the entity models, the repositories
//! that own all SQL, and the [`transfer`] module that shapes records for
//! the wire.

use std::str::FromStr;
use std::time::Duration;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

pub mod models;
pub mod repositories;
pub mod transfer;

/// Shared connection pool type used across the workspace.
pub type DbPool = sqlx::SqlitePool;

/// Create a SQLite connection pool from a database URL.
///
/// The database file is created on first run. A busy timeout keeps
/// concurrent writers from failing immediately on a locked database.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .busy_timeout(Duration::from_secs(5));

    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Verify database connectivity with a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Run all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
