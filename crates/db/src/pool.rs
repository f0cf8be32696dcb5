//! Postgres connection pool and the startup initializer.
//!
//! `initialize` is the only way the rest of the application obtains a pool:
//! it connects, pings, and applies the schema migration before returning.
//! Any failure is returned to the caller, which is expected to abort.

use std::path::Path;

use sqlx::postgres::PgPoolOptions;
use sqlx::{Connection, PgPool};
use tracing::info;

use crate::{DbConfig, DbError};

/// Type alias for the shared Postgres pool used across the whole application.
pub type DbPool = PgPool;

/// Default location of the schema migration, relative to the working directory.
pub const DEFAULT_MIGRATION_PATH: &str = "migrations/001_create_todos.sql";

/// Create a new connection pool for `config`.
pub async fn create_pool(config: &DbConfig) -> Result<DbPool, DbError> {
    info!(
        host = %config.host,
        port = config.port,
        database = %config.name,
        "Connecting to database (max_connections={})",
        config.max_connections
    );
    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(config.connect_timeout)
        .connect_with(config.connect_options())
        .await?;
    Ok(pool)
}

/// Round-trip on one pooled connection to prove the store is reachable.
pub async fn ping(pool: &DbPool) -> Result<(), DbError> {
    let mut conn = pool.acquire().await?;
    conn.ping().await?;
    Ok(())
}

/// Read the SQL script at `path` and execute it against the store.
///
/// The script must be re-runnable (`CREATE TABLE IF NOT EXISTS`), since it is
/// applied on every start.
pub async fn apply_migration(pool: &DbPool, path: &Path) -> Result<(), DbError> {
    info!("Applying migration {}", path.display());
    let script = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| DbError::MigrationRead {
            path: path.to_path_buf(),
            source,
        })?;

    sqlx::raw_sql(&script)
        .execute(pool)
        .await
        .map_err(|source| DbError::Migration {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(())
}

/// Connect, verify liveness, and migrate. The returned pool is ready to serve.
pub async fn initialize(config: &DbConfig, migration_path: &Path) -> Result<DbPool, DbError> {
    let pool = create_pool(config).await?;
    ping(&pool).await?;
    apply_migration(&pool, migration_path).await?;
    info!("Migration applied - todos table ready");
    Ok(pool)
}
