//! Typed error type for the db crate.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("sqlx error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("row not found")]
    NotFound,

    #[error("cannot read migration {}: {source}", .path.display())]
    MigrationRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("migration {} failed: {source}", .path.display())]
    Migration {
        path: PathBuf,
        #[source]
        source: sqlx::Error,
    },
}
