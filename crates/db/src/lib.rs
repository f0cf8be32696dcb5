//! `db` crate — pure persistence layer.
//!
//! Provides the storage initializer (pool + ping + schema migration), the
//! `Todo` row struct, and repository functions for the `todos` table.
//! No validation or HTTP concerns live here.

pub mod config;
pub mod error;
pub mod pool;
pub mod repository;
pub mod models;

pub use config::DbConfig;
pub use pool::DbPool;
pub use error::DbError;
pub use models::Todo;
