//! Row structs that map 1-to-1 onto database tables.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// todos
// ---------------------------------------------------------------------------

/// A persisted todo row.
///
/// `id` comes from the `SERIAL` sequence and is never client-supplied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Todo {
    pub id: i32,
    pub body: String,
    pub completed: bool,
}
