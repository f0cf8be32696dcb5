//! The `TodoStore` trait — the contract between the service and storage.

use async_trait::async_trait;

use db::repository::todos;
use db::{DbError, DbPool, Todo};

/// Storage operations the service needs, one statement each.
///
/// Implementations must be safe to share across concurrent requests; the
/// service keeps no state of its own.
#[async_trait]
pub trait TodoStore: Send + Sync {
    /// All todos, `id` ascending.
    async fn list(&self) -> Result<Vec<Todo>, DbError>;

    /// Insert an open todo and return it with its assigned `id`.
    async fn insert(&self, body: &str) -> Result<Todo, DbError>;

    /// Flip `completed`; `None` when no row has this `id`.
    async fn toggle(&self, id: i32) -> Result<Option<Todo>, DbError>;

    /// Hard delete; `DbError::NotFound` when no row was removed.
    async fn delete(&self, id: i32) -> Result<(), DbError>;
}

/// Postgres-backed store. Cloning shares the underlying pool.
#[derive(Debug, Clone)]
pub struct PgTodoStore {
    pool: DbPool,
}

impl PgTodoStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TodoStore for PgTodoStore {
    async fn list(&self) -> Result<Vec<Todo>, DbError> {
        todos::list_todos(&self.pool).await
    }

    async fn insert(&self, body: &str) -> Result<Todo, DbError> {
        todos::insert_todo(&self.pool, body).await
    }

    async fn toggle(&self, id: i32) -> Result<Option<Todo>, DbError> {
        todos::toggle_todo(&self.pool, id).await
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        todos::delete_todo(&self.pool, id).await
    }
}
