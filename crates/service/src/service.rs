//! The todo service.
//!
//! `TodoService` owns no data. Every operation validates its input, issues
//! exactly one store call, and translates the outcome:
//! 1. Validation failures return before the store is touched.
//! 2. Zero-row outcomes (`None` / `DbError::NotFound`) become `NotFound`.
//! 3. Anything else from the store becomes `Storage`.

use std::sync::Arc;

use tracing::{debug, error, info, instrument};

use db::{DbError, DbPool, Todo};

use crate::models::{parse_id, parse_lookup_id, NewTodo};
use crate::store::{PgTodoStore, TodoStore};
use crate::ServiceError;

/// Cheap to clone; all clones share one store handle.
#[derive(Clone)]
pub struct TodoService {
    store: Arc<dyn TodoStore>,
}

impl TodoService {
    pub fn new(store: Arc<dyn TodoStore>) -> Self {
        Self { store }
    }

    /// Service over an initialized Postgres pool.
    pub fn postgres(pool: DbPool) -> Self {
        Self::new(Arc::new(PgTodoStore::new(pool)))
    }

    /// All todos ordered by `id` ascending. Empty when there are none.
    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Todo>, ServiceError> {
        let todos = self.store.list().await.map_err(storage("list"))?;
        debug!(count = todos.len(), "listed todos");
        Ok(todos)
    }

    /// Validate a raw create payload and persist it as an open todo.
    #[instrument(skip(self, payload), fields(payload_len = payload.len()))]
    pub async fn create(&self, payload: &[u8]) -> Result<Todo, ServiceError> {
        let new = NewTodo::parse(payload)?;
        let todo = self.store.insert(new.body()).await.map_err(storage("insert"))?;
        info!(id = todo.id, "created todo");
        Ok(todo)
    }

    /// Flip `completed` on the todo named by `raw_id` and return it.
    ///
    /// Each call flips again; two calls restore the original value. Only
    /// non-integer ids are rejected up front; any other miss is `NotFound`.
    #[instrument(skip(self))]
    pub async fn toggle(&self, raw_id: &str) -> Result<Todo, ServiceError> {
        let id = parse_lookup_id(raw_id)?;
        let todo = self
            .store
            .toggle(id)
            .await
            .map_err(storage("toggle"))?
            .ok_or(ServiceError::NotFound(id))?;
        info!(id, completed = todo.completed, "toggled todo");
        Ok(todo)
    }

    /// Hard-delete the todo named by `raw_id`.
    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<(), ServiceError> {
        let id = parse_id(raw_id)?;
        match self.store.delete(id).await {
            Ok(()) => {
                info!(id, "deleted todo");
                Ok(())
            }
            Err(DbError::NotFound) => Err(ServiceError::NotFound(id)),
            Err(e) => Err(storage("delete")(e)),
        }
    }
}

/// Log a store failure and wrap it as a storage error.
fn storage(op: &'static str) -> impl Fn(DbError) -> ServiceError {
    move |e| {
        error!(op, error = %e, "store call failed");
        ServiceError::Storage(e)
    }
}
