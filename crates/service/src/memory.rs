//! `MemoryStore` — an in-process test double for `TodoStore`.
//!
//! Mirrors the Postgres semantics the service relies on (sequence ids that
//! are never reused, `id` ordering, zero-row outcomes) without a database.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use db::{DbError, Todo};

use crate::TodoStore;

#[derive(Default)]
struct Inner {
    rows: BTreeMap<i32, Todo>,
    last_id: i32,
}

/// A store that keeps rows in memory and can be told to fail every call.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    failing: AtomicBool,
    calls: Mutex<Vec<&'static str>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store whose every operation fails with a storage error.
    pub fn failing() -> Self {
        let store = Self::default();
        store.set_failing(true);
        store
    }

    pub fn set_failing(&self, failing: bool) {
        self.failing.store(failing, Ordering::SeqCst);
    }

    /// Names of the operations invoked so far, in call order.
    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Number of rows currently stored.
    pub fn len(&self) -> usize {
        self.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn enter(&self, op: &'static str) -> Result<(), DbError> {
        self.calls.lock().unwrap_or_else(|e| e.into_inner()).push(op);
        if self.failing.load(Ordering::SeqCst) {
            return Err(DbError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

#[async_trait]
impl TodoStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Todo>, DbError> {
        self.enter("list")?;
        Ok(self.lock().rows.values().cloned().collect())
    }

    async fn insert(&self, body: &str) -> Result<Todo, DbError> {
        self.enter("insert")?;
        let mut inner = self.lock();
        inner.last_id += 1;
        let todo = Todo {
            id: inner.last_id,
            body: body.to_owned(),
            completed: false,
        };
        inner.rows.insert(todo.id, todo.clone());
        Ok(todo)
    }

    async fn toggle(&self, id: i32) -> Result<Option<Todo>, DbError> {
        self.enter("toggle")?;
        let mut inner = self.lock();
        Ok(inner.rows.get_mut(&id).map(|todo| {
            todo.completed = !todo.completed;
            todo.clone()
        }))
    }

    async fn delete(&self, id: i32) -> Result<(), DbError> {
        self.enter("delete")?;
        self.lock().rows.remove(&id).map(|_| ()).ok_or(DbError::NotFound)
    }
}
