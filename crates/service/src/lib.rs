//! `service` crate — the Todo service: input validation, the storage seam,
//! and the mapping from storage outcomes to service results.

pub mod error;
pub mod models;
pub mod store;
pub mod memory;
pub mod service;

pub use db::{DbError, Todo};
pub use error::{ErrorKind, ServiceError};
pub use models::{parse_id, parse_lookup_id, NewTodo, MAX_BODY_CHARS};
pub use store::{PgTodoStore, TodoStore};
pub use memory::MemoryStore;
pub use service::TodoService;
