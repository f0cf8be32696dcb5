//! Service-level error types.

use thiserror::Error;

use crate::models::MAX_BODY_CHARS;

/// Errors produced by the todo service (validation + storage outcomes).
#[derive(Debug, Error)]
pub enum ServiceError {
    // ------ Validation errors ------

    /// The create payload is not a JSON todo representation.
    #[error("invalid todo representation: {0}")]
    InvalidFormat(String),

    /// Body is empty once surrounding whitespace is removed.
    #[error("todo body is required")]
    EmptyBody,

    /// Body exceeds the character limit after trimming.
    #[error("todo body too long ({len} > {max} characters)", max = MAX_BODY_CHARS)]
    BodyTooLong { len: usize },

    /// Path identifier is not a positive integer.
    #[error("invalid todo id: '{0}'")]
    InvalidId(String),

    // ------ Storage outcomes ------

    /// No row matched the id at execution time.
    #[error("todo {0} not found")]
    NotFound(i32),

    /// Persistence error from the db crate.
    #[error("database error: {0}")]
    Storage(#[from] db::DbError),
}

/// Coarse classification used by transports to pick a response class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Storage,
}

impl ServiceError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidFormat(_) | Self::EmptyBody | Self::BodyTooLong { .. } | Self::InvalidId(_) => {
                ErrorKind::Validation
            }
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::Storage(_) => ErrorKind::Storage,
        }
    }
}
