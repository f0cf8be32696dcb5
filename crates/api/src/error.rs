//! Mapping from service errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use service::{ErrorKind, ServiceError, MAX_BODY_CHARS};
use thiserror::Error;

/// A handler failure, rendered as `{"error": "<message>"}`.
#[derive(Debug, Error)]
#[error(transparent)]
pub struct ApiError(#[from] pub ServiceError);

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self.0.kind() {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Storage => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message. Storage details stay in the logs.
    pub fn message(&self) -> String {
        match &self.0 {
            ServiceError::InvalidFormat(_) => "Invalid JSON data".into(),
            ServiceError::EmptyBody => "Todo body is required".into(),
            ServiceError::BodyTooLong { .. } => {
                format!("Todo body too long (max {MAX_BODY_CHARS} characters)")
            }
            ServiceError::InvalidId(_) => "Invalid ID".into(),
            ServiceError::NotFound(_) => "Todo not found".into(),
            ServiceError::Storage(_) => "Database error".into(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), Json(json!({ "error": self.message() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use service::DbError;

    #[test]
    fn each_error_class_gets_its_own_status() {
        let cases = [
            (ServiceError::EmptyBody, StatusCode::BAD_REQUEST),
            (ServiceError::InvalidId("x".into()), StatusCode::BAD_REQUEST),
            (ServiceError::NotFound(3), StatusCode::NOT_FOUND),
            (
                ServiceError::Storage(DbError::NotFound),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status(), status);
        }
    }

    #[test]
    fn too_long_message_names_the_limit() {
        let err = ApiError(ServiceError::BodyTooLong { len: 1001 });
        assert_eq!(err.message(), "Todo body too long (max 1000 characters)");
    }

    #[test]
    fn storage_details_are_not_exposed() {
        let err = ApiError(ServiceError::Storage(DbError::NotFound));
        assert_eq!(err.message(), "Database error");
    }
}
