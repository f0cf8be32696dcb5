use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use service::Todo;

use crate::{ApiError, AppState};

pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Todo>>, ApiError> {
    let todos = state.service.list().await?;
    Ok(Json(todos))
}

/// The body is taken raw so malformed JSON gets the service's 400 rather than
/// the extractor's rejection.
pub async fn create(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<Todo>), ApiError> {
    let todo = state.service.create(&body).await?;
    Ok((StatusCode::CREATED, Json(todo)))
}

pub async fn toggle(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Todo>, ApiError> {
    let todo = state.service.toggle(&id).await?;
    Ok(Json(todo))
}

pub async fn delete(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    state.service.delete(&id).await?;
    Ok(Json(json!({ "success": true })))
}
