//! `api` crate — HTTP REST API layer.
//!
//! Exposes:
//!   GET    /api/todos
//!   POST   /api/todos
//!   PATCH  /api/todos/:id
//!   DELETE /api/todos/:id

pub mod error;
pub mod handlers;

use axum::{
    routing::{get, patch},
    Router,
};
use service::TodoService;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use error::ApiError;

/// State shared by every handler.
#[derive(Clone)]
pub struct AppState {
    pub service: TodoService,
}

/// Build the router over an already-initialized service.
pub fn app(service: TodoService) -> Router {
    Router::new()
        .route(
            "/api/todos",
            get(handlers::todos::list).post(handlers::todos::create),
        )
        .route(
            "/api/todos/:id",
            patch(handlers::todos::toggle).delete(handlers::todos::delete),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { service })
}

/// Bind `addr` and serve until Ctrl-C.
pub async fn serve(addr: &str, service: TodoService) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    info!("Server listening on {}", listener.local_addr()?);
    axum::serve(listener, app(service))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("cannot listen for Ctrl-C: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
