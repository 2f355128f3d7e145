//! All routes for the HTTP API.

pub mod todos;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::AppState;

/// Builds the API router. Each route performs exactly one store operation.
pub(crate) fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/addTodos", post(todos::post))
        .route("/api/getTodos", get(todos::get))
        .route("/api/completeTodos/:id", put(todos::put))
        .route("/api/deleteTodos/:id", delete(todos::delete))
        .with_state(state)
}
