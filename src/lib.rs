//! The todo app's backend web server.

pub mod api;
pub mod config;
pub mod id;
pub mod store;
pub mod todo;
pub(crate) mod website;

use axum::Router;
use mongodb::Collection;

use crate::config::Env;
use crate::todo::Todo;

/// State shared by all API request handlers.
#[derive(Clone)]
pub struct AppState {
    /// The handle to the store's todo collection, initialized once at startup. Cloning it is
    /// cheap and doesn't open new connections.
    pub todos: Collection<Todo>,
}

/// Builds the complete request-handling service: the API router, plus a fallback for anything
/// outside the API.
///
/// In production, the fallback serves the client's static asset bundle. In development, the
/// client is served by its own dev server, so the fallback is a JSON 404 instead.
pub fn app(state: AppState, env: Env) -> Router {
    let router = api::routes::router(state);

    match env {
        Env::Production => router.fallback_service(website::service()),
        Env::Development => router.fallback(|| async { api::Error::RouteNotFound }),
    }
}
