//! The server binary: loads configuration, connects to the store, and serves the app.

use tokio::net::TcpListener;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use todo_backend::config::Config;
use todo_backend::{app, store, AppState};

/// The address the server should listen on.
const LISTENER_ADDR: &str = "127.0.0.1:4000";

/// # Errors
///
/// Fails if configuration is incomplete, the store can't be reached, or the listener address
/// can't be bound.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let config = Config::load()?;

    tracing::info!("Connecting to store...");

    let todos = store::initialize(&config.store_uri).await?;

    tracing::info!("Connected to store");

    let listener = TcpListener::bind(LISTENER_ADDR).await?;

    tracing::info!("Listening on http://{LISTENER_ADDR}");

    axum::serve(listener, app(AppState { todos }, config.env)).await?;

    Ok(())
}
