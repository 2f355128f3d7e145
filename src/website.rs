//! Serving the client's prebuilt static asset bundle in production.

use tower_http::services::ServeDir;

/// The directory containing the client's production build output.
const CLIENT_DIST: &str = "client/dist";

/// The service for static client files, used as the router's fallback in production.
pub(crate) fn service() -> ServeDir {
    ServeDir::new(CLIENT_DIST)
}
