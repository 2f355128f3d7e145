//! The HTTP API, exposed under `/api/`.

pub mod routes;
pub mod validate;

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum_macros::{FromRequest, FromRequestParts};
use serde::Serialize;
use thiserror::Error;

/// The result type returned by every API request handler: a status code and JSON body on
/// success, an [`Error`] otherwise.
pub type Response<T> = Result<(StatusCode, Json<T>), Error>;

/// An error from an API request handler, sent to the client as a JSON error payload.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request body was missing, malformed, or failed validation.
    #[error("{0}")]
    RequestMalformed(#[from] JsonRejection),

    /// The ID in the request path isn't in the store's ID format.
    #[error("{0}")]
    IdInvalid(#[from] PathRejection),

    /// No API route matches the request path.
    #[error("the requested API route doesn't exist")]
    RouteNotFound,

    /// A query against the store couldn't be issued at all.
    #[error(transparent)]
    StoreUnavailable(mongodb::error::Error),

    /// Any other store operation failure, including failing to decode a stored document.
    #[error(transparent)]
    Store(#[from] mongodb::error::Error),
}

impl Error {
    /// The HTTP status code the error responds with.
    fn status(&self) -> StatusCode {
        match self {
            Self::RequestMalformed(_) | Self::IdInvalid(_) | Self::Store(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::RouteNotFound | Self::StoreUnavailable(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        if let Self::Store(error) | Self::StoreUnavailable(error) = &self {
            tracing::error!(%error, "store operation failed");
        }

        let body = ErrorResponse {
            error: self.to_string(),
        };

        (self.status(), axum::Json(body)).into_response()
    }
}

/// The JSON payload sent for an [`Error`] response.
#[derive(Serialize, Debug)]
struct ErrorResponse {
    /// A message describing the error.
    error: String,
}

/// [`axum::Json`] with its rejection mapped to [`Error`], so a malformed request body produces
/// the API's JSON error payload instead of axum's plain-text one.
#[derive(FromRequest, Debug)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> axum::response::Response {
        axum::Json(self.0).into_response()
    }
}

/// [`axum::extract::Path`] with its rejection mapped to [`Error`], so a malformed ID in the
/// path produces the API's JSON error payload.
#[derive(FromRequestParts, Debug)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct Path<T>(pub T);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_routes_respond_with_not_found() {
        let response = Error::RouteNotFound.into_response();

        assert_eq!(
            response.status(),
            StatusCode::NOT_FOUND,
            "unknown API routes should respond with 404"
        );
    }
}
