//! Expense Tracker is a small JSON API for recording personal income and
//! expenses.
//!
//! This library provides the SQLite backed transaction store and the axum
//! router that exposes it over HTTP.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod database_id;
mod db;
mod endpoints;
mod logging;
mod routing;
mod summary;
#[cfg(test)]
mod test_utils;
mod transaction;

pub use app_state::AppState;
pub use database_id::TransactionId;
pub use db::initialize as initialize_db;
pub use endpoints::find_shadowed_route;
pub use logging::{LOG_BODY_LENGTH_LIMIT, REQUEST_BODY_LIMIT, logging_middleware};
pub use routing::build_router;
pub use summary::Summary;
pub use transaction::{NewTransaction, Transaction, TransactionRepository};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// A required field was missing from the request body, or was an empty
    /// string.
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),

    /// The request body could not be parsed as the expected JSON object.
    ///
    /// The string holds the reason given by the JSON extractor.
    #[error("invalid JSON body: {0}")]
    InvalidJson(String),

    /// The request body could not be read.
    #[error("could not read request body: {0}")]
    UnreadableBody(String),

    /// The request body is larger than the server accepts.
    #[error("request body is too large: {0}")]
    PayloadTooLarge(String),

    /// The request body was not sent as JSON.
    #[error("unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// The path parameter could not be parsed, e.g. a non-integer ID.
    #[error("invalid path parameter: {0}")]
    InvalidPath(String),

    /// A handler asked for path parameters on a route that has none.
    #[error("could not extract path parameters: {0}")]
    MissingPathParameters(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// Tried to delete a transaction that does not exist
    #[error("tried to delete a transaction that is not in the database")]
    DeleteMissingTransaction,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// The blocking task running a database query panicked or was cancelled.
    #[error("the database task failed: {0}")]
    DatabaseTaskError(String),

    /// A handler produced a response body that could not be buffered for
    /// logging.
    #[error("could not read response body: {0}")]
    ResponseBodyError(String),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        let message = rejection.body_text();

        match rejection.status() {
            StatusCode::PAYLOAD_TOO_LARGE => Error::PayloadTooLarge(message),
            StatusCode::UNSUPPORTED_MEDIA_TYPE => Error::UnsupportedMediaType(message),
            _ => Error::InvalidJson(message),
        }
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        match rejection {
            PathRejection::FailedToDeserializePathParams(error) => {
                Error::InvalidPath(error.body_text())
            }
            rejection => Error::MissingPathParameters(rejection.body_text()),
        }
    }
}

impl Error {
    /// The HTTP status code the error is reported with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingField(_)
            | Error::InvalidJson(_)
            | Error::UnreadableBody(_)
            | Error::InvalidPath(_) => StatusCode::BAD_REQUEST,
            Error::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Error::UnsupportedMediaType(_) => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            Error::NotFound | Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                StatusCode::NOT_FOUND
            }
            Error::MissingPathParameters(_)
            | Error::SqlError(_)
            | Error::DatabaseLockError
            | Error::DatabaseTaskError(_)
            | Error::ResponseBodyError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = match self {
            Error::NotFound | Error::UpdateMissingTransaction | Error::DeleteMissingTransaction => {
                "Transaction not found".to_owned()
            }
            // Storage errors are not intended to be shown to the client.
            error if status.is_server_error() => {
                tracing::error!("An unexpected error occurred: {}", error);
                "Internal server error".to_owned()
            }
            error => error.to_string(),
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}
