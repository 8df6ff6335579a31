//! Bizboard is the backend for a small-business metrics dashboard.
//!
//! This library provides a session-authenticated JSON REST API over users,
//! financial transactions, monthly sales figures, and periodic metrics
//! snapshots, plus static file serving with a single-page-app fallback for the
//! dashboard client.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde_json::json;
use tokio::signal;

mod app_state;
mod auth_cookie;
mod auth_middleware;
mod db;
mod endpoints;
mod log_in;
mod log_out;
mod logging;
mod metrics;
mod password;
mod register;
mod routing;
mod sales;
mod session_token;
#[cfg(test)]
mod test_utils;
mod transaction;
mod user;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use password::PasswordHash;
pub use routing::build_router;
pub use user::{User, UserID};

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
    /// The request was missing a required field or contained a malformed one.
    ///
    /// The message should tell the client which field to fix.
    #[error("{0}")]
    InvalidInput(String),

    /// The user provided an invalid combination of email and password.
    ///
    /// The same error is used for an unknown email and a wrong password so
    /// that the response does not reveal whether an account exists.
    #[error("incorrect email or password")]
    InvalidCredentials,

    /// The request did not carry a valid, unexpired session.
    #[error("authentication required")]
    Unauthenticated,

    /// The email used to register is already taken by another user.
    #[error("the email address is already registered")]
    EmailTaken,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// When communicating with the application client this error should be
    /// replaced with a general error type indicating an internal server error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// The session token could not be encoded into or decoded from its cookie.
    #[error("could not encode or decode the session token: {0}")]
    TokenFormat(String),

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JsonError(String),

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("email") =>
            {
                Error::EmailTaken
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let (status_code, message) = match &self {
            Error::InvalidInput(_) => (StatusCode::BAD_REQUEST, self.to_string()),
            Error::InvalidCredentials | Error::Unauthenticated => {
                (StatusCode::UNAUTHORIZED, self.to_string())
            }
            Error::EmailTaken => (StatusCode::CONFLICT, self.to_string()),
            Error::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "an internal error occurred, try again later".to_owned(),
                )
            }
        };

        (status_code, Json(json!({ "error": message }))).into_response()
    }
}
