//! Jarvis is a small REST API for managing users.
//!
//! Users are kept in memory for the lifetime of the process. The API
//! supports listing, fetching, creating, updating and deleting users, with
//! email addresses kept unique across all users.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use serde::{Deserialize, Serialize};
use tokio::signal;

mod app_state;
mod endpoints;
mod extract;
mod logging;
mod not_found;
mod routing;
mod user;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use user::{CreateUserRequest, UpdateUserRequest, User, UserId, UserStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            tracing::error!("could not listen for the ctrl+c signal: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(error) => {
                tracing::error!("could not install the terminate signal handler: {error}");
                std::future::pending::<()>().await;
            }
        }
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
    /// The name or email used to create a user was missing or blank.
    #[error("Name and Email are required")]
    MissingRequiredFields,

    /// The email used to create or update a user already belongs to another
    /// user.
    ///
    /// Emails are compared exactly, so addresses that only differ by case are
    /// considered different.
    #[error("Email already exists")]
    DuplicateEmail,

    /// There is no user with the given ID.
    ///
    /// The client should check that the ID is correct and that the user has
    /// not been deleted.
    #[error("User with ID {0} not found")]
    UserNotFound(UserId),

    /// The request body or path could not be parsed.
    ///
    /// The string describes what was wrong with the request.
    #[error("{0}")]
    InvalidRequest(String),

    /// Could not acquire the lock on the user store.
    #[error("could not acquire the user store lock")]
    StoreLockError,

    /// A response body failed while it was being read for logging.
    ///
    /// The string describes the failure and is only logged on the server.
    #[error("could not read the response body: {0}")]
    UnreadableResponseBody(String),
}

/// The JSON body sent to the client when a request fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorMessage {
    /// A description of what went wrong.
    pub message: String,
}

impl ErrorMessage {
    fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Error::MissingRequiredFields | Error::DuplicateEmail | Error::InvalidRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::UserNotFound(_) => StatusCode::NOT_FOUND,
            Error::StoreLockError | Error::UnreadableResponseBody(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            // Internal errors are not intended to be shown to the client.
            tracing::error!("An unexpected error occurred: {self}");
            ErrorMessage::new(
                "An unexpected error occurred, check the server logs for more details.",
            )
        } else {
            ErrorMessage::new(self.to_string())
        };

        (status, Json(message)).into_response()
    }
}

impl From<JsonRejection> for Error {
    fn from(rejection: JsonRejection) -> Self {
        tracing::debug!("rejected JSON body: {rejection}");
        Error::InvalidRequest(rejection.body_text())
    }
}

impl From<PathRejection> for Error {
    fn from(rejection: PathRejection) -> Self {
        tracing::debug!("rejected path parameters: {rejection}");
        Error::InvalidRequest(rejection.body_text())
    }
}
