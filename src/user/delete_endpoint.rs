//! Defines the endpoint for deleting a user.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{
    extract::PathParam,
    user::{UserId, UserStoreState},
};

/// A route handler for deleting a user, responds with 204 No Content.
///
/// Responds with 404 if there is no such user.
pub async fn delete_user_endpoint(
    State(state): State<UserStoreState>,
    PathParam(user_id): PathParam<UserId>,
) -> Response {
    let result = state
        .lock()
        .and_then(|mut store| store.delete(user_id));

    match result {
        Ok(()) => {
            tracing::info!("Deleted user {user_id}");
            StatusCode::NO_CONTENT.into_response()
        }
        Err(error) => {
            tracing::warn!("Could not delete user {user_id}: {error}");
            error.into_response()
        }
    }
}
