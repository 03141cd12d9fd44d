//! Defines the endpoint for updating a user.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    extract::{JsonBody, PathParam},
    user::{UpdateUserRequest, UserId, UserStoreState},
};

/// A route handler for updating a user, responds with the updated user.
///
/// Responds with 404 if there is no such user and 400 if the new email
/// belongs to another user.
pub async fn edit_user_endpoint(
    State(state): State<UserStoreState>,
    PathParam(user_id): PathParam<UserId>,
    JsonBody(request): JsonBody<UpdateUserRequest>,
) -> Response {
    let user = state
        .lock()
        .and_then(|mut store| store.update(user_id, request));

    match user {
        Ok(user) => Json(user).into_response(),
        Err(error) => {
            tracing::warn!("Could not update user {user_id}: {error}");
            error.into_response()
        }
    }
}
