//! Defines the endpoint for fetching a single user.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::{
    extract::PathParam,
    user::{UserId, UserStoreState},
};

/// A route handler for getting a user by their ID.
///
/// Responds with 404 and an error message if there is no such user.
pub async fn get_user_endpoint(
    State(state): State<UserStoreState>,
    PathParam(user_id): PathParam<UserId>,
) -> Response {
    let user = state.lock().and_then(|store| {
        let user = store.get(user_id)?.clone();
        Ok(user)
    });

    match user {
        Ok(user) => Json(user).into_response(),
        Err(error) => error.into_response(),
    }
}
