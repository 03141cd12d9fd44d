//! Defines the endpoint for listing every user.

use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};

use crate::user::UserStoreState;

/// A route handler that responds with every user in the order they were
/// created.
pub async fn list_users_endpoint(State(state): State<UserStoreState>) -> Response {
    match state.lock() {
        Ok(store) => Json(store.list().to_vec()).into_response(),
        Err(error) => error.into_response(),
    }
}
