//! Defines the endpoint for creating a user.

use axum::{
    Json,
    extract::State,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
};

use crate::{
    endpoints::{self, format_endpoint},
    extract::JsonBody,
    user::{CreateUserRequest, UserStoreState},
};

/// A route handler for creating a new user.
///
/// Responds with 201 Created, the new user and a `Location` header pointing
/// at the user. Responds with 400 Bad Request if the name or email is blank,
/// or if the email is already in use.
pub async fn create_user_endpoint(
    State(state): State<UserStoreState>,
    JsonBody(request): JsonBody<CreateUserRequest>,
) -> Response {
    let user = state
        .lock()
        .and_then(|mut store| store.create(request));

    match user {
        Ok(user) => {
            let location = format_endpoint(endpoints::USER, user.id().as_i64());
            tracing::info!("Created user {}", user.id());

            (StatusCode::CREATED, [(LOCATION, location)], Json(user)).into_response()
        }
        Err(error) => {
            tracing::warn!("Could not create user: {error}");
            error.into_response()
        }
    }
}
