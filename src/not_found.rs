//! The response for requests that do not match any route.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::ErrorMessage;

/// A fallback route handler that responds with 404 Not Found.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Get the JSON response for an unknown route.
pub fn get_404_not_found_response() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorMessage {
            message: "The requested resource could not be found".to_owned(),
        }),
    )
        .into_response()
}
