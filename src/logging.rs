//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// Bodies longer than this many bytes are truncated in the `info` level logs.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// The largest request body, in bytes, that is buffered for logging.
///
/// Matches the default body limit of axum's extractors.
pub const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is
/// truncated and the full body is logged at the `debug` level.
///
/// Requests with bodies larger than [REQUEST_BODY_LIMIT] are rejected with
/// 400 Bad Request before they reach the router. If the response body cannot
/// be read, the client gets 500 Internal Server Error instead.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body) = request.into_parts();
    let body_text = match read_body_text(body, REQUEST_BODY_LIMIT).await {
        Ok(body_text) => body_text,
        Err(error) => {
            tracing::warn!("Could not read request body: {error}");
            return Error::InvalidRequest(format!("Could not read request body: {error}"))
                .into_response();
        }
    };
    log_request(&parts, &body_text);

    let response = next.run(Request::from_parts(parts, body_text.into())).await;

    let (parts, body) = response.into_parts();
    // Responses are produced by this server, so their size is not limited.
    let body_text = match read_body_text(body, usize::MAX).await {
        Ok(body_text) => body_text,
        Err(error) => {
            return Error::UnreadableResponseBody(format!(
                "{} response could not be read: {error}",
                parts.status
            ))
            .into_response();
        }
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, body_text.into())
}

async fn read_body_text(body: Body, limit: usize) -> Result<String, axum::Error> {
    let body_bytes = axum::body::to_bytes(body, limit).await?;

    Ok(String::from_utf8_lossy(&body_bytes).into_owned())
}

/// Cut `body` down to at most [LOG_BODY_LENGTH_LIMIT] bytes without
/// splitting a character.
fn truncate(body: &str) -> &str {
    if body.len() <= LOG_BODY_LENGTH_LIMIT {
        return body;
    }

    let mut end = LOG_BODY_LENGTH_LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }

    &body[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate(body)
        );
        tracing::debug!("Full request: {parts:#?}\nbody: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("Sending response: {}\nbody: {}...", parts.status, truncate(body));
        tracing::debug!("Full response: {parts:#?}\nbody: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}
