//! Extractors that report rejections as [Error] so clients always get a JSON
//! `{message}` body.

use axum::extract::{FromRequest, FromRequestParts};

use crate::Error;

/// Parses the request body as JSON, like [axum::Json].
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(Error))]
pub struct JsonBody<T>(pub T);

/// Parses path parameters, like [axum::extract::Path].
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(Error))]
pub struct PathParam<T>(pub T);
