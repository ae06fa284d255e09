//! Request extractors that report malformed input as [`ApiError`].
//!
//! axum's stock extractors answer with 400, 415, or 422 depending on what
//! went wrong. Every shape mismatch here is a 422 with a JSON error body.

use super::ApiError;
use axum::extract::{FromRequest, FromRequestParts};

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Typed path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(ApiError))]
pub struct ApiPath<T>(pub T);
