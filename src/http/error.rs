//! HTTP error mapping.

use crate::todo::{domain::TodoId, ports::TodoRepositoryError, services::TodoServiceError};
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced to HTTP callers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The referenced todo does not exist.
    #[error("Todo not found")]
    NotFound(TodoId),

    /// The request path or body does not have the expected shape.
    #[error("{0}")]
    InvalidInput(String),

    /// The store failed while serving the request.
    #[error("Internal Server Error")]
    Internal(#[source] TodoRepositoryError),
}

impl ApiError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<TodoServiceError> for ApiError {
    fn from(err: TodoServiceError) -> Self {
        match err {
            TodoServiceError::NotFound(id) => Self::NotFound(id),
            TodoServiceError::Repository(source) => Self::Internal(source),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        Self::InvalidInput(rejection.body_text())
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Human-readable description of the failure.
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let Self::Internal(source) = &self {
            error!(error = %source, "request failed in the todo store");
        }
        let status = self.status_code();
        let body = Json(ErrorBody {
            detail: self.to_string(),
        });
        (status, body).into_response()
    }
}
