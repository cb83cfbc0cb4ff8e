//! Response types for the workforce API.
//!
//! This module defines the error response structure and the mapping
//! from [`CoreError`] to HTTP status codes. Error messages are surfaced
//! verbatim; the code field is for programmatic handling.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Forces the status to 401, used by the credential endpoints.
    pub fn unauthorized(self) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            ..self
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<CoreError> for ApiErrorResponse {
    fn from(error: CoreError) -> Self {
        let message = error.to_string();
        let (status, code) = match error {
            CoreError::Validation { .. } => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
            CoreError::Authorization { .. } => (StatusCode::FORBIDDEN, "AUTHORIZATION_ERROR"),
            CoreError::Precondition { .. } => {
                (StatusCode::PRECONDITION_FAILED, "PRECONDITION_FAILED")
            }
            CoreError::Conflict { .. } => (StatusCode::CONFLICT, "CONFLICT"),
            CoreError::InvalidState { .. } => (StatusCode::CONFLICT, "INVALID_STATE"),
            CoreError::NotFound { .. } => (StatusCode::NOT_FOUND, "NOT_FOUND"),
            CoreError::Transport { .. } => (StatusCode::BAD_GATEWAY, "TRANSPORT_ERROR"),
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, message),
        }
    }
}
