//! API error types and responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::ai::AiError;

/// API error types
///
/// Every variant maps to HTTP 500: each one is a hard per-request failure
/// of the generation pipeline. Parse failures never reach this type; they
/// are recovered with the fallback routine before the response is built.
#[derive(Debug)]
pub enum ApiError {
    /// Missing provider credential
    Configuration(String),
    /// Provider transport failure or non-success status
    Upstream(String),
    /// Provider returned no usable text
    EmptyContent(String),
}

/// Error response body
#[derive(Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::Configuration(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error", msg)
            }
            ApiError::Upstream(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error", msg),
            ApiError::EmptyContent(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "empty_content", msg)
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<AiError> for ApiError {
    fn from(err: AiError) -> Self {
        let message = err.to_string();
        match err {
            AiError::NotConfigured => ApiError::Configuration(message),
            AiError::Network(_) | AiError::Http { .. } => ApiError::Upstream(message),
            AiError::EmptyContent => ApiError::EmptyContent(message),
        }
    }
}
