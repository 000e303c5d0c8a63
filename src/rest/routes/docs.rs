//! OpenAPI document endpoint.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::rest::openapi::ApiDoc;

/// Serve the generated OpenAPI specification as JSON.
pub async fn openapi_json() -> Response {
    match ApiDoc::json() {
        Ok(spec) => (
            StatusCode::OK,
            [("content-type", "application/json")],
            spec,
        )
            .into_response(),
        Err(e) => {
            tracing::error!("Failed to generate OpenAPI spec: {}", e);
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_openapi_json_ok() {
        let response = openapi_json().await;
        assert_eq!(response.status(), StatusCode::OK);
    }
}
