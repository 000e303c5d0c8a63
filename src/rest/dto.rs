//! Data Transfer Objects for the REST API.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::routine::Routine;

/// Request body for routine generation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateRequest {
    /// Free-text description of the desired routine
    pub prompt: String,
    /// Optional base64 data URI of a reference image. Only its presence
    /// influences the prompt; no image bytes reach the provider.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Response body for routine generation
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct GenerateResponse {
    pub routine: Routine,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Service status response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub status: String,
    pub version: String,
    /// Model identifier requests are sent with
    pub model: String,
    /// Whether a provider API key is available
    pub provider_configured: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_request_image_optional() {
        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt":"morning stretch"}"#).unwrap();
        assert_eq!(request.prompt, "morning stretch");
        assert!(request.image.is_none());

        let request: GenerateRequest =
            serde_json::from_str(r#"{"prompt":"p","image":"data:image/png;base64,AAAA"}"#).unwrap();
        assert!(request.image.is_some());
    }

    #[test]
    fn test_generate_response_wraps_routine() {
        let response = GenerateResponse {
            routine: Routine::fallback(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["routine"]["title"], "Custom Routine");
    }
}
