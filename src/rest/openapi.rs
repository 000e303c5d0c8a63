//! OpenAPI specification builder using utoipa.

use utoipa::OpenApi;

use crate::rest::dto::{GenerateRequest, GenerateResponse, HealthResponse, StatusResponse};
use crate::rest::error::ErrorResponse;
use crate::routine::{Routine, Step};

/// OpenAPI documentation for the Routinist REST API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Routinist API",
        description = "REST API for generating structured routines from free-text prompts.",
        license(name = "MIT")
    ),
    paths(
        // Health endpoints
        crate::rest::routes::health::health,
        crate::rest::routes::health::status,
        // Generation endpoint
        crate::rest::routes::generate::generate,
    ),
    components(
        schemas(
            HealthResponse,
            StatusResponse,
            GenerateRequest,
            GenerateResponse,
            Routine,
            Step,
            ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Health check and status endpoints"),
        (name = "Generation", description = "Routine generation"),
    )
)]
pub struct ApiDoc;

impl ApiDoc {
    /// Generate the OpenAPI specification as a JSON string
    pub fn json() -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&Self::openapi())
    }
}
