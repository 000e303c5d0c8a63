//! The routine generation endpoint.

use axum::{extract::State, Json};

use crate::ai::OpenAiClient;
use crate::generation;
use crate::rest::dto::{GenerateRequest, GenerateResponse};
use crate::rest::error::{ApiError, ErrorResponse};
use crate::rest::state::ApiState;

/// Generate a routine from a free-text prompt
///
/// Unparseable model output is recovered with a fixed fallback routine and
/// still answers 200; only configuration, transport, upstream-status, and
/// empty-content failures produce an error response.
#[utoipa::path(
    post,
    path = "/api/v1/generate",
    tag = "Generation",
    request_body = GenerateRequest,
    responses(
        (status = 200, description = "Generated routine (or fallback)", body = GenerateResponse),
        (status = 500, description = "Generation pipeline failure", body = ErrorResponse)
    )
)]
pub async fn generate(
    State(state): State<ApiState>,
    Json(request): Json<GenerateRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    // Credential resolution happens per request; a missing key fails here
    // before any outbound call.
    let client = OpenAiClient::from_config(&state.config.ai)?;

    let routine =
        generation::generate_routine(&client, &request.prompt, request.image.is_some()).await?;

    Ok(Json(GenerateResponse { routine }))
}
