//! HTTP client for the generation service.

use async_trait::async_trait;
use thiserror::Error;

use crate::rest::dto::{GenerateRequest, GenerateResponse};
use crate::rest::error::ErrorResponse;
use crate::routine::Routine;

/// Errors surfaced to the editor when a generation request fails.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("could not reach the generation service: {0}")]
    Network(String),

    #[error("generation service returned HTTP {status}: {message}")]
    Api { status: u16, message: String },

    #[error("could not decode the generation response: {0}")]
    Decode(String),
}

/// The editor's seam to the generation service.
#[async_trait]
pub trait GenerateClient {
    async fn generate(&self, prompt: &str, image: Option<String>) -> Result<Routine, ClientError>;
}

/// reqwest-backed client against the REST API.
///
/// Built without a request timeout: a hung service leaves the caller in
/// its generating state indefinitely, matching the service contract.
pub struct HttpGenerateClient {
    base_url: String,
    client: reqwest::Client,
}

impl HttpGenerateClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("routinist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }
}

#[async_trait]
impl GenerateClient for HttpGenerateClient {
    async fn generate(&self, prompt: &str, image: Option<String>) -> Result<Routine, ClientError> {
        let url = format!(
            "{}/api/v1/generate",
            self.base_url.trim_end_matches('/')
        );

        let request = GenerateRequest {
            prompt: prompt.to_string(),
            image,
        };

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| ClientError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.message)
                .unwrap_or(text);
            return Err(ClientError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: GenerateResponse = response
            .json()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))?;

        Ok(body.routine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let err = ClientError::Api {
            status: 500,
            message: "AI provider is not configured (no API key)".to_string(),
        };
        assert!(err.to_string().contains("HTTP 500"));
        assert!(err.to_string().contains("not configured"));
    }
}
