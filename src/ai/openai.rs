//! OpenAI-compatible chat-completion client.

use serde::{Deserialize, Serialize};
use std::env;

use super::{AiError, ChatMessage};
use crate::config::AiConfig;

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "ROUTINIST_OPENAI_API_KEY";

/// Client for an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Deliberately built without a request timeout: a hung upstream call is
/// left hanging rather than cancelled, matching the service contract.
pub struct OpenAiClient {
    api_key: String,
    model: String,
    max_tokens: u32,
    temperature: f32,
    client: reqwest::Client,
    base_url: String,
}

#[derive(Serialize)]
struct ChatCompletionRequest {
    model: String,
    messages: Vec<ChatMessage>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    #[serde(default)]
    content: Option<String>,
}

impl OpenAiClient {
    /// Create a client with an explicit API key.
    pub fn new(api_key: impl Into<String>, config: &AiConfig) -> Result<Self, AiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("routinist/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| AiError::Network(e.to_string()))?;

        Ok(Self {
            api_key: api_key.into(),
            model: config.model.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// Create a client from configuration, resolving the credential from
    /// the `ai.api_key` setting or the `ROUTINIST_OPENAI_API_KEY`
    /// environment variable. Absence of both is a hard failure.
    pub fn from_config(config: &AiConfig) -> Result<Self, AiError> {
        let key = match &config.api_key {
            Some(key) if !key.is_empty() => key.clone(),
            _ => match env::var(API_KEY_ENV) {
                Ok(key) if !key.is_empty() => key,
                _ => return Err(AiError::NotConfigured),
            },
        };

        Self::new(key, config)
    }

    /// Check whether a credential is available without building a client.
    pub fn is_configured(config: &AiConfig) -> bool {
        config
            .api_key
            .as_ref()
            .map(|k| !k.is_empty())
            .unwrap_or(false)
            || env::var(API_KEY_ENV).map(|k| !k.is_empty()).unwrap_or(false)
    }

    /// Create a client pointed at a custom base URL (for testing).
    #[cfg(test)]
    pub fn new_with_base_url(
        api_key: impl Into<String>,
        config: &AiConfig,
        base_url: impl Into<String>,
    ) -> Result<Self, AiError> {
        let mut client = Self::new(api_key, config)?;
        client.base_url = base_url.into();
        Ok(client)
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Send one chat-completion exchange and return the assistant's text.
    pub async fn chat(&self, messages: Vec<ChatMessage>) -> Result<String, AiError> {
        let url = format!("{}/v1/chat/completions", self.base_url);

        let request_body = ChatCompletionRequest {
            model: self.model.clone(),
            messages,
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&url)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AiError::Http {
                status: status.as_u16(),
                body,
            });
        }

        let body: ChatCompletionResponse = response
            .json()
            .await
            .map_err(|e| AiError::Network(e.to_string()))?;

        match body.choices.into_iter().next().and_then(|c| c.message.content) {
            Some(content) if !content.is_empty() => Ok(content),
            _ => Err(AiError::EmptyContent),
        }
    }
}
