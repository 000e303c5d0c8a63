//! Error taxonomy for the outbound provider call.

use thiserror::Error;

/// Errors that can occur when calling the chat-completion provider.
///
/// Every variant is fatal for the request it occurred in; there are no
/// retries anywhere in the system.
#[derive(Error, Debug)]
pub enum AiError {
    /// No API credential available in configuration or environment.
    #[error("AI provider is not configured (no API key)")]
    NotConfigured,

    /// Transport-level failure before an HTTP status was received.
    #[error("AI provider network error: {0}")]
    Network(String),

    /// Provider answered with a non-success status.
    #[error("AI provider returned HTTP {status}: {body}")]
    Http { status: u16, body: String },

    /// Provider answered 2xx but the response carried no usable text.
    #[error("AI provider returned no content")]
    EmptyContent,
}
