//! Routine generation pipeline: prompt → provider → extraction → fallback.

pub mod extract;
pub mod prompt;

use crate::ai::{AiError, OpenAiClient};
use crate::routine::Routine;

/// Generate a routine for the given prompt.
///
/// Hard failures (missing credential, transport, upstream status, empty
/// content) propagate as [`AiError`]. Extraction and parse failures never
/// propagate: the raw content is logged and the fixed fallback routine is
/// returned instead.
pub async fn generate_routine(
    client: &OpenAiClient,
    prompt_text: &str,
    has_image: bool,
) -> Result<Routine, AiError> {
    let messages = prompt::build_messages(prompt_text, has_image);
    let content = client.chat(messages).await?;

    match extract::parse_routine(&content) {
        Ok(routine) => Ok(routine),
        Err(err) => {
            tracing::warn!(
                error = %err,
                raw_content = %content,
                "could not parse model output, substituting fallback routine"
            );
            Ok(Routine::fallback())
        }
    }
}
