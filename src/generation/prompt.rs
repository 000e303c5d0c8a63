//! Prompt construction for routine generation.
//!
//! The exchange is always two messages: a fixed system instruction pinning
//! the output to the Routine JSON shape, and a user message embedding the
//! caller's request. Both templates are part of the external contract and
//! tests match on them verbatim.

use crate::ai::ChatMessage;

/// System instruction mandating a JSON object in the exact Routine shape.
pub const SYSTEM_INSTRUCTION: &str = "\
You are a routine-building assistant. Given a user's request, respond with \
a single JSON object describing a routine, in exactly this shape:

{
  \"title\": \"Morning Energizer\",
  \"description\": \"A quick routine to start the day with energy\",
  \"steps\": [
    { \"step\": 1, \"action\": \"Drink a glass of water\", \"duration\": \"2 min\", \"notes\": \"Room temperature is best\" }
  ]
}

Keep the title and description short. Number steps starting from 1. \
Return only the JSON object, with no other text before or after it.";

/// Note appended to the user message when a reference image was supplied.
///
/// The image itself is never forwarded to the provider; only this textual
/// hint is. This is a known gap, kept deliberately so the provider
/// contract stays text-only.
pub const IMAGE_CONTEXT_NOTE: &str = "\n\nThe user attached a reference image \
to guide this routine. Take into account that they provided visual context \
for their environment or preferences.";

/// Build the user message: the prompt embedded in the fixed template, with
/// the image-context note appended verbatim when an image is present.
pub fn build_user_message(prompt: &str, has_image: bool) -> String {
    let mut message = format!("Create a routine for the following request: {prompt}");
    if has_image {
        message.push_str(IMAGE_CONTEXT_NOTE);
    }
    message
}

/// Build the full two-message exchange sent to the provider.
pub fn build_messages(prompt: &str, has_image: bool) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(SYSTEM_INSTRUCTION),
        ChatMessage::user(build_user_message(prompt, has_image)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_message_without_image() {
        let message = build_user_message("30-minute morning energizer", false);
        assert_eq!(
            message,
            "Create a routine for the following request: 30-minute morning energizer"
        );
        assert!(!message.contains(IMAGE_CONTEXT_NOTE));
    }

    #[test]
    fn test_user_message_with_image_appends_note_verbatim() {
        let message = build_user_message("evening wind-down", true);
        assert!(message.starts_with("Create a routine for the following request: evening wind-down"));
        assert!(message.ends_with(IMAGE_CONTEXT_NOTE));
    }

    #[test]
    fn test_exchange_is_two_messages() {
        let messages = build_messages("stretch plan", false);
        assert_eq!(messages.len(), 2);
        assert_eq!(messages[0].role, "system");
        assert_eq!(messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(messages[1].role, "user");
    }
}
