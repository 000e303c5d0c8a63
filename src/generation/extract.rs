//! Two-stage JSON extraction from free-text model output.
//!
//! Stage one takes the contents of a fenced code block labeled `json`;
//! stage two falls back to the span from the first `{` to the last `}` in
//! the raw text. The precedence is load-bearing for compatibility with
//! existing model prompts and must not be reordered.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::routine::Routine;

static FENCED_JSON: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)```json\s*(.*?)\s*```").expect("valid fenced-json regex"));

/// Locate the JSON candidate in raw model output.
///
/// Returns `None` only when neither a fenced `json` block nor a
/// `{...}`-delimited span exists.
pub fn find_candidate(content: &str) -> Option<&str> {
    if let Some(caps) = FENCED_JSON.captures(content) {
        return caps.get(1).map(|m| m.as_str());
    }

    let start = content.find('{')?;
    let end = content.rfind('}')?;
    if end > start {
        Some(&content[start..=end])
    } else {
        None
    }
}

/// Extract and parse a [`Routine`] from raw model output.
pub fn parse_routine(content: &str) -> Result<Routine, serde_json::Error> {
    let candidate = find_candidate(content).unwrap_or(content);
    serde_json::from_str(candidate)
}
