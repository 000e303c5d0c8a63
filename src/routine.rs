//! The Routine data model shared by the generation service and the editor.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A generated routine: a titled, ordered plan of steps.
///
/// Step order is semantically meaningful (step 1 precedes step 2). The
/// `steps` list may be empty; nothing enforces uniqueness of step numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Routine {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub steps: Vec<Step>,
}

/// One action entry within a routine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Step {
    /// 1-based position indicator. Expected to match index+1 but not
    /// enforced anywhere; it is an authoring artifact.
    pub step: u32,
    pub action: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl Routine {
    /// The fixed routine substituted when model output cannot be parsed.
    ///
    /// The exact field values are part of the external contract; callers
    /// and tests match on them verbatim.
    pub fn fallback() -> Self {
        Self {
            title: "Custom Routine".to_string(),
            description: "A personalized routine based on your request".to_string(),
            steps: vec![Step {
                step: 1,
                action: "Start with the basics outlined in your request".to_string(),
                duration: Some("Variable".to_string()),
                notes: Some("Generated content could not be parsed properly".to_string()),
            }],
        }
    }
}
