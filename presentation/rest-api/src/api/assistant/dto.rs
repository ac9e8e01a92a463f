use poem_openapi::Object;
use serde::{Deserialize, Serialize};

/// Request carrying a source-code selection to analyze.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct CodeSelectionRequest {
    /// The selected source code (must be non-empty)
    pub code: String,
}

/// Request carrying a free-text description of code to generate.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct GenerateCodeRequest {
    /// What the generated code should do (at least 10 characters)
    pub description: String,
}

/// Model reply for any assistant operation.
#[derive(Debug, Clone, Serialize, Deserialize, Object)]
pub struct AssistantReply {
    /// The completion text, ready for display or insertion into an editor
    pub content: String,
}
