//! Wire contract of the external AI augmentation service.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Request body: only title and description are sent to the model.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct AiRequest {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AiStatus {
    Pass,
    #[serde(alias = "warn")]
    Warning,
    Fail,
}

/// Response body returned by the model.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AiVerdict {
    pub status: AiStatus,
    #[serde(default)]
    pub flagged_terms: Vec<String>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default)]
    pub confidence: f64,
    #[serde(default)]
    pub reasoning: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
}
