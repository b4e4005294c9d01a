use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// `listguard.toml` schema v1.
///
/// Every field is optional; anything left out comes from the selected profile.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ListguardConfigV1 {
    /// Optional schema string for tooling (`listguard.config.v1`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<String>,

    /// `standard` (default) or `bare`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,

    /// Lowest overall tier that fails the run: `critical`, `high`, `medium`, `low`, `warning`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fail_on: Option<String>,

    #[serde(default)]
    pub matcher: MatcherSection,

    #[serde(default)]
    pub policy: PolicyConfig,

    #[serde(default)]
    pub scoring: ScoringConfig,

    #[serde(default)]
    pub ai: AiConfig,

    /// Rules merged after store rules. Added to the profile's baseline set.
    #[serde(default)]
    pub fallback_rules: Vec<FallbackRuleConfig>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct MatcherSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_tokens: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub char_window: Option<usize>,

    /// Glob patterns over lower-cased terms that are never reported.
    #[serde(default)]
    pub allow: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct PolicyConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flag_threshold: Option<f64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_keywords: Option<usize>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_keyword_len: Option<usize>,

    #[serde(default)]
    pub extra_stop_words: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct ScoringConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub high: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub medium: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub low: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub severe_penalty: Option<u32>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct AiConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// URL of the augmentation service (`POST {title, description}`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_ms: Option<u64>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct FallbackRuleConfig {
    pub term: String,

    /// Tier label; required to be a known tier.
    pub risk_level: String,

    #[serde(default)]
    pub reason: String,

    #[serde(default)]
    pub category: String,
}
