//! Stable identifiers and labels.
//!
//! Kind IDs match the serialized `type` tag of an issue. Tier labels match the
//! serialized `riskLevel`.

// Issue kinds
pub const KIND_RULE: &str = "rule";
pub const KIND_POLICY: &str = "policy";
pub const KIND_AI: &str = "ai";

// Tiers
pub const TIER_CRITICAL: &str = "critical";
pub const TIER_HIGH: &str = "high";
pub const TIER_MEDIUM: &str = "medium";
pub const TIER_LOW: &str = "low";
pub const TIER_WARNING: &str = "warning";

// Structured listing labels (as they appear in labeled input text)
pub const LABEL_TITLE: &str = "Title";
pub const LABEL_DESCRIPTION: &str = "Description";
pub const LABEL_TAGS: &str = "Tags";
pub const LABEL_CATEGORY: &str = "Category";
pub const LABEL_PRICE: &str = "Price";

// AI augmentation
pub const AI_GENERIC_TERM: &str = "AI Detected Violation";
pub const AI_CATEGORY: &str = "ai_analysis";

// Fallback category for records that omit one
pub const CATEGORY_GENERAL: &str = "general";

// Tool-level
pub const TOOL_NAME: &str = "listguard";
pub const REASON_AI_DISABLED: &str = "ai_disabled";
pub const REASON_AI_NOT_CONFIGURED: &str = "ai_not_configured";
