use crate::ids;
use crate::listing::FieldName;
use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use time::OffsetDateTime;

/// Stable schema identifier for listguard reports.
pub const SCHEMA_REPORT_V1: &str = "listguard.report.v1";

/// Engine severity tier.
///
/// Variants are declared lowest first so the derived `Ord` gives
/// critical > high > medium > low > warning.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    #[default]
    Warning,
    Low,
    Medium,
    High,
    Critical,
}

impl Tier {
    /// Highest first; the order used for counting, recommendations and rendering.
    pub const DESCENDING: [Tier; 5] = [
        Tier::Critical,
        Tier::High,
        Tier::Medium,
        Tier::Low,
        Tier::Warning,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Critical => ids::TIER_CRITICAL,
            Tier::High => ids::TIER_HIGH,
            Tier::Medium => ids::TIER_MEDIUM,
            Tier::Low => ids::TIER_LOW,
            Tier::Warning => ids::TIER_WARNING,
        }
    }

    /// Strict parse. Used where an unknown label is a user error (config, CLI flags).
    pub fn parse(label: &str) -> Option<Tier> {
        match label.trim().to_ascii_lowercase().as_str() {
            ids::TIER_CRITICAL => Some(Tier::Critical),
            ids::TIER_HIGH => Some(Tier::High),
            ids::TIER_MEDIUM => Some(Tier::Medium),
            ids::TIER_LOW => Some(Tier::Low),
            ids::TIER_WARNING | "warn" => Some(Tier::Warning),
            _ => None,
        }
    }

    /// Lenient parse for data records: unknown labels become the lowest tier.
    pub fn from_label(label: &str) -> Tier {
        Tier::parse(label).unwrap_or(Tier::Warning)
    }

    /// Critical and high tiers drive `fail` statuses and the severe-score penalty.
    pub fn is_severe(self) -> bool {
        self >= Tier::High
    }

    /// Explicit engine-tier to UI-status mapping.
    pub fn status(self) -> Status {
        if self.is_severe() {
            Status::Fail
        } else {
            Status::Warning
        }
    }
}

/// Any value that is not a known label (null, numbers, unknown strings) is `warning`.
impl<'de> Deserialize<'de> for Tier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(value.as_str().map_or(Tier::Warning, Tier::from_label))
    }
}

/// UI-facing status. Kept separate from [`Tier`]; `warning` here is a status, not a tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Warning,
    Fail,
}

impl Status {
    /// Status for an overall tier; no issues at all is a pass.
    pub fn from_overall(overall: Option<Tier>) -> Status {
        overall.map(Tier::status).unwrap_or(Status::Pass)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Status::Pass => "pass",
            Status::Warning => "warning",
            Status::Fail => "fail",
        }
    }
}

/// Where a term was found in the original listing text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    pub snippet_before: String,
    /// Matched text as written in the listing (original casing).
    pub term: String,
    pub snippet_after: String,
    /// Character offset of the match in the listing text.
    pub position: usize,
    pub sentence_or_paragraph: String,
}

/// Producer-specific part of an issue. Serialized inline with a `type` tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum IssueSource {
    Rule {
        #[serde(default)]
        reason: String,
    },
    Policy {
        #[serde(rename = "matchRatio")]
        match_ratio: f64,
        #[serde(rename = "matchedKeywords", default)]
        matched_keywords: Vec<String>,
    },
    Ai {
        confidence: f64,
        #[serde(default)]
        suggestions: Vec<String>,
    },
}

impl IssueSource {
    pub fn kind(&self) -> IssueKind {
        match self {
            IssueSource::Rule { .. } => IssueKind::Rule,
            IssueSource::Policy { .. } => IssueKind::Policy,
            IssueSource::Ai { .. } => IssueKind::Ai,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IssueKind {
    Rule,
    Policy,
    Ai,
}

impl IssueKind {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueKind::Rule => ids::KIND_RULE,
            IssueKind::Policy => ids::KIND_POLICY,
            IssueKind::Ai => ids::KIND_AI,
        }
    }
}

/// One raw sighting retained inside a grouped issue.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Occurrence {
    #[serde(flatten)]
    pub source: IssueSource,
    pub risk_level: Tier,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_in: Option<Context>,
}

/// A reported concern, before or after grouping.
///
/// Raw issues carry `occurrence_count == 1` and no `occurrences`; grouping fills
/// `occurrences` with every sighting, so `occurrences.len() == occurrence_count`
/// for grouped issues.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    #[serde(flatten)]
    pub source: IssueSource,
    pub term: String,
    pub category: String,
    pub risk_level: Tier,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub found_in: Option<Context>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub occurrences: Vec<Occurrence>,
    pub occurrence_count: u32,
    #[serde(default)]
    pub group_id: String,
    #[serde(default)]
    pub is_grouped: bool,
}

impl Issue {
    /// A fresh, ungrouped issue.
    pub fn raw(
        source: IssueSource,
        term: &str,
        category: &str,
        risk_level: Tier,
        description: &str,
        found_in: Option<Context>,
    ) -> Self {
        Self {
            source,
            term: term.to_string(),
            category: category.to_string(),
            risk_level,
            description: description.to_string(),
            found_in,
            occurrences: Vec::new(),
            occurrence_count: 1,
            group_id: String::new(),
            is_grouped: false,
        }
    }

    pub fn kind(&self) -> IssueKind {
        self.source.kind()
    }

    pub fn as_occurrence(&self) -> Occurrence {
        Occurrence {
            source: self.source.clone(),
            risk_level: self.risk_level,
            description: self.description.clone(),
            found_in: self.found_in.clone(),
        }
    }

    /// Every stored context: the issue's own plus those of its occurrences.
    pub fn contexts(&self) -> impl Iterator<Item = &Context> {
        self.found_in
            .iter()
            .chain(self.occurrences.iter().filter_map(|o| o.found_in.as_ref()))
    }
}

/// Per-tier group counts plus the derived overall tier.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct RiskAssessment {
    pub critical: u32,
    pub high: u32,
    pub medium: u32,
    pub low: u32,
    pub warning: u32,
    /// Highest tier with a nonzero count; `null` when there are no issues.
    #[serde(default)]
    pub overall: Option<Tier>,
}

impl RiskAssessment {
    pub fn count(&self, tier: Tier) -> u32 {
        match tier {
            Tier::Critical => self.critical,
            Tier::High => self.high,
            Tier::Medium => self.medium,
            Tier::Low => self.low,
            Tier::Warning => self.warning,
        }
    }

    pub fn count_mut(&mut self, tier: Tier) -> &mut u32 {
        match tier {
            Tier::Critical => &mut self.critical,
            Tier::High => &mut self.high,
            Tier::Medium => &mut self.medium,
            Tier::Low => &mut self.low,
            Tier::Warning => &mut self.warning,
        }
    }

    pub fn total(&self) -> u32 {
        Tier::DESCENDING.iter().map(|t| self.count(*t)).sum()
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct SectionHealth {
    pub field_name: FieldName,
    pub status: Status,
    pub issue_count: u32,
}

/// Recommendation priority. Low-tier issues count toward the score but get no
/// recommendation of their own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Critical,
    High,
    Medium,
    Warning,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Recommendation {
    pub priority: Priority,
    pub title: String,
    pub message: String,
    pub count: u32,
}

/// A policy section scored above the match threshold (informational).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicyMatch {
    pub title: String,
    pub category: String,
    pub risk_level: Tier,
    pub match_ratio: f64,
    pub matched_keywords: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum AugmentationStatus {
    /// The model answered and its verdict was merged.
    Used,
    /// Augmentation was not attempted.
    Skipped,
    /// Attempted but failed, timed out, or was cancelled.
    Failed,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Augmentation {
    pub status: AugmentationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model_used: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default)]
    pub suggestions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl Augmentation {
    pub fn skipped(reason: &str) -> Self {
        Self {
            status: AugmentationStatus::Skipped,
            model_used: None,
            confidence: None,
            suggestions: Vec::new(),
            reason: Some(reason.to_string()),
        }
    }

    pub fn failed(reason: &str) -> Self {
        Self {
            status: AugmentationStatus::Failed,
            ..Self::skipped(reason)
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

/// The analysis report: the sole artifact handed to UI, export and certificate consumers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    /// Versioned schema identifier.
    pub schema: String,
    pub tool: ToolMeta,
    #[schemars(with = "String")]
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub listing_text: String,
    pub verdict: Status,
    pub total_issues: u32,
    pub compliance_score: u32,
    pub risk_assessment: RiskAssessment,
    pub flagged_issues: Vec<Issue>,
    pub section_health: Vec<SectionHealth>,
    pub recommendations: Vec<Recommendation>,
    #[serde(default)]
    pub matched_policies: Vec<PolicyMatch>,
    pub augmentation: Augmentation,
}
