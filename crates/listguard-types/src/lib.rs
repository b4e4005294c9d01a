//! Stable DTOs and IDs used across the listguard workspace.
//!
//! This crate is intentionally boring:
//! - input records (rules, policy sections, listing fields)
//! - the AI augmentation wire contract
//! - data types for the emitted analysis report
//! - stable string IDs and labels
//! - explain registry for tiers and issue kinds

#![forbid(unsafe_code)]

pub mod ai;
pub mod explain;
pub mod ids;
pub mod listing;
pub mod report;

pub use ai::{AiRequest, AiStatus, AiVerdict};
pub use explain::{ExamplePair, Explanation, lookup_explanation};
pub use listing::{FieldName, ListingFields, PolicySection, Rule};
pub use report::{
    AnalysisReport, Augmentation, AugmentationStatus, Context, Issue, IssueKind, IssueSource,
    Occurrence, PolicyMatch, Priority, Recommendation, RiskAssessment, SCHEMA_REPORT_V1,
    SectionHealth, Status, Tier, ToolMeta,
};
