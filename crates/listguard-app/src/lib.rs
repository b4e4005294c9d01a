//! Use case orchestration for listguard.
//!
//! This crate provides the application layer: use cases that coordinate the store,
//! augmentation, domain, and render layers. It stays thin and delegates the heavy
//! lifting to those layers.
//!
//! The CLI crate depends on this; it only handles argument parsing and I/O.

#![forbid(unsafe_code)]

mod analyze;
mod explain;
mod listing;
mod render;
mod report;

pub use analyze::{AnalysisInput, AnalysisOutput, run_analysis, verdict_exit_code};
pub use explain::{ExplainOutput, format_explanation, format_not_found, run_explain};
pub use listing::{ListingError, ListingSource, build_listing_text};
pub use render::{render_markdown, render_text, to_renderable};
pub use report::{parse_report_json, serialize_report, write_report, write_text};
