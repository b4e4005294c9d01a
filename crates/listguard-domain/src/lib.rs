//! Pure listing evaluation (no IO).
//!
//! Input: listing text plus a rule/policy snapshot and an optional AI verdict.
//! Output: grouped issues, risk tallies, score, section health and recommendations.

#![forbid(unsafe_code)]

pub mod model;
pub mod policy;
pub mod report;

mod engine;
mod fingerprint;
pub mod grouping;
pub mod recommend;
pub mod risk;
pub mod scan;
pub mod score;
pub mod sections;

#[cfg(test)]
mod proptest;
#[cfg(test)]
mod test_support;

pub use engine::evaluate;
pub use scan::matcher::merge_rule_sets;
