//! Issue producers. Each one appends raw, ungrouped issues.

pub mod ai;
pub mod matcher;
pub mod relevance;
pub mod text;


use crate::model::ListingInput;
use crate::policy::EffectiveConfig;
use listguard_types::{Issue, PolicyMatch};

#[derive(Clone, Debug, Default)]
pub struct ScanOutput {
    /// Rule issues first, then policy issues, then AI issues.
    pub issues: Vec<Issue>,
    pub matched_policies: Vec<PolicyMatch>,
}

pub fn run_all(input: &ListingInput<'_>, cfg: &EffectiveConfig) -> ScanOutput {
    let mut issues = Vec::new();

    matcher::match_rules(input.text, input.rules, &cfg.matcher, &mut issues);

    let relevance = relevance::score_policies(input.text, input.policies, &cfg.relevance);
    issues.extend(relevance.issues);

    if let Some(verdict) = input.ai {
        issues.extend(ai::issues_from_verdict(verdict, input.text, &cfg.matcher));
    }

    ScanOutput {
        issues,
        matched_policies: relevance.matches,
    }
}
