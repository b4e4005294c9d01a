//! Conversion of an AI verdict into issues.

use crate::policy::MatcherConfig;
use crate::scan::matcher::{build_allowlist, is_allowed};
use crate::scan::text::{FoldedText, extract_context, normalize, tokenize};
use listguard_types::{AiStatus, AiVerdict, Issue, IssueSource, Tier, ids};

/// Tier assigned to issues from a verdict; `None` for a pass.
pub fn verdict_tier(status: AiStatus) -> Option<Tier> {
    match status {
        AiStatus::Fail => Some(Tier::High),
        AiStatus::Warning => Some(Tier::Medium),
        AiStatus::Pass => None,
    }
}

/// One issue per flagged term. A failing verdict without terms yields a single
/// generic issue. Flagged terms found in the text carry the context of their
/// first occurrence.
pub fn issues_from_verdict(verdict: &AiVerdict, text: &str, cfg: &MatcherConfig) -> Vec<Issue> {
    let Some(tier) = verdict_tier(verdict.status) else {
        return Vec::new();
    };

    let source = IssueSource::Ai {
        confidence: verdict.confidence,
        suggestions: verdict.suggestions.clone(),
    };
    let reasoning = verdict.reasoning.trim();

    let terms: Vec<&str> = verdict
        .flagged_terms
        .iter()
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .collect();

    if terms.is_empty() {
        if verdict.status != AiStatus::Fail {
            return Vec::new();
        }
        let description = if reasoning.is_empty() {
            "AI analysis reported a policy violation".to_string()
        } else {
            reasoning.to_string()
        };
        return vec![Issue::raw(
            source,
            ids::AI_GENERIC_TERM,
            ids::AI_CATEGORY,
            tier,
            &description,
            None,
        )];
    }

    let folded = FoldedText::new(text);
    let tokens = tokenize(text);
    let allow = build_allowlist(&cfg.allow);

    terms
        .into_iter()
        .filter(|term| !is_allowed(allow.as_ref(), &normalize(term)))
        .map(|term| {
            let found_in = folded
                .find_all(&normalize(term))
                .first()
                .map(|&(start, end)| {
                    extract_context(
                        text,
                        &tokens,
                        start,
                        end,
                        cfg.context_tokens,
                        cfg.char_window,
                    )
                });
            let description = if reasoning.is_empty() {
                format!("AI analysis flagged '{term}'")
            } else {
                reasoning.to_string()
            };
            Issue::raw(
                source.clone(),
                term,
                ids::AI_CATEGORY,
                tier,
                &description,
                found_in,
            )
        })
        .collect()
}
