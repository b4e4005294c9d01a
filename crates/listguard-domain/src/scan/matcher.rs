//! Prohibited-term matching.

use crate::policy::MatcherConfig;
use crate::scan::text::{FoldedText, extract_context, fold_case, normalize, tokenize};
use globset::{Glob, GlobSet, GlobSetBuilder};
use listguard_types::{Issue, IssueSource, Rule, ids};
use std::collections::BTreeSet;
use tracing::debug;

/// Merge store rules with fallback rules into the single list the matcher takes.
///
/// Rules are keyed by normalized term; the first occurrence wins, so store rules
/// take precedence over fallback rules. Blank terms are dropped.
pub fn merge_rule_sets(primary: &[Rule], fallback: &[Rule]) -> Vec<Rule> {
    let mut seen = BTreeSet::new();
    primary
        .iter()
        .chain(fallback)
        .filter(|rule| {
            let key = normalize(&rule.term);
            !key.is_empty() && seen.insert(key)
        })
        .cloned()
        .collect()
}

/// One raw issue per rule match. A term found k times yields k issues.
pub fn match_rules(text: &str, rules: &[Rule], cfg: &MatcherConfig, out: &mut Vec<Issue>) {
    let folded = FoldedText::new(text);
    let tokens = tokenize(text);
    let allow = build_allowlist(&cfg.allow);

    for rule in rules {
        let term = normalize(&rule.term);
        if term.is_empty() || is_allowed(allow.as_ref(), &term) {
            continue;
        }

        for (start, end) in folded.find_all(&term) {
            let context = extract_context(
                text,
                &tokens,
                start,
                end,
                cfg.context_tokens,
                cfg.char_window,
            );
            out.push(Issue::raw(
                IssueSource::Rule {
                    reason: rule.reason.clone(),
                },
                rule.term.trim(),
                category_or_general(&rule.category),
                rule.risk_level,
                &rule_description(rule),
                Some(context),
            ));
        }
    }
}

pub(crate) fn build_allowlist(allow: &[String]) -> Option<GlobSet> {
    if allow.is_empty() {
        return None;
    }

    let mut builder = GlobSetBuilder::new();
    // Patterns are validated in listguard-settings; anything else is ignored here.
    for glob in allow.iter().filter_map(|p| Glob::new(&fold_case(p)).ok()) {
        builder.add(glob);
    }
    builder.build().ok()
}

/// Whether `[matcher] allow` suppresses a normalized term. Applies to rule and AI terms.
pub(crate) fn is_allowed(allow: Option<&GlobSet>, term: &str) -> bool {
    let allowed = allow.is_some_and(|set| set.is_match(term));
    if allowed {
        debug!(term, "term suppressed by allowlist");
    }
    allowed
}

pub(crate) fn category_or_general(category: &str) -> &str {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        ids::CATEGORY_GENERAL
    } else {
        trimmed
    }
}

fn rule_description(rule: &Rule) -> String {
    let reason = rule.reason.trim();
    if reason.is_empty() {
        format!("Prohibited term '{}' found in listing", rule.term.trim())
    } else {
        reason.to_string()
    }
}
