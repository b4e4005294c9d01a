//! Keyword-overlap relevance between a listing and policy sections.

use crate::policy::RelevanceConfig;
use crate::scan::matcher::category_or_general;
use crate::scan::text::{fold_case, normalize};
use listguard_types::{Issue, IssueSource, PolicyMatch, PolicySection};

/// Words that carry no policy signal. Tokens shorter than the minimum keyword
/// length are dropped before this list is consulted.
const STOP_WORDS: &[&str] = &[
    "about", "above", "after", "again", "against", "allowed", "also", "because", "been",
    "before", "being", "below", "between", "both", "buyers", "cannot", "could", "does",
    "doing", "during", "each", "from", "further", "have", "having", "here", "including",
    "into", "item", "items", "listing", "listings", "marketplace", "more", "most", "must",
    "only", "other", "over", "policy", "policies", "prohibited", "same", "seller", "sellers",
    "should", "some", "such", "than", "that", "their", "them", "then", "there", "these",
    "they", "this", "those", "through", "under", "until", "very", "were", "what", "when",
    "where", "which", "while", "will", "with", "within", "without", "would", "your",
];

#[derive(Clone, Debug, PartialEq)]
pub struct SectionScore {
    pub ratio: f64,
    pub keywords: Vec<String>,
    pub matched: Vec<String>,
}

#[derive(Clone, Debug, Default)]
pub struct RelevanceOutcome {
    /// Sections above the match threshold, highest ratio first.
    pub matches: Vec<PolicyMatch>,
    pub issues: Vec<Issue>,
}

/// Up to `max_keywords` unique keywords from a section's title and summary.
///
/// Punctuation is stripped before splitting, so `e-cigarettes` is one keyword.
pub fn extract_keywords(title: &str, summary: &str, cfg: &RelevanceConfig) -> Vec<String> {
    let combined = fold_case(&format!("{title} {summary}"));
    let cleaned: String = combined
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .collect();

    let mut keywords: Vec<String> = Vec::new();
    for word in cleaned.split_whitespace() {
        if keywords.len() >= cfg.max_keywords {
            break;
        }
        if word.chars().count() < cfg.min_keyword_len || is_stop_word(word, cfg) {
            continue;
        }
        if !keywords.iter().any(|k| k == word) {
            keywords.push(word.to_string());
        }
    }
    keywords
}

fn is_stop_word(word: &str, cfg: &RelevanceConfig) -> bool {
    STOP_WORDS.contains(&word) || cfg.extra_stop_words.iter().any(|w| w == word)
}

/// Fraction of a section's keywords found as substrings of the normalized text.
/// Sections without keywords score 0.
pub fn score_section(
    normalized: &str,
    section: &PolicySection,
    cfg: &RelevanceConfig,
) -> SectionScore {
    let keywords = extract_keywords(&section.title, &section.summary, cfg);
    let matched: Vec<String> = keywords
        .iter()
        .filter(|k| normalized.contains(k.as_str()))
        .cloned()
        .collect();
    let ratio = if keywords.is_empty() {
        0.0
    } else {
        matched.len() as f64 / keywords.len() as f64
    };
    SectionScore {
        ratio,
        keywords,
        matched,
    }
}

pub fn score_policies(
    text: &str,
    policies: &[PolicySection],
    cfg: &RelevanceConfig,
) -> RelevanceOutcome {
    let normalized = normalize(text);
    let mut outcome = RelevanceOutcome::default();

    for section in policies {
        let title = section.title.trim();
        if title.is_empty() {
            continue;
        }

        let score = score_section(&normalized, section, cfg);
        if score.ratio <= cfg.match_threshold {
            continue;
        }

        let category = category_or_general(&section.category);
        outcome.matches.push(PolicyMatch {
            title: title.to_string(),
            category: category.to_string(),
            risk_level: section.risk_level,
            match_ratio: score.ratio,
            matched_keywords: score.matched.clone(),
        });

        if score.ratio > cfg.flag_threshold && section.risk_level.is_severe() {
            outcome.issues.push(Issue::raw(
                IssueSource::Policy {
                    match_ratio: score.ratio,
                    matched_keywords: score.matched,
                },
                title,
                category,
                section.risk_level,
                &policy_description(section),
                None,
            ));
        }
    }

    outcome
        .matches
        .sort_by(|a, b| b.match_ratio.total_cmp(&a.match_ratio));
    outcome
}

fn policy_description(section: &PolicySection) -> String {
    let summary = section.summary.trim();
    if summary.is_empty() {
        format!(
            "Listing closely matches policy section '{}'",
            section.title.trim()
        )
    } else {
        summary.to_string()
    }
}
