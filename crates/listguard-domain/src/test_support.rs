use crate::policy::EffectiveConfig;
use listguard_types::{
    AiStatus, AiVerdict, Context, Issue, IssueSource, PolicySection, Rule, Tier,
};

pub fn rule(term: &str, tier: Tier) -> Rule {
    Rule::new(term, tier, "", "test")
}

pub fn section(title: &str, summary: &str, tier: Tier) -> PolicySection {
    PolicySection {
        title: title.to_string(),
        summary: summary.to_string(),
        category: "test".to_string(),
        risk_level: tier,
    }
}

pub fn verdict(status: AiStatus, terms: &[&str]) -> AiVerdict {
    AiVerdict {
        status,
        flagged_terms: terms.iter().map(|t| t.to_string()).collect(),
        suggestions: vec!["Remove the flagged wording".to_string()],
        confidence: 0.8,
        reasoning: String::new(),
        model_used: Some("stub-model".to_string()),
    }
}

/// Raw rule issue, optionally with a context sentence.
pub fn issue(term: &str, tier: Tier, sentence: Option<&str>) -> Issue {
    let found_in = sentence.map(|s| Context {
        snippet_before: String::new(),
        term: term.to_string(),
        snippet_after: String::new(),
        position: 0,
        sentence_or_paragraph: s.to_string(),
    });
    Issue::raw(
        IssueSource::Rule {
            reason: String::new(),
        },
        term,
        "test",
        tier,
        &format!("{term} is prohibited"),
        found_in,
    )
}

pub fn config() -> EffectiveConfig {
    EffectiveConfig {
        profile: "test".to_string(),
        ..EffectiveConfig::default()
    }
}

pub fn labeled(title: &str, description: &str, tags: &str) -> String {
    format!("Title: {title}\n\nDescription: {description}\n\nTags: {tags}")
}
