//! The `explain` use case: look up tier and issue-kind documentation.

use listguard_types::explain::{self, Explanation};

/// Output from the explain use case.
#[derive(Clone, Debug)]
pub enum ExplainOutput {
    Found(Explanation),
    /// Unknown identifier; includes the known tiers and issue kinds.
    NotFound {
        identifier: String,
        available_tiers: &'static [&'static str],
        available_kinds: &'static [&'static str],
    },
}

/// Look up an explanation for a tier label or issue kind.
pub fn run_explain(identifier: &str) -> ExplainOutput {
    match explain::lookup_explanation(identifier) {
        Some(exp) => ExplainOutput::Found(exp),
        None => ExplainOutput::NotFound {
            identifier: identifier.to_string(),
            available_tiers: explain::all_tiers(),
            available_kinds: explain::all_issue_kinds(),
        },
    }
}

/// Format an explanation for terminal display.
pub fn format_explanation(exp: &Explanation) -> String {
    let mut out = String::new();

    out.push_str(exp.title);
    out.push('\n');
    out.push_str(&"=".repeat(exp.title.len()));
    out.push_str("\n\n");
    out.push_str(exp.description);
    out.push_str("\n\n");
    out.push_str("Remediation\n");
    out.push_str("-----------\n");
    out.push_str(exp.remediation);
    out.push_str("\n\n");
    out.push_str("Examples\n");
    out.push_str("--------\n\n");
    out.push_str("Before (flagged):\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.before);
    out.push('\n');
    out.push_str("```\n\n");
    out.push_str("After (compliant):\n");
    out.push_str("```text\n");
    out.push_str(exp.examples.after);
    out.push('\n');
    out.push_str("```\n");

    out
}

/// Format the "not found" message for terminal display.
pub fn format_not_found(identifier: &str, tiers: &[&str], kinds: &[&str]) -> String {
    let mut out = String::new();

    out.push_str(&format!("Unknown tier or issue kind: {identifier}\n\n"));
    out.push_str("Available tiers:\n");
    for tier in tiers {
        out.push_str(&format!("  - {tier}\n"));
    }
    out.push_str("\nAvailable issue kinds:\n");
    for kind in kinds {
        out.push_str(&format!("  - {kind}\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unwrap_found(output: ExplainOutput) -> Explanation {
        match output {
            ExplainOutput::Found(exp) => exp,
            _ => panic!("expected Found"),
        }
    }

    #[test]
    fn explain_known_tier_ignores_case() {
        let exp = unwrap_found(run_explain("HIGH"));
        assert_eq!(exp.title, "High Risk");
    }

    #[test]
    fn explain_known_kind() {
        assert!(matches!(run_explain("policy"), ExplainOutput::Found(_)));
    }

    #[test]
    fn explain_unknown_lists_alternatives() {
        match run_explain("severe") {
            ExplainOutput::NotFound {
                identifier,
                available_tiers,
                available_kinds,
            } => {
                assert_eq!(identifier, "severe");
                assert_eq!(available_tiers.len(), 5);
                assert_eq!(available_kinds, &["rule", "policy", "ai"]);
            }
            ExplainOutput::Found(_) => panic!("expected NotFound"),
        }
    }

    #[test]
    fn format_explanation_has_sections() {
        let formatted = format_explanation(&unwrap_found(run_explain("critical")));
        assert!(formatted.starts_with("Critical Risk\n=============\n"));
        assert!(formatted.contains("Remediation"));
        assert!(formatted.contains("Before (flagged):"));
        assert!(formatted.contains("```text"));
    }

    #[test]
    fn format_not_found_lists_everything() {
        let formatted = format_not_found("missing", &["critical", "high"], &["rule"]);
        assert!(formatted.contains("Unknown tier or issue kind: missing"));
        assert!(formatted.contains("  - critical\n  - high\n"));
        assert!(formatted.contains("Available issue kinds:\n  - rule\n"));
    }
}
