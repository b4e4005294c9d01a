use crate::{RenderableContext, RenderableReport};

/// Contexts shown per issue before the rest are summarized.
const MAX_CONTEXTS: usize = 3;

pub fn render_markdown(report: &RenderableReport) -> String {
    let mut out = String::new();

    out.push_str("# Listguard report\n\n");
    out.push_str(&format!(
        "- Verdict: **{}**\n- Compliance score: {}/100\n- Overall risk: {}\n- Issues: {}\n\n",
        report.verdict.label(),
        report.score,
        report.overall.as_deref().unwrap_or("none"),
        report.total_issues
    ));

    if let Some(note) = &report.augmentation_note {
        out.push_str(&format!("> Note: {}\n\n", note));
    }

    out.push_str("| Tier | Groups |\n|---|---|\n");
    for t in &report.tiers {
        out.push_str(&format!("| {} | {} |\n", t.tier, t.count));
    }
    out.push('\n');

    if report.issues.is_empty() {
        out.push_str("No issues found.\n\n");
    } else {
        out.push_str("## Issues\n\n");
        for issue in &report.issues {
            out.push_str(&format!(
                "- [{}] `{}` ({}, {}) x{}: {}\n",
                issue.tier.to_uppercase(),
                issue.term,
                issue.kind,
                issue.category,
                issue.occurrences,
                issue.description
            ));
            for ctx in issue.contexts.iter().take(MAX_CONTEXTS) {
                out.push_str(&format!("  - {}\n", snippet(ctx)));
            }
            if issue.contexts.len() > MAX_CONTEXTS {
                out.push_str(&format!(
                    "  - (+{} more)\n",
                    issue.contexts.len() - MAX_CONTEXTS
                ));
            }
        }
        out.push('\n');
    }

    if !report.sections.is_empty() {
        out.push_str("## Section health\n\n");
        for s in &report.sections {
            out.push_str(&format!(
                "- {}: {} ({} {})\n",
                s.field,
                s.status.label(),
                s.issue_count,
                if s.issue_count == 1 { "issue" } else { "issues" }
            ));
        }
        out.push('\n');
    }

    if !report.matched_policies.is_empty() {
        out.push_str("## Matched policies\n\n");
        for m in &report.matched_policies {
            out.push_str(&format!(
                "- {} ({:.0}%): {}\n",
                m.title,
                m.ratio * 100.0,
                m.keywords.join(", ")
            ));
        }
        out.push('\n');
    }

    out.push_str("## Recommendations\n\n");
    for r in &report.recommendations {
        out.push_str(&format!(
            "- [{}] **{}**: {}\n",
            r.priority, r.title, r.message
        ));
    }

    out
}

fn snippet(ctx: &RenderableContext) -> String {
    let mut s = String::from("...");
    if !ctx.before.is_empty() {
        s.push_str(&ctx.before);
        s.push(' ');
    }
    s.push_str(&format!("**{}**", ctx.term));
    if !ctx.after.is_empty() {
        s.push(' ');
        s.push_str(&ctx.after);
    }
    s.push_str("...");
    s
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        RenderableIssue, RenderablePolicyMatch, RenderableRecommendation, RenderableSection,
        RenderableStatus, RenderableTierCount,
    };

    fn tiers(high: u32) -> Vec<RenderableTierCount> {
        ["critical", "high", "medium", "low", "warning"]
            .into_iter()
            .map(|t| RenderableTierCount {
                tier: t.to_string(),
                count: if t == "high" { high } else { 0 },
            })
            .collect()
    }

    fn success() -> RenderableRecommendation {
        RenderableRecommendation {
            priority: "success".to_string(),
            title: "Listing Looks Compliant".to_string(),
            message: "No policy issues were detected.".to_string(),
        }
    }

    #[test]
    fn renders_clean_report() {
        let report = RenderableReport {
            verdict: RenderableStatus::Pass,
            score: 100,
            overall: None,
            total_issues: 0,
            tiers: tiers(0),
            issues: Vec::new(),
            sections: Vec::new(),
            matched_policies: Vec::new(),
            recommendations: vec![success()],
            augmentation_note: None,
        };
        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **PASS**"));
        assert!(md.contains("Compliance score: 100/100"));
        assert!(md.contains("Overall risk: none"));
        assert!(md.contains("No issues found."));
        assert!(md.contains("[success] **Listing Looks Compliant**"));
        assert!(!md.contains("## Section health"));
    }

    #[test]
    fn renders_issues_sections_policies_and_note() {
        let ctx = |before: &str| RenderableContext {
            before: before.to_string(),
            term: "Replica".to_string(),
            after: "watch".to_string(),
        };
        let report = RenderableReport {
            verdict: RenderableStatus::Fail,
            score: 50,
            overall: Some("high".to_string()),
            total_issues: 1,
            tiers: tiers(1),
            issues: vec![RenderableIssue {
                kind: "rule".to_string(),
                tier: "high".to_string(),
                term: "replica".to_string(),
                category: "counterfeit".to_string(),
                description: "No replicas".to_string(),
                occurrences: 5,
                contexts: vec![ctx(""), ctx("a"), ctx("b"), ctx("c"), ctx("d")],
            }],
            sections: vec![RenderableSection {
                field: "title".to_string(),
                status: RenderableStatus::Fail,
                issue_count: 1,
            }],
            matched_policies: vec![RenderablePolicyMatch {
                title: "Counterfeit Goods".to_string(),
                ratio: 0.8,
                keywords: vec!["counterfeit".to_string(), "replica".to_string()],
            }],
            recommendations: vec![RenderableRecommendation {
                priority: "high".to_string(),
                title: "Revise High-Risk Terms".to_string(),
                message: "Rewrite or remove 1 high-risk term.".to_string(),
            }],
            augmentation_note: Some("AI augmentation failed: timeout".to_string()),
        };

        let md = render_markdown(&report);
        assert!(md.contains("Verdict: **FAIL**"));
        assert!(md.contains("| high | 1 |"));
        assert!(md.contains("- [HIGH] `replica` (rule, counterfeit) x5: No replicas"));
        assert!(md.contains("  - ...**Replica** watch..."));
        assert!(md.contains("  - ...a **Replica** watch..."));
        assert!(!md.contains("...d **Replica**"));
        assert!(md.contains("(+2 more)"));
        assert!(md.contains("- title: FAIL (1 issue)"));
        assert!(md.contains("- Counterfeit Goods (80%): counterfeit, replica"));
        assert!(md.contains("> Note: AI augmentation failed: timeout"));
    }
}
