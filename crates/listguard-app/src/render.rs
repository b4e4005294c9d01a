//! Render use cases: convert the wire report to the renderable model and format it.

use listguard_render::{
    RenderableContext, RenderableIssue, RenderablePolicyMatch, RenderableRecommendation,
    RenderableReport, RenderableSection, RenderableStatus, RenderableTierCount,
};
use listguard_types::{
    AnalysisReport, Augmentation, AugmentationStatus, Context, Issue, Priority, Status, Tier,
};

pub fn to_renderable(report: &AnalysisReport) -> RenderableReport {
    let risk = &report.risk_assessment;
    RenderableReport {
        verdict: renderable_status(report.verdict),
        score: report.compliance_score,
        overall: risk.overall.map(|t| t.as_str().to_string()),
        total_issues: report.total_issues,
        tiers: Tier::DESCENDING
            .iter()
            .map(|tier| RenderableTierCount {
                tier: tier.as_str().to_string(),
                count: risk.count(*tier),
            })
            .collect(),
        issues: report
            .flagged_issues
            .iter()
            .map(|issue| RenderableIssue {
                kind: issue.kind().as_str().to_string(),
                tier: issue.risk_level.as_str().to_string(),
                term: issue.term.clone(),
                category: issue.category.clone(),
                description: issue.description.clone(),
                occurrences: issue.occurrence_count,
                contexts: sightings(issue)
                    .map(|c| RenderableContext {
                        before: c.snippet_before.clone(),
                        term: c.term.clone(),
                        after: c.snippet_after.clone(),
                    })
                    .collect(),
            })
            .collect(),
        sections: report
            .section_health
            .iter()
            .map(|s| RenderableSection {
                field: s.field_name.label().to_string(),
                status: renderable_status(s.status),
                issue_count: s.issue_count,
            })
            .collect(),
        matched_policies: report
            .matched_policies
            .iter()
            .map(|m| RenderablePolicyMatch {
                title: m.title.clone(),
                ratio: m.match_ratio,
                keywords: m.matched_keywords.clone(),
            })
            .collect(),
        recommendations: report
            .recommendations
            .iter()
            .map(|r| RenderableRecommendation {
                priority: priority_label(r.priority).to_string(),
                title: r.title.clone(),
                message: r.message.clone(),
            })
            .collect(),
        augmentation_note: augmentation_note(&report.augmentation),
    }
}

pub fn render_markdown(report: &AnalysisReport) -> String {
    listguard_render::render_markdown(&to_renderable(report))
}

/// Terminal summary, one line per entry.
pub fn render_text(report: &AnalysisReport) -> String {
    let mut out = listguard_render::render_text_lines(&to_renderable(report)).join("\n");
    out.push('\n');
    out
}

/// Contexts of a grouped issue come from its occurrences, which already include the seed.
fn sightings(issue: &Issue) -> Box<dyn Iterator<Item = &Context> + '_> {
    if issue.occurrences.is_empty() {
        Box::new(issue.found_in.iter())
    } else {
        Box::new(issue.occurrences.iter().filter_map(|o| o.found_in.as_ref()))
    }
}

fn renderable_status(status: Status) -> RenderableStatus {
    match status {
        Status::Pass => RenderableStatus::Pass,
        Status::Warning => RenderableStatus::Warning,
        Status::Fail => RenderableStatus::Fail,
    }
}

fn priority_label(priority: Priority) -> &'static str {
    match priority {
        Priority::Critical => "critical",
        Priority::High => "high",
        Priority::Medium => "medium",
        Priority::Warning => "warning",
        Priority::Success => "success",
    }
}

fn augmentation_note(aug: &Augmentation) -> Option<String> {
    let reason = aug.reason.as_deref().unwrap_or("unknown");
    match aug.status {
        AugmentationStatus::Used => None,
        // Turned off on purpose; nothing to warn about.
        AugmentationStatus::Skipped if reason == listguard_types::ids::REASON_AI_DISABLED => None,
        AugmentationStatus::Skipped => Some(format!("AI analysis was skipped ({reason})")),
        AugmentationStatus::Failed => Some(format!(
            "AI analysis was unavailable ({reason}); results are rule- and policy-based only"
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use listguard_types::{
        FieldName, IssueSource, Occurrence, Recommendation, RiskAssessment, SCHEMA_REPORT_V1,
        SectionHealth, ToolMeta,
    };
    use time::macros::datetime;

    fn sample_report(augmentation: Augmentation) -> AnalysisReport {
        let context = |before: &str, after: &str| Context {
            snippet_before: before.to_string(),
            term: "replica".to_string(),
            snippet_after: after.to_string(),
            position: 0,
            sentence_or_paragraph: String::new(),
        };
        let mut issue = Issue::raw(
            IssueSource::Rule {
                reason: String::new(),
            },
            "replica",
            "counterfeit",
            Tier::High,
            "No replicas",
            Some(context("Title:", "watch")),
        );
        let second = Occurrence {
            found_in: Some(context("A", "that")),
            ..issue.as_occurrence()
        };
        issue.occurrences = vec![issue.as_occurrence(), second];
        issue.occurrence_count = 2;
        issue.is_grouped = true;

        AnalysisReport {
            schema: SCHEMA_REPORT_V1.to_string(),
            tool: ToolMeta {
                name: "listguard".to_string(),
                version: "0.0.0".to_string(),
            },
            timestamp: datetime!(2026-01-01 00:00 UTC),
            listing_text: "Title: Replica watch".to_string(),
            verdict: Status::Fail,
            total_issues: 1,
            compliance_score: 50,
            risk_assessment: RiskAssessment {
                high: 1,
                overall: Some(Tier::High),
                ..RiskAssessment::default()
            },
            flagged_issues: vec![issue],
            section_health: vec![SectionHealth {
                field_name: FieldName::Title,
                status: Status::Fail,
                issue_count: 1,
            }],
            recommendations: vec![Recommendation {
                priority: Priority::High,
                title: "Revise High-Risk Terms".to_string(),
                message: "1 high-risk term found".to_string(),
                count: 1,
            }],
            matched_policies: Vec::new(),
            augmentation,
        }
    }

    #[test]
    fn renderable_carries_tiers_highest_first() {
        let r = to_renderable(&sample_report(Augmentation::skipped("ai_disabled")));
        assert_eq!(r.verdict, RenderableStatus::Fail);
        assert_eq!(r.overall.as_deref(), Some("high"));
        let tiers: Vec<_> = r.tiers.iter().map(|t| (t.tier.as_str(), t.count)).collect();
        assert_eq!(tiers[0], ("critical", 0));
        assert_eq!(tiers[1], ("high", 1));
        assert_eq!(r.sections[0].field, "Title");
        assert_eq!(r.recommendations[0].priority, "high");
        assert_eq!(r.augmentation_note, None);
    }

    #[test]
    fn renderable_issue_lists_every_context() {
        let r = to_renderable(&sample_report(Augmentation::skipped("ai_disabled")));
        let issue = &r.issues[0];
        assert_eq!(issue.kind, "rule");
        assert_eq!(issue.occurrences, 2);
        // The seed is the first occurrence and is not repeated.
        assert_eq!(issue.contexts.len(), 2);
        assert_eq!(issue.contexts[0].before, "Title:");
        assert_eq!(issue.contexts[1].before, "A");
    }

    #[test]
    fn failed_augmentation_adds_note() {
        let r = to_renderable(&sample_report(Augmentation::failed("timeout")));
        let note = r.augmentation_note.expect("note");
        assert!(note.contains("timeout"));

        let r = to_renderable(&sample_report(Augmentation::skipped("ai_not_configured")));
        assert!(r.augmentation_note.is_some());
    }

    #[test]
    fn markdown_and_text_render() {
        let report = sample_report(Augmentation::failed("timeout"));
        let md = render_markdown(&report);
        assert!(md.contains("## Issues"));
        assert!(md.contains("`replica`"));

        let text = render_text(&report);
        assert!(text.starts_with("listguard: FAIL score=50"));
        assert!(text.ends_with('\n'));
    }
}
