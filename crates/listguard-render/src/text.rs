use crate::RenderableReport;

/// Terse one-line-per-item summary for terminals and logs.
///
/// Format: a header line, then `{tier} {kind} {term} x{n}: {description}` per issue
/// and `section {field}: {status} ({count})` per field.
pub fn render_text_lines(report: &RenderableReport) -> Vec<String> {
    let mut out = vec![format!(
        "listguard: {} score={} overall={} issues={}",
        report.verdict.label(),
        report.score,
        report.overall.as_deref().unwrap_or("none"),
        report.total_issues
    )];

    for issue in &report.issues {
        out.push(format!(
            "{} {} {} x{}: {}",
            issue.tier,
            issue.kind,
            issue.term,
            issue.occurrences,
            one_line(&issue.description)
        ));
    }

    for s in &report.sections {
        out.push(format!(
            "section {}: {} ({})",
            s.field,
            s.status.label().to_lowercase(),
            s.issue_count
        ));
    }

    if let Some(note) = &report.augmentation_note {
        out.push(format!("note: {}", one_line(note)));
    }

    out
}

fn one_line(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderableIssue, RenderableSection, RenderableStatus};

    #[test]
    fn renders_header_issue_and_section_lines() {
        let report = RenderableReport {
            verdict: RenderableStatus::Warning,
            score: 85,
            overall: Some("medium".to_string()),
            total_issues: 1,
            tiers: Vec::new(),
            issues: vec![RenderableIssue {
                kind: "ai".to_string(),
                tier: "medium".to_string(),
                term: "vintage".to_string(),
                category: "ai_analysis".to_string(),
                description: "Age claim\nneeds proof".to_string(),
                occurrences: 1,
                contexts: Vec::new(),
            }],
            sections: vec![RenderableSection {
                field: "description".to_string(),
                status: RenderableStatus::Warning,
                issue_count: 1,
            }],
            matched_policies: Vec::new(),
            recommendations: Vec::new(),
            augmentation_note: None,
        };

        let lines = render_text_lines(&report);
        assert_eq!(
            lines,
            vec![
                "listguard: WARNING score=85 overall=medium issues=1",
                "medium ai vintage x1: Age claim needs proof",
                "section description: warning (1)",
            ]
        );
    }
}
