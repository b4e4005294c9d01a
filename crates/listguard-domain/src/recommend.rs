//! Tier-ordered remediation guidance.

use listguard_types::{Priority, Recommendation, RiskAssessment, Tier};

/// One recommendation per nonzero critical, high, medium and warning tier, highest
/// first; a single success recommendation when there are no issues at all.
pub fn recommendations(risk: &RiskAssessment) -> Vec<Recommendation> {
    if risk.overall.is_none() {
        return vec![Recommendation {
            priority: Priority::Success,
            title: "Listing Looks Compliant".to_string(),
            message: "No policy issues were detected. Give the listing a final read before publishing."
                .to_string(),
            count: 0,
        }];
    }

    Tier::DESCENDING
        .into_iter()
        .filter_map(|tier| for_tier(tier, risk.count(tier)))
        .collect()
}

/// `None` for a tier without issues, and always for `low`.
fn for_tier(tier: Tier, count: u32) -> Option<Recommendation> {
    if count == 0 {
        return None;
    }
    let (priority, title, message) = match tier {
        Tier::Critical => (
            Priority::Critical,
            "Remove Critical Violations",
            format!(
                "Remove {count} critical {} immediately. Listings with these terms are likely to be taken down.",
                plural(count, "issue", "issues")
            ),
        ),
        Tier::High => (
            Priority::High,
            "Revise High-Risk Terms",
            format!(
                "Rewrite or remove {count} high-risk {}. They commonly trigger review or removal.",
                plural(count, "term", "terms")
            ),
        ),
        Tier::Medium => (
            Priority::Medium,
            "Review Medium-Risk Terms",
            format!(
                "Review {count} medium-risk {} and rephrase where possible.",
                plural(count, "term", "terms")
            ),
        ),
        Tier::Low => return None,
        Tier::Warning => (
            Priority::Warning,
            "Check Warnings",
            format!(
                "Check {count} {} for accuracy before publishing.",
                plural(count, "warning", "warnings")
            ),
        ),
    };

    Some(Recommendation {
        priority,
        title: title.to_string(),
        message,
        count,
    })
}

fn plural<'a>(count: u32, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 { one } else { many }
}
