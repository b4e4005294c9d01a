use crate::grouping::group_issues;
use crate::model::ListingInput;
use crate::policy::EffectiveConfig;
use crate::recommend::recommendations;
use crate::report::DomainReport;
use crate::risk::assess;
use crate::scan;
use crate::score::compliance_score;
use crate::sections::section_health;
use listguard_types::Status;
use tracing::debug;

pub fn evaluate(input: &ListingInput<'_>, cfg: &EffectiveConfig) -> DomainReport {
    let scanned = scan::run_all(input, cfg);
    let raw_issue_count = scanned.issues.len() as u32;

    let mut issues = group_issues(&scanned.issues);
    // Stable: equal tiers keep first-seen order.
    issues.sort_by(|a, b| b.risk_level.cmp(&a.risk_level));

    let risk = assess(&issues);
    let score = compliance_score(&risk, &cfg.weights);
    let sections = section_health(input.text, &issues);
    let recommendations = recommendations(&risk);
    let verdict = Status::from_overall(risk.overall);

    debug!(
        rules = input.rules.len(),
        policies = input.policies.len(),
        ai = input.ai.is_some(),
        raw_issues = raw_issue_count,
        groups = issues.len(),
        matched_policies = scanned.matched_policies.len(),
        score,
        "listing evaluated"
    );

    DomainReport {
        verdict,
        issues,
        raw_issue_count,
        risk,
        score,
        sections,
        recommendations,
        matched_policies: scanned.matched_policies,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{config, labeled, rule, section, verdict};
    use listguard_types::{AiStatus, FieldName, Priority, Tier};

    #[test]
    fn repeated_high_term_is_one_group_scoring_fifty() {
        let text = labeled("Replica watch", "This replica keeps time", "watch");
        let rules = vec![rule("replica", Tier::High)];
        let report = evaluate(&ListingInput::new(&text, &rules, &[]), &config());

        assert_eq!(report.raw_issue_count, 2);
        assert_eq!(report.issues.len(), 1);
        assert_eq!(report.issues[0].occurrence_count, 2);
        assert_eq!(report.risk.high, 1);
        assert_eq!(report.risk.total(), 1);
        assert_eq!(report.risk.overall, Some(Tier::High));
        assert_eq!(report.score, 50);
        assert_eq!(report.verdict, Status::Fail);

        let failing: Vec<_> = report
            .sections
            .iter()
            .filter(|s| s.status == Status::Fail)
            .map(|s| s.field_name)
            .collect();
        assert_eq!(failing, vec![FieldName::Title, FieldName::Description]);
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].priority, Priority::High);
    }

    #[test]
    fn clean_listing_passes() {
        let text = labeled("Oak lamp", "Solid oak", "lamp");
        let rules = vec![rule("replica", Tier::High)];
        let report = evaluate(&ListingInput::new(&text, &rules, &[]), &config());

        assert!(report.issues.is_empty());
        assert_eq!(report.score, 100);
        assert_eq!(report.verdict, Status::Pass);
        assert_eq!(report.risk.overall, None);
        assert_eq!(report.sections.len(), 3);
        assert!(report.sections.iter().all(|s| s.status == Status::Pass));
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].priority, Priority::Success);
    }

    #[test]
    fn groups_are_ordered_by_tier() {
        let text = "vintage lamp, replica shade";
        let rules = vec![rule("vintage", Tier::Low), rule("replica", Tier::Critical)];
        let report = evaluate(&ListingInput::new(text, &rules, &[]), &config());

        let terms: Vec<_> = report.issues.iter().map(|i| i.term.as_str()).collect();
        assert_eq!(terms, vec!["replica", "vintage"]);
        // 100 - 40 - 5 - 20
        assert_eq!(report.score, 35);
        assert!(report.sections.is_empty());
    }

    #[test]
    fn ai_term_merges_with_rule_term() {
        let text = "Title: Replica bag";
        let rules = vec![rule("replica", Tier::Medium)];
        let v = verdict(AiStatus::Fail, &["Replica"]);
        let input = ListingInput::new(text, &rules, &[]).with_ai(Some(&v));
        let report = evaluate(&input, &config());

        assert_eq!(report.issues.len(), 1);
        let group = &report.issues[0];
        assert_eq!(group.occurrence_count, 2);
        assert_eq!(group.risk_level, Tier::High);
        assert_eq!(report.risk.high, 1);
    }

    #[test]
    fn unrelated_policy_adds_nothing() {
        let text = labeled("Wool sweater", "Hand knitted", "winter");
        let policies = vec![section("Firearms", "Weapons ammunition explosives", Tier::Critical)];
        let report = evaluate(&ListingInput::new(&text, &[], &policies), &config());
        assert!(report.matched_policies.is_empty());
        assert!(report.issues.is_empty());
    }
}
