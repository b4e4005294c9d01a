//! Property-based tests for the domain crate.
//!
//! These cover grouping, risk aggregation, scoring and section attribution.

use crate::engine::evaluate;
use crate::grouping::group_issues;
use crate::model::ListingInput;
use crate::policy::ScoreWeights;
use crate::risk::assess;
use crate::scan::text::normalize;
use crate::score::compliance_score;
use crate::sections::section_health;
use crate::test_support::{config, issue, labeled, rule};
use listguard_types::{Issue, RiskAssessment, Status, Tier};
use proptest::prelude::*;

// ============================================================================
// Strategies
// ============================================================================

fn arb_tier() -> impl Strategy<Value = Tier> {
    prop::sample::select(Tier::DESCENDING.to_vec())
}

/// Terms that collide after normalization, so grouping has work to do.
fn arb_term() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec!["replica", "Replica", " REPLICA ", "fake", "Fake", "knockoff"])
}

fn arb_issues() -> impl Strategy<Value = Vec<Issue>> {
    prop::collection::vec(
        (arb_term(), arb_tier(), prop::option::of("[a-z ]{1,20}")),
        0..20,
    )
    .prop_map(|items| {
        items
            .into_iter()
            .map(|(term, tier, sentence)| issue(term, tier, sentence.as_deref()))
            .collect()
    })
}

fn arb_risk() -> impl Strategy<Value = RiskAssessment> {
    (0u32..6, 0u32..6, 0u32..6, 0u32..6, 0u32..6).prop_map(
        |(critical, high, medium, low, warning)| RiskAssessment {
            critical,
            high,
            medium,
            low,
            warning,
            overall: None,
        },
    )
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn k_sightings_make_one_group_of_k(
        spellings in prop::collection::vec(
            prop::sample::select(vec!["replica", "Replica", "REPLICA"]),
            1..8,
        ),
    ) {
        let text = spellings
            .iter()
            .map(|s| format!("{s} lamp"))
            .collect::<Vec<_>>()
            .join(" and ");
        let rules = vec![rule("replica", Tier::High)];
        let report = evaluate(&ListingInput::new(&text, &rules, &[]), &config());

        prop_assert_eq!(report.issues.len(), 1);
        prop_assert_eq!(report.issues[0].occurrence_count as usize, spellings.len());
        prop_assert_eq!(report.issues[0].occurrences.len(), spellings.len());
    }

    #[test]
    fn grouping_is_idempotent(issues in arb_issues()) {
        let once = group_issues(&issues);
        prop_assert_eq!(group_issues(&once), once);
    }

    #[test]
    fn grouping_conserves_sightings_and_keeps_highest_tier(issues in arb_issues()) {
        let groups = group_issues(&issues);

        let total: u32 = groups.iter().map(|g| g.occurrence_count).sum();
        prop_assert_eq!(total as usize, issues.len());

        for group in &groups {
            prop_assert_eq!(group.occurrences.len(), group.occurrence_count as usize);
            let key = normalize(&group.term);
            let highest = issues
                .iter()
                .filter(|i| normalize(&i.term) == key)
                .map(|i| i.risk_level)
                .max();
            prop_assert_eq!(Some(group.risk_level), highest);
        }
    }

    #[test]
    fn overall_is_highest_tier_present(issues in arb_issues()) {
        let groups = group_issues(&issues);
        let risk = assess(&groups);
        prop_assert_eq!(risk.overall, groups.iter().map(|g| g.risk_level).max());
        prop_assert_eq!(risk.total() as usize, groups.len());
    }

    #[test]
    fn score_never_increases_with_more_issues(risk in arb_risk(), tier in arb_tier()) {
        let weights = ScoreWeights::default();
        let before = compliance_score(&risk, &weights);
        let mut worse = risk.clone();
        *worse.count_mut(tier) += 1;
        let after = compliance_score(&worse, &weights);

        prop_assert!(after <= before);
        prop_assert!(after <= 100);
    }

    #[test]
    fn issue_is_attributed_only_to_its_field(field in 0usize..3, tier in arb_tier()) {
        let mut values = ["oak lamp", "blue vase", "gift box"].map(String::from);
        values[field] = format!("{} replica", values[field]);
        let text = labeled(&values[0], &values[1], &values[2]);

        let groups = vec![issue("replica", tier, None)];
        let health = section_health(&text, &groups);

        prop_assert_eq!(health.len(), 3);
        for (i, entry) in health.iter().enumerate() {
            if i == field {
                prop_assert_eq!(entry.issue_count, 1);
                prop_assert_eq!(entry.status, tier.status());
            } else {
                prop_assert_eq!(entry.issue_count, 0);
                prop_assert_eq!(entry.status, Status::Pass);
            }
        }
    }
}
