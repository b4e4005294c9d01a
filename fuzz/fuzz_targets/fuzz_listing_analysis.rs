//! Fuzz target for the full evaluation pipeline.
//!
//! Goal: evaluation **never panics** on any listing text and rule set, and the
//! report invariants hold for every input.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_listing_analysis
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use listguard_domain::model::ListingInput;
use listguard_domain::policy::EffectiveConfig;
use listguard_types::{PolicySection, Rule, Tier};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    terms: Vec<(String, u8)>,
    policies: Vec<(String, String, u8)>,
}

fn tier(n: u8) -> Tier {
    Tier::DESCENDING[usize::from(n) % Tier::DESCENDING.len()]
}

fuzz_target!(|input: Input| {
    let rules: Vec<Rule> = input
        .terms
        .iter()
        .take(16)
        .map(|(term, t)| Rule::new(term, tier(*t), "", ""))
        .collect();
    let policies: Vec<PolicySection> = input
        .policies
        .iter()
        .take(8)
        .map(|(title, summary, t)| PolicySection {
            title: title.clone(),
            summary: summary.clone(),
            category: String::new(),
            risk_level: tier(*t),
        })
        .collect();

    let listing = ListingInput::new(&input.text, &rules, &policies);
    let report = listguard_domain::evaluate(&listing, &EffectiveConfig::default());

    assert!(report.score <= 100);
    assert_eq!(report.risk.total() as usize, report.issues.len());
    for issue in &report.issues {
        assert_eq!(issue.occurrences.len(), issue.occurrence_count as usize);
    }
});
