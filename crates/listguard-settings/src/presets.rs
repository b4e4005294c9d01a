use listguard_domain::policy::EffectiveConfig;
use listguard_types::{Rule, Tier};

pub const PROFILE_STANDARD: &str = "standard";
pub const PROFILE_BARE: &str = "bare";
pub const PROFILES: [&str; 2] = [PROFILE_STANDARD, PROFILE_BARE];

/// A named starting point: engine settings plus the baseline fallback rules.
#[derive(Clone, Debug)]
pub struct Preset {
    pub effective: EffectiveConfig,
    pub fallback_rules: Vec<Rule>,
}

/// Preset profiles are opinionated defaults. Unknown names yield `None`.
pub fn preset(profile: &str) -> Option<Preset> {
    match profile {
        PROFILE_STANDARD => Some(Preset {
            effective: effective(PROFILE_STANDARD),
            fallback_rules: baseline_rules(),
        }),
        PROFILE_BARE => Some(Preset {
            effective: effective(PROFILE_BARE),
            fallback_rules: Vec::new(),
        }),
        _ => None,
    }
}

fn effective(profile: &str) -> EffectiveConfig {
    EffectiveConfig {
        profile: profile.to_string(),
        ..EffectiveConfig::default()
    }
}

/// Baseline rules applied when the rule store does not already cover a term.
fn baseline_rules() -> Vec<Rule> {
    const COUNTERFEIT: &str = "counterfeit";
    const WEAPONS: &str = "weapons";
    const HEALTH: &str = "health_claims";
    const CLAIMS: &str = "misleading_claims";

    vec![
        Rule::new(
            "counterfeit",
            Tier::Critical,
            "Counterfeit goods are prohibited",
            COUNTERFEIT,
        ),
        Rule::new(
            "replica",
            Tier::High,
            "Replicas of branded goods are prohibited",
            COUNTERFEIT,
        ),
        Rule::new(
            "knockoff",
            Tier::High,
            "Knockoffs of branded goods are prohibited",
            COUNTERFEIT,
        ),
        Rule::new(
            "fake designer",
            Tier::High,
            "Imitation designer goods are prohibited",
            COUNTERFEIT,
        ),
        Rule::new(
            "not authentic",
            Tier::High,
            "Items that are not authentic cannot be sold as branded goods",
            COUNTERFEIT,
        ),
        Rule::new(
            "inspired by",
            Tier::Low,
            "Brand references may imply an unauthorized copy",
            COUNTERFEIT,
        ),
        Rule::new(
            "firearm",
            Tier::Critical,
            "Firearms cannot be listed",
            WEAPONS,
        ),
        Rule::new(
            "ammunition",
            Tier::Critical,
            "Ammunition cannot be listed",
            WEAPONS,
        ),
        Rule::new(
            "miracle cure",
            Tier::High,
            "Unsubstantiated medical claims are prohibited",
            HEALTH,
        ),
        Rule::new(
            "cures cancer",
            Tier::Critical,
            "Claims to cure serious diseases are prohibited",
            HEALTH,
        ),
        Rule::new(
            "prescription",
            Tier::Medium,
            "Prescription items need additional review",
            HEALTH,
        ),
        Rule::new(
            "guaranteed results",
            Tier::Medium,
            "Outcome guarantees are often misleading",
            CLAIMS,
        ),
        Rule::new(
            "100% natural",
            Tier::Warning,
            "Absolute composition claims must be accurate",
            CLAIMS,
        ),
    ]
}
