use crate::policy::ScoreWeights;
use listguard_types::{RiskAssessment, Tier};

/// 100 minus per-group penalties, minus a one-off penalty when any critical or
/// high group exists. Never below 0.
pub fn compliance_score(risk: &RiskAssessment, weights: &ScoreWeights) -> u32 {
    let mut penalty = Tier::DESCENDING
        .iter()
        .map(|tier| risk.count(*tier).saturating_mul(weights.penalty(*tier)))
        .fold(0u32, u32::saturating_add);

    if risk.critical > 0 || risk.high > 0 {
        penalty = penalty.saturating_add(weights.severe_penalty);
    }

    100u32.saturating_sub(penalty)
}
