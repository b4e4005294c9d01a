use listguard_types::{Issue, RiskAssessment, Tier};

/// One count per issue group. `overall` is the highest tier present, or `None`.
pub fn assess(groups: &[Issue]) -> RiskAssessment {
    let mut risk = RiskAssessment::default();
    for issue in groups {
        *risk.count_mut(issue.risk_level) += 1;
    }
    risk.overall = Tier::DESCENDING
        .into_iter()
        .find(|tier| risk.count(*tier) > 0);
    risk
}
