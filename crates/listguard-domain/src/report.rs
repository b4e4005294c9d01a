use listguard_types::{
    Issue, PolicyMatch, Recommendation, RiskAssessment, SectionHealth, Status,
};

#[derive(Clone, Debug)]
pub struct DomainReport {
    pub verdict: Status,
    /// Grouped issues, highest tier first.
    pub issues: Vec<Issue>,
    /// Issue count before grouping.
    pub raw_issue_count: u32,
    pub risk: RiskAssessment,
    pub score: u32,
    pub sections: Vec<SectionHealth>,
    pub recommendations: Vec<Recommendation>,
    pub matched_policies: Vec<PolicyMatch>,
}
