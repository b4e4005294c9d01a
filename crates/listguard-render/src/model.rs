#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenderableStatus {
    Pass,
    Warning,
    Fail,
}

impl RenderableStatus {
    pub fn label(self) -> &'static str {
        match self {
            RenderableStatus::Pass => "PASS",
            RenderableStatus::Warning => "WARNING",
            RenderableStatus::Fail => "FAIL",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableContext {
    pub before: String,
    pub term: String,
    pub after: String,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableIssue {
    /// `rule`, `policy` or `ai`.
    pub kind: String,
    pub tier: String,
    pub term: String,
    pub category: String,
    pub description: String,
    pub occurrences: u32,
    pub contexts: Vec<RenderableContext>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableSection {
    pub field: String,
    pub status: RenderableStatus,
    pub issue_count: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableRecommendation {
    pub priority: String,
    pub title: String,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderablePolicyMatch {
    pub title: String,
    pub ratio: f64,
    pub keywords: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderableTierCount {
    pub tier: String,
    pub count: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RenderableReport {
    pub verdict: RenderableStatus,
    pub score: u32,
    pub overall: Option<String>,
    pub total_issues: u32,
    /// Highest tier first.
    pub tiers: Vec<RenderableTierCount>,
    pub issues: Vec<RenderableIssue>,
    pub sections: Vec<RenderableSection>,
    pub matched_policies: Vec<RenderablePolicyMatch>,
    pub recommendations: Vec<RenderableRecommendation>,
    /// Set when AI augmentation was skipped or failed.
    pub augmentation_note: Option<String>,
}
