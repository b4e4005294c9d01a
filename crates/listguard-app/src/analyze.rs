//! The `analyze` use case: validate, load, augment, evaluate, and build the report.

use crate::listing::ListingSource;
use anyhow::Context;
use listguard_augment::{Augmenter, CancelToken, HttpAugmenter, run_with_deadline};
use listguard_domain::model::ListingInput;
use listguard_settings::{AiSettings, ListguardConfigV1, Overrides, ResolvedConfig};
use listguard_store::{PolicyStore, RuleStore};
use listguard_types::{
    AiRequest, AiVerdict, AnalysisReport, Augmentation, AugmentationStatus, SCHEMA_REPORT_V1,
    ToolMeta, ids,
};
use std::sync::Arc;
use time::OffsetDateTime;
use tracing::{info, warn};

/// Input for the analyze use case.
pub struct AnalysisInput<'a> {
    pub listing: ListingSource,
    /// Config file contents (empty string if not found).
    pub config_text: &'a str,
    /// CLI overrides.
    pub overrides: Overrides,
    pub rules: &'a dyn RuleStore,
    pub policies: &'a dyn PolicyStore,
    /// Used instead of the HTTP augmenter built from config.
    pub augmenter: Option<Arc<dyn Augmenter>>,
    pub cancel: CancelToken,
}

/// Output from the analyze use case.
#[derive(Clone, Debug)]
pub struct AnalysisOutput {
    pub report: AnalysisReport,
    /// The resolved configuration used.
    pub resolved_config: ResolvedConfig,
    /// Store records dropped as malformed.
    pub skipped_records: usize,
}

/// Run the analyze use case.
///
/// Blank listings and unavailable stores are errors. AI failures are not: they are
/// logged and recorded in `report.augmentation`.
pub fn run_analysis(input: AnalysisInput<'_>) -> anyhow::Result<AnalysisOutput> {
    let text = input.listing.text().context("validate listing")?;

    // Parse config (empty is allowed, defaults apply).
    let cfg = if input.config_text.trim().is_empty() {
        ListguardConfigV1::default()
    } else {
        listguard_settings::parse_config_toml(input.config_text).context("parse config")?
    };
    let resolved = listguard_settings::resolve_config(cfg, input.overrides.clone())
        .context("resolve config")?;

    let rules = input.rules.load_rules().context("load rules")?;
    let policies = input.policies.load_policies().context("load policy sections")?;
    let skipped_records = rules.skipped + policies.skipped;
    if skipped_records > 0 {
        warn!(skipped = skipped_records, "malformed store records were skipped");
    }
    let merged = listguard_domain::merge_rule_sets(&rules.records, &resolved.fallback_rules);

    let (verdict, augmentation) = augment(
        input.listing.ai_request(),
        &resolved.ai,
        input.augmenter.clone(),
        &input.cancel,
    );

    let listing = ListingInput::new(&text, &merged, &policies.records).with_ai(verdict.as_ref());
    let domain = listguard_domain::evaluate(&listing, &resolved.effective);

    info!(
        chars = text.chars().count(),
        rules = merged.len(),
        policies = policies.records.len(),
        groups = domain.issues.len(),
        score = domain.score,
        verdict = domain.verdict.as_str(),
        ai = ?augmentation.status,
        "analysis complete"
    );

    let report = AnalysisReport {
        schema: SCHEMA_REPORT_V1.to_string(),
        tool: ToolMeta {
            name: ids::TOOL_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        },
        timestamp: OffsetDateTime::now_utc(),
        listing_text: text,
        verdict: domain.verdict,
        total_issues: domain.issues.len() as u32,
        compliance_score: domain.score,
        risk_assessment: domain.risk,
        flagged_issues: domain.issues,
        section_health: domain.sections,
        recommendations: domain.recommendations,
        matched_policies: domain.matched_policies,
        augmentation,
    };

    Ok(AnalysisOutput {
        report,
        resolved_config: resolved,
        skipped_records,
    })
}

fn augment(
    request: AiRequest,
    settings: &AiSettings,
    injected: Option<Arc<dyn Augmenter>>,
    cancel: &CancelToken,
) -> (Option<AiVerdict>, Augmentation) {
    if !settings.enabled {
        return (None, Augmentation::skipped(ids::REASON_AI_DISABLED));
    }

    let augmenter: Arc<dyn Augmenter> = match (injected, settings.endpoint.as_deref()) {
        (Some(augmenter), _) => augmenter,
        (None, Some(endpoint)) => match HttpAugmenter::new(endpoint, settings.timeout) {
            Ok(http) => Arc::new(http),
            Err(err) => {
                warn!(error = %err, "AI augmentation unavailable, continuing without it");
                return (None, Augmentation::failed(err.reason()));
            }
        },
        (None, None) => return (None, Augmentation::skipped(ids::REASON_AI_NOT_CONFIGURED)),
    };

    match run_with_deadline(augmenter, request, settings.timeout, cancel) {
        Ok(verdict) => {
            let record = Augmentation {
                status: AugmentationStatus::Used,
                model_used: verdict.model_used.clone(),
                confidence: Some(verdict.confidence),
                suggestions: verdict.suggestions.clone(),
                reason: None,
            };
            (Some(verdict), record)
        }
        Err(err) => {
            warn!(error = %err, "AI augmentation unavailable, continuing without it");
            (None, Augmentation::failed(err.reason()))
        }
    }
}

/// Exit code for a finished analysis: 2 when the overall tier reaches `fail_on`,
/// otherwise 0.
pub fn verdict_exit_code(output: &AnalysisOutput) -> i32 {
    let overall = output.report.risk_assessment.overall;
    if output.resolved_config.effective.fails(overall) {
        2
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::listing::ListingError;
    use listguard_augment::AugmentError;
    use listguard_store::{InMemoryStore, JsonRuleFile, StoreError};
    use listguard_types::{
        AiStatus, IssueKind, ListingFields, PolicySection, Priority, Rule, Status, Tier,
    };
    use std::time::Duration;

    struct StubAugmenter(Result<AiVerdict, fn() -> AugmentError>);

    impl Augmenter for StubAugmenter {
        fn name(&self) -> &str {
            "stub"
        }

        fn analyze(&self, _request: &AiRequest) -> Result<AiVerdict, AugmentError> {
            match &self.0 {
                Ok(v) => Ok(v.clone()),
                Err(make) => Err(make()),
            }
        }
    }

    fn failing() -> Arc<dyn Augmenter> {
        Arc::new(StubAugmenter(Err(|| {
            AugmentError::Malformed("expected value at line 1".to_string())
        })))
    }

    fn answering(status: AiStatus, terms: &[&str]) -> Arc<dyn Augmenter> {
        Arc::new(StubAugmenter(Ok(AiVerdict {
            status,
            flagged_terms: terms.iter().map(|t| t.to_string()).collect(),
            suggestions: vec!["Describe the item plainly".to_string()],
            confidence: 0.7,
            reasoning: String::new(),
            model_used: Some("stub-model".to_string()),
        })))
    }

    fn store() -> InMemoryStore {
        InMemoryStore::new(
            vec![Rule::new("replica", Tier::High, "No replicas", "counterfeit")],
            vec![PolicySection {
                title: "Firearms".to_string(),
                summary: "Weapons and ammunition".to_string(),
                category: "weapons".to_string(),
                risk_level: Tier::Critical,
            }],
        )
    }

    fn bare() -> Overrides {
        Overrides {
            profile: Some("bare".to_string()),
            ..Overrides::default()
        }
    }

    fn input<'a>(
        listing: ListingSource,
        store: &'a InMemoryStore,
        augmenter: Option<Arc<dyn Augmenter>>,
    ) -> AnalysisInput<'a> {
        AnalysisInput {
            listing,
            config_text: "",
            overrides: bare(),
            rules: store,
            policies: store,
            augmenter,
            cancel: CancelToken::new(),
        }
    }

    fn fields(title: &str, description: &str) -> ListingSource {
        ListingSource::Fields(ListingFields {
            title: title.to_string(),
            description: description.to_string(),
            ..ListingFields::default()
        })
    }

    #[test]
    fn repeated_high_term_produces_expected_report() {
        let store = store();
        let out = run_analysis(input(
            fields("Replica watch", "A replica that keeps time"),
            &store,
            None,
        ))
        .expect("analysis");
        let report = &out.report;

        assert_eq!(report.schema, SCHEMA_REPORT_V1);
        assert_eq!(report.total_issues, 1);
        assert_eq!(report.flagged_issues[0].occurrence_count, 2);
        assert_eq!(report.risk_assessment.high, 1);
        assert_eq!(report.compliance_score, 50);
        assert_eq!(report.verdict, Status::Fail);
        assert!(report.matched_policies.is_empty());
        assert_eq!(report.augmentation.status, AugmentationStatus::Skipped);
        assert_eq!(
            report.augmentation.reason.as_deref(),
            Some(ids::REASON_AI_NOT_CONFIGURED)
        );
        assert_eq!(verdict_exit_code(&out), 2);
    }

    #[test]
    fn clean_listing_passes_with_success_recommendation() {
        let store = store();
        let out = run_analysis(input(fields("Oak lamp", "Solid oak"), &store, None))
            .expect("analysis");
        let report = &out.report;

        assert_eq!(report.compliance_score, 100);
        assert_eq!(report.risk_assessment.overall, None);
        assert_eq!(report.section_health.len(), 2);
        assert!(report.section_health.iter().all(|s| s.status == Status::Pass));
        assert_eq!(report.recommendations.len(), 1);
        assert_eq!(report.recommendations[0].priority, Priority::Success);
        assert_eq!(verdict_exit_code(&out), 0);
    }

    #[test]
    fn failing_augmenter_degrades_to_rule_results() {
        let store = store();
        let out = run_analysis(input(
            fields("Replica watch", "Keeps time"),
            &store,
            Some(failing()),
        ))
        .expect("analysis must not fail when AI fails");
        let report = &out.report;

        assert_eq!(report.total_issues, 1);
        assert_eq!(report.flagged_issues[0].kind(), IssueKind::Rule);
        assert_eq!(report.augmentation.status, AugmentationStatus::Failed);
        assert_eq!(report.augmentation.reason.as_deref(), Some("malformed_response"));
    }

    #[test]
    fn answering_augmenter_adds_ai_issues() {
        let store = store();
        let out = run_analysis(input(
            fields("Oak lamp", "Vintage style"),
            &store,
            Some(answering(AiStatus::Warning, &["vintage"])),
        ))
        .expect("analysis");
        let report = &out.report;

        assert_eq!(report.total_issues, 1);
        let issue = &report.flagged_issues[0];
        assert_eq!(issue.kind(), IssueKind::Ai);
        assert_eq!(issue.risk_level, Tier::Medium);
        assert_eq!(report.augmentation.status, AugmentationStatus::Used);
        assert_eq!(report.augmentation.model_used.as_deref(), Some("stub-model"));
        assert_eq!(report.augmentation.confidence, Some(0.7));
        assert_eq!(report.verdict, Status::Warning);
        assert_eq!(verdict_exit_code(&out), 0);
    }

    #[test]
    fn disabled_ai_is_never_called() {
        let store = store();
        let mut input = input(
            fields("Oak lamp", "Vintage style"),
            &store,
            Some(answering(AiStatus::Fail, &["lamp"])),
        );
        input.overrides.no_ai = true;
        let out = run_analysis(input).expect("analysis");

        assert_eq!(out.report.total_issues, 0);
        assert_eq!(
            out.report.augmentation.reason.as_deref(),
            Some(ids::REASON_AI_DISABLED)
        );
    }

    #[test]
    fn cancelled_augmentation_is_recorded() {
        let store = store();
        let input = input(
            fields("Oak lamp", "Vintage style"),
            &store,
            Some(answering(AiStatus::Fail, &["lamp"])),
        );
        input.cancel.cancel();
        let out = run_analysis(input).expect("analysis");

        assert_eq!(out.report.augmentation.status, AugmentationStatus::Failed);
        assert_eq!(out.report.augmentation.reason.as_deref(), Some("cancelled"));
        assert_eq!(out.report.total_issues, 0);
    }

    #[test]
    fn blank_listing_is_a_validation_error() {
        let store = store();
        let err = run_analysis(input(fields("  ", ""), &store, None)).expect_err("blank");
        assert_eq!(err.downcast_ref::<ListingError>(), Some(&ListingError::Empty));
    }

    #[test]
    fn unavailable_rule_store_is_fatal() {
        let store = store();
        let tmp = tempfile::tempdir().expect("temp dir");
        let missing = camino::Utf8PathBuf::from_path_buf(tmp.path().join("rules.json"))
            .expect("utf8 path");
        let rules = JsonRuleFile::new(&missing);

        let mut input = input(fields("Oak lamp", ""), &store, None);
        input.rules = &rules;
        let err = run_analysis(input).expect_err("store failure");
        assert!(err.downcast_ref::<StoreError>().is_some());
    }

    #[test]
    fn standard_profile_merges_baseline_rules_behind_store_rules() {
        let store = store();
        let mut input = input(fields("Counterfeit replica bag", ""), &store, None);
        input.overrides.profile = None;
        let out = run_analysis(input).expect("analysis");

        assert_eq!(out.resolved_config.effective.profile, "standard");
        let replica = out
            .report
            .flagged_issues
            .iter()
            .find(|i| i.term == "replica")
            .expect("replica issue");
        // Store rule wins over the baseline rule for the same term.
        assert_eq!(replica.description, "No replicas");
        assert!(out.report.flagged_issues.iter().any(|i| i.term == "counterfeit"));
        assert_eq!(out.report.risk_assessment.overall, Some(Tier::Critical));
    }

    #[test]
    fn fail_on_threshold_controls_exit_code() {
        let store = store();
        let mut input = input(fields("Oak lamp", "Vintage style"), &store, None);
        input.overrides.fail_on = Some("medium".to_string());
        input.augmenter = Some(answering(AiStatus::Warning, &["vintage"]));
        let out = run_analysis(input).expect("analysis");
        assert_eq!(verdict_exit_code(&out), 2);
    }

    #[test]
    fn config_text_is_applied() {
        let store = store();
        let mut input = input(fields("Replica watch", ""), &store, None);
        input.config_text = "[scoring]\nhigh = 10\nsevere_penalty = 0\n";
        let out = run_analysis(input).expect("analysis");
        assert_eq!(out.report.compliance_score, 90);

        let mut bad = self::input(fields("Replica watch", ""), &store, None);
        bad.config_text = "fail_on = \"severe\"";
        assert!(run_analysis(bad).is_err());
    }

    #[test]
    fn timeout_setting_bounds_slow_augmenters() {
        struct Slow;
        impl Augmenter for Slow {
            fn name(&self) -> &str {
                "slow"
            }
            fn analyze(&self, _request: &AiRequest) -> Result<AiVerdict, AugmentError> {
                std::thread::sleep(Duration::from_secs(2));
                Err(AugmentError::Transport("too late".to_string()))
            }
        }

        let store = store();
        let mut input = input(fields("Replica watch", ""), &store, Some(Arc::new(Slow)));
        input.config_text = "[ai]\ntimeout_ms = 50\n";
        let out = run_analysis(input).expect("analysis");
        assert_eq!(out.report.augmentation.reason.as_deref(), Some("timeout"));
        assert_eq!(out.report.total_issues, 1);
    }
}
