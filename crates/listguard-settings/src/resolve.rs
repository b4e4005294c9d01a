use crate::model::{FallbackRuleConfig, ListguardConfigV1};
use crate::presets::{self, PROFILE_STANDARD, PROFILES};
use anyhow::Context;
use globset::Glob;
use listguard_domain::policy::EffectiveConfig;
use listguard_types::{Rule, Tier};
use std::time::Duration;

pub const DEFAULT_AI_TIMEOUT_MS: u64 = 15_000;

/// Command-line values that win over the config file.
#[derive(Clone, Debug, Default)]
pub struct Overrides {
    pub profile: Option<String>,
    pub fail_on: Option<String>,
    pub ai_endpoint: Option<String>,
    /// Forces augmentation off regardless of the file.
    pub no_ai: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AiSettings {
    pub enabled: bool,
    pub endpoint: Option<String>,
    pub timeout: Duration,
}

#[derive(Clone, Debug)]
pub struct ResolvedConfig {
    pub effective: EffectiveConfig,
    /// Profile baseline rules followed by the file's `[[fallback_rules]]`.
    pub fallback_rules: Vec<Rule>,
    pub ai: AiSettings,
}

pub fn resolve_config(
    cfg: ListguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    let profile = overrides
        .profile
        .clone()
        .or(cfg.profile.clone())
        .unwrap_or_else(|| PROFILE_STANDARD.to_string());

    let preset = presets::preset(&profile).with_context(|| {
        format!(
            "unknown profile: {profile} (expected {})",
            PROFILES.join(" or ")
        )
    })?;
    let mut effective = preset.effective;
    let mut fallback_rules = preset.fallback_rules;

    if let Some(fail_on) = overrides.fail_on.as_deref().or(cfg.fail_on.as_deref()) {
        effective.fail_on = parse_tier(fail_on).context("invalid fail_on")?;
    }

    // Matcher
    let matcher = &mut effective.matcher;
    if let Some(n) = cfg.matcher.context_tokens {
        anyhow::ensure!(n > 0, "matcher.context_tokens must be greater than 0");
        matcher.context_tokens = n;
    }
    if let Some(n) = cfg.matcher.char_window {
        anyhow::ensure!(n > 0, "matcher.char_window must be greater than 0");
        matcher.char_window = n;
    }
    validate_allowlist(&cfg.matcher.allow)?;
    matcher.allow = cfg.matcher.allow.clone();

    // Policy relevance
    let relevance = &mut effective.relevance;
    if let Some(t) = cfg.policy.match_threshold {
        relevance.match_threshold = parse_ratio("policy.match_threshold", t)?;
    }
    if let Some(t) = cfg.policy.flag_threshold {
        relevance.flag_threshold = parse_ratio("policy.flag_threshold", t)?;
    }
    anyhow::ensure!(
        relevance.flag_threshold >= relevance.match_threshold,
        "policy.flag_threshold ({}) must not be below policy.match_threshold ({})",
        relevance.flag_threshold,
        relevance.match_threshold
    );
    if let Some(n) = cfg.policy.max_keywords {
        anyhow::ensure!(n > 0, "policy.max_keywords must be greater than 0");
        relevance.max_keywords = n;
    }
    if let Some(n) = cfg.policy.min_keyword_len {
        relevance.min_keyword_len = n;
    }
    relevance.extra_stop_words = cfg
        .policy
        .extra_stop_words
        .iter()
        .map(|w| w.trim().to_lowercase())
        .filter(|w| !w.is_empty())
        .collect();

    // Scoring
    let weights = &mut effective.weights;
    let scoring = &cfg.scoring;
    for (slot, value) in [
        (&mut weights.critical, scoring.critical),
        (&mut weights.high, scoring.high),
        (&mut weights.medium, scoring.medium),
        (&mut weights.low, scoring.low),
        (&mut weights.warning, scoring.warning),
        (&mut weights.severe_penalty, scoring.severe_penalty),
    ] {
        if let Some(v) = value {
            *slot = v;
        }
    }

    for (idx, rule) in cfg.fallback_rules.iter().enumerate() {
        fallback_rules.push(
            parse_fallback_rule(rule).with_context(|| format!("invalid fallback_rules[{idx}]"))?,
        );
    }

    let ai = resolve_ai(&cfg, &overrides)?;

    Ok(ResolvedConfig {
        effective,
        fallback_rules,
        ai,
    })
}

fn resolve_ai(cfg: &ListguardConfigV1, overrides: &Overrides) -> anyhow::Result<AiSettings> {
    let endpoint = overrides
        .ai_endpoint
        .clone()
        .or(cfg.ai.endpoint.clone())
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty());
    if let Some(url) = endpoint.as_deref() {
        anyhow::ensure!(
            url.starts_with("http://") || url.starts_with("https://"),
            "ai.endpoint must be an http(s) URL: {url}"
        );
    }

    let timeout_ms = cfg.ai.timeout_ms.unwrap_or(DEFAULT_AI_TIMEOUT_MS);
    anyhow::ensure!(timeout_ms > 0, "ai.timeout_ms must be greater than 0");

    Ok(AiSettings {
        enabled: !overrides.no_ai && cfg.ai.enabled.unwrap_or(true),
        endpoint,
        timeout: Duration::from_millis(timeout_ms),
    })
}

fn validate_allowlist(patterns: &[String]) -> anyhow::Result<()> {
    for pattern in patterns {
        Glob::new(pattern).with_context(|| format!("invalid matcher.allow glob: {pattern}"))?;
    }
    Ok(())
}

fn parse_tier(v: &str) -> anyhow::Result<Tier> {
    Tier::parse(v).with_context(|| {
        format!("unknown tier: {v} (expected critical|high|medium|low|warning)")
    })
}

fn parse_ratio(name: &str, v: f64) -> anyhow::Result<f64> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&v),
        "{name} must be between 0 and 1, got {v}"
    );
    Ok(v)
}

fn parse_fallback_rule(rule: &FallbackRuleConfig) -> anyhow::Result<Rule> {
    let term = rule.term.trim();
    anyhow::ensure!(!term.is_empty(), "term must not be blank");
    let tier = parse_tier(&rule.risk_level)?;
    Ok(Rule::new(term, tier, rule.reason.trim(), rule.category.trim()))
}
