//! Config parsing and profile/preset resolution.
//!
//! This crate is IO-free: it parses and resolves configuration provided as strings.

#![forbid(unsafe_code)]

mod model;
mod presets;
mod resolve;

pub use model::{
    AiConfig, FallbackRuleConfig, ListguardConfigV1, MatcherSection, PolicyConfig, ScoringConfig,
};
pub use presets::{PROFILE_BARE, PROFILE_STANDARD, PROFILES};
pub use resolve::{AiSettings, Overrides, ResolvedConfig};

/// Stable schema identifier for `listguard.toml`.
pub const SCHEMA_CONFIG_V1: &str = "listguard.config.v1";

/// Parse `listguard.toml` (or equivalent) into a typed model.
pub fn parse_config_toml(input: &str) -> anyhow::Result<ListguardConfigV1> {
    let cfg: ListguardConfigV1 = toml::from_str(input)?;
    Ok(cfg)
}

/// Resolve the effective config used by the engine (profile + file + overrides).
pub fn resolve_config(
    cfg: ListguardConfigV1,
    overrides: Overrides,
) -> anyhow::Result<ResolvedConfig> {
    resolve::resolve_config(cfg, overrides)
}
