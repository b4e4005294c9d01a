//! Report persistence: JSON serialization and file output.

use anyhow::Context;
use camino::Utf8Path;
use listguard_types::{AnalysisReport, SCHEMA_REPORT_V1};

/// Pretty JSON with a trailing newline.
pub fn serialize_report(report: &AnalysisReport) -> anyhow::Result<Vec<u8>> {
    let mut bytes = serde_json::to_vec_pretty(report).context("serialize report")?;
    bytes.push(b'\n');
    Ok(bytes)
}

/// Parse a saved report, rejecting unknown schemas.
pub fn parse_report_json(text: &str) -> anyhow::Result<AnalysisReport> {
    let value: serde_json::Value = serde_json::from_str(text).context("parse report json")?;

    let schema = value
        .get("schema")
        .and_then(|v| v.as_str())
        .unwrap_or_default();
    anyhow::ensure!(
        schema == SCHEMA_REPORT_V1,
        "unknown report schema: {schema:?} (expected {SCHEMA_REPORT_V1})"
    );

    serde_json::from_value(value).context("parse listguard report")
}

pub fn write_report(path: &Utf8Path, report: &AnalysisReport) -> anyhow::Result<()> {
    let bytes = serialize_report(report)?;
    create_parent(path)?;
    std::fs::write(path, bytes).with_context(|| format!("write report: {path}"))
}

pub fn write_text(path: &Utf8Path, text: &str) -> anyhow::Result<()> {
    create_parent(path)?;
    std::fs::write(path, text).with_context(|| format!("write file: {path}"))
}

fn create_parent(path: &Utf8Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_str().is_empty()) {
        std::fs::create_dir_all(parent).with_context(|| format!("create directory: {parent}"))?;
    }
    Ok(())
}
