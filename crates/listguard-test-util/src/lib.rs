//! Shared test utilities for the listguard workspace.
//!
//! This crate exists because `xtask` needs `normalize_nondeterministic` at
//! runtime (not behind `#[cfg(test)]`), so a `#[cfg(test)]` module inside
//! `listguard-types` would not suffice.

#![forbid(unsafe_code)]

use serde_json::{Map, Value};

pub const TIMESTAMP_PLACEHOLDER: &str = "__TIMESTAMP__";
pub const VERSION_PLACEHOLDER: &str = "__VERSION__";

/// Replace the report's `timestamp` and `tool.version` with fixed placeholders.
///
/// Only a root object that looks like a report (`schema`, `tool`, `verdict` and
/// `flaggedIssues` all present) is touched. Nested objects are never rewritten,
/// so listing-derived data with the same key names survives.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    let Some(obj) = value.as_object_mut() else {
        return value;
    };
    let is_report = ["schema", "tool", "verdict", "flaggedIssues"]
        .iter()
        .all(|k| obj.contains_key(*k));
    if !is_report {
        return value;
    }

    if obj.contains_key("timestamp") {
        obj.insert(
            "timestamp".to_string(),
            Value::String(TIMESTAMP_PLACEHOLDER.to_string()),
        );
    }
    if let Some(tool) = obj.get_mut("tool").and_then(Value::as_object_mut)
        && tool.contains_key("version")
    {
        tool.insert(
            "version".to_string(),
            Value::String(VERSION_PLACEHOLDER.to_string()),
        );
    }
    value
}

/// The stable, hand-checkable part of a report, for fixture expectations.
///
/// Keeps the verdict, score, counts, per-issue `{type, term, riskLevel,
/// occurrenceCount}`, section health, recommendation titles and the augmentation
/// status. Context snippets and descriptions are dropped.
pub fn summarize_report(report: &Value) -> Value {
    let mut out = Map::new();
    for key in [
        "verdict",
        "complianceScore",
        "totalIssues",
        "riskAssessment",
        "sectionHealth",
    ] {
        out.insert(key.to_string(), report[key].clone());
    }

    let issues = report["flaggedIssues"]
        .as_array()
        .map(|issues| {
            issues
                .iter()
                .map(|i| {
                    let mut m = Map::new();
                    for key in ["type", "term", "riskLevel", "occurrenceCount"] {
                        m.insert(key.to_string(), i[key].clone());
                    }
                    Value::Object(m)
                })
                .collect()
        })
        .unwrap_or_default();
    out.insert("issues".to_string(), Value::Array(issues));

    let titles = report["recommendations"]
        .as_array()
        .map(|recs| recs.iter().map(|r| r["title"].clone()).collect())
        .unwrap_or_default();
    out.insert("recommendations".to_string(), Value::Array(titles));

    out.insert(
        "augmentation".to_string(),
        report["augmentation"]["status"].clone(),
    );
    Value::Object(out)
}
