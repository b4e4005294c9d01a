//! Developer tasks (schema generation, report checks).
//!
//! Keeping this separate avoids bloating the end-user CLI.

use anyhow::{Context, bail};
use schemars::schema_for;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

/// Get the project root (parent of xtask directory).
fn project_root() -> PathBuf {
    let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    match manifest_dir.parent() {
        Some(parent) if manifest_dir.ends_with("xtask") => parent.to_path_buf(),
        _ => manifest_dir,
    }
}

fn schemas_dir() -> PathBuf {
    project_root().join("schemas")
}

/// Schema definition with its target filename.
struct SchemaTarget {
    filename: &'static str,
    generate: fn() -> schemars::Schema,
}

fn generate_report_schema() -> schemars::Schema {
    schema_for!(listguard_types::AnalysisReport)
}

fn generate_config_schema() -> schemars::Schema {
    schema_for!(listguard_settings::ListguardConfigV1)
}

fn schema_targets() -> Vec<SchemaTarget> {
    vec![
        SchemaTarget {
            filename: "listguard.report.v1.json",
            generate: generate_report_schema,
        },
        SchemaTarget {
            filename: "listguard.config.v1.json",
            generate: generate_config_schema,
        },
    ]
}

/// Serialize a schema to pretty-printed JSON with trailing newline.
fn serialize_schema(schema: &schemars::Schema) -> anyhow::Result<String> {
    let mut json = serde_json::to_string_pretty(schema).context("Failed to serialize schema")?;
    json.push('\n');
    Ok(json)
}

fn emit_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    fs::create_dir_all(&dir).context("Failed to create schemas directory")?;

    for target in schema_targets() {
        let json = serialize_schema(&(target.generate)())?;
        let path = dir.join(target.filename);
        fs::write(&path, &json)
            .with_context(|| format!("Failed to write schema to {}", path.display()))?;
        println!("Wrote {}", path.display());
    }

    println!("\nSchemas emitted successfully.");
    Ok(())
}

/// Check that schemas/ matches what would be generated.
fn validate_schemas() -> anyhow::Result<()> {
    let dir = schemas_dir();
    let mut missing = Vec::new();
    let mut mismatched = Vec::new();

    for target in schema_targets() {
        let path = dir.join(target.filename);
        if !path.exists() {
            missing.push(target.filename);
            continue;
        }

        let expected = serialize_schema(&(target.generate)())?;
        let actual = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        if expected != actual {
            mismatched.push(target.filename);
        }
    }

    if missing.is_empty() && mismatched.is_empty() {
        println!("All schemas are up to date.");
        return Ok(());
    }
    if !missing.is_empty() {
        eprintln!("Missing schemas:");
        for name in &missing {
            eprintln!("  - {name}");
        }
    }
    if !mismatched.is_empty() {
        eprintln!("Schemas out of date:");
        for name in &mismatched {
            eprintln!("  - {name}");
        }
    }
    eprintln!("\nRun `cargo xtask emit-schemas` to regenerate.");
    bail!("Schema validation failed")
}

fn read_json(path: &Path) -> anyhow::Result<Value> {
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse {} as JSON", path.display()))
}

/// Problems with a report beyond what the JSON schema can express.
fn report_invariant_errors(report: &Value) -> Vec<String> {
    let mut errors = Vec::new();

    if report["schema"] != listguard_types::SCHEMA_REPORT_V1 {
        errors.push(format!("schema is {}, expected listguard.report.v1", report["schema"]));
    }

    let issues = report["flaggedIssues"].as_array().cloned().unwrap_or_default();
    if report["totalIssues"].as_u64() != Some(issues.len() as u64) {
        errors.push(format!(
            "totalIssues {} does not match {} flagged issues",
            report["totalIssues"],
            issues.len()
        ));
    }
    if report["complianceScore"].as_u64().is_none_or(|s| s > 100) {
        errors.push(format!(
            "complianceScore {} is outside 0..=100",
            report["complianceScore"]
        ));
    }

    for (i, issue) in issues.iter().enumerate() {
        let count = issue["occurrenceCount"].as_u64().unwrap_or(0);
        let listed = issue["occurrences"].as_array().map_or(0, Vec::len) as u64;
        if count != listed {
            errors.push(format!(
                "flaggedIssues[{i}] has occurrenceCount {count} but {listed} occurrences"
            ));
        }
    }

    let counted: u64 = ["critical", "high", "medium", "low", "warning"]
        .iter()
        .filter_map(|tier| report["riskAssessment"][*tier].as_u64())
        .sum();
    if counted != issues.len() as u64 {
        errors.push(format!(
            "riskAssessment counts {counted} groups, report has {}",
            issues.len()
        ));
    }

    errors
}

/// Validate report files against the generated report schema and the report invariants.
fn validate_reports(paths: &[String]) -> anyhow::Result<()> {
    if paths.is_empty() {
        bail!("usage: cargo xtask validate-report <report.json>...");
    }

    let schema = serde_json::to_value(generate_report_schema()).context("serialize schema")?;
    let validator = jsonschema::validator_for(&schema)
        .map_err(|e| anyhow::anyhow!("Failed to compile report schema: {e}"))?;

    let mut errors = Vec::new();
    for path in paths {
        let report = read_json(Path::new(path))?;
        for err in validator.iter_errors(&report) {
            errors.push(format!("{path}: schema validation: {err}"));
        }
        for err in report_invariant_errors(&report) {
            errors.push(format!("{path}: {err}"));
        }
    }

    if errors.is_empty() {
        println!("✓ {} report(s) valid", paths.len());
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!("Report validation failed with {} errors", errors.len())
}

/// Compare two reports, ignoring the timestamp and tool version.
fn diff_reports(paths: &[String]) -> anyhow::Result<()> {
    let [left, right] = paths else {
        bail!("usage: cargo xtask diff-reports <a.json> <b.json>");
    };
    let a = listguard_test_util::normalize_nondeterministic(read_json(Path::new(left))?);
    let b = listguard_test_util::normalize_nondeterministic(read_json(Path::new(right))?);

    if a == b {
        println!("✓ reports are identical (ignoring timestamp and tool version)");
        return Ok(());
    }
    eprintln!("--- {left}\n{}", serde_json::to_string_pretty(&a)?);
    eprintln!("+++ {right}\n{}", serde_json::to_string_pretty(&b)?);
    bail!("reports differ")
}

/// Every tier and issue kind must have a complete explanation.
fn explain_coverage() -> anyhow::Result<()> {
    let tiers = listguard_types::explain::all_tiers();
    let kinds = listguard_types::explain::all_issue_kinds();

    let mut errors = Vec::new();
    for id in tiers.iter().chain(kinds) {
        match listguard_types::explain::lookup_explanation(id) {
            Some(exp) => {
                for (field, text) in [
                    ("title", exp.title),
                    ("description", exp.description),
                    ("remediation", exp.remediation),
                    ("examples.before", exp.examples.before),
                    ("examples.after", exp.examples.after),
                ] {
                    if text.trim().is_empty() {
                        errors.push(format!("'{id}' has empty {field}"));
                    }
                }
            }
            None => errors.push(format!("'{id}' has no explanation")),
        }
    }

    if errors.is_empty() {
        println!("✓ {} tiers have explanations", tiers.len());
        println!("✓ {} issue kinds have explanations", kinds.len());
        return Ok(());
    }
    for error in &errors {
        eprintln!("  - {error}");
    }
    bail!(
        "Explain coverage validation failed with {} errors",
        errors.len()
    )
}

fn print_help() {
    eprintln!("xtask commands:");
    eprintln!("  help                        Show this message");
    eprintln!("  emit-schemas                Generate JSON schemas from Rust types to schemas/");
    eprintln!("  validate-schemas            Check if schemas/ matches generated output (for CI)");
    eprintln!("  validate-report <file>...   Check reports against the schema and invariants");
    eprintln!("  diff-reports <a> <b>        Compare reports ignoring timestamp and version");
    eprintln!("  explain-coverage            Check every tier and issue kind is explained");
    eprintln!("  print-schema-ids            Print known schema IDs");
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cmd = args.get(1).map(String::as_str).unwrap_or("help");
    let rest = args.get(2..).unwrap_or_default();

    match cmd {
        "help" | "--help" | "-h" => {
            print_help();
            Ok(())
        }
        "emit-schemas" => emit_schemas(),
        "validate-schemas" => validate_schemas(),
        "validate-report" => validate_reports(rest),
        "diff-reports" => diff_reports(rest),
        "explain-coverage" => explain_coverage(),
        "print-schema-ids" => {
            println!("{}", listguard_types::SCHEMA_REPORT_V1);
            println!("{}", listguard_settings::SCHEMA_CONFIG_V1);
            Ok(())
        }
        other => bail!("unknown xtask command: {other}\n\nRun `cargo xtask help` for usage."),
    }
    .context("xtask failed")
}
