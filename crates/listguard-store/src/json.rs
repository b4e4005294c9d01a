use crate::{Loaded, PolicyStore, RuleStore, StoreError};
use camino::{Utf8Path, Utf8PathBuf};
use listguard_types::{PolicySection, Rule};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, warn};

const RULES: &str = "rule";
const POLICIES: &str = "policy";

/// A JSON array of rule records on disk.
#[derive(Clone, Debug)]
pub struct JsonRuleFile {
    path: Utf8PathBuf,
}

impl JsonRuleFile {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl RuleStore for JsonRuleFile {
    fn load_rules(&self) -> Result<Loaded<Rule>, StoreError> {
        let text = read(RULES, &self.path)?;
        parse_rules_json(&text)
            .map_err(|e| StoreError::unavailable(RULES, self.path.as_str(), e))
    }
}

/// A JSON array of policy-section records on disk.
#[derive(Clone, Debug)]
pub struct JsonPolicyFile {
    path: Utf8PathBuf,
}

impl JsonPolicyFile {
    pub fn new(path: impl AsRef<Utf8Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl PolicyStore for JsonPolicyFile {
    fn load_policies(&self) -> Result<Loaded<PolicySection>, StoreError> {
        let text = read(POLICIES, &self.path)?;
        parse_policies_json(&text)
            .map_err(|e| StoreError::unavailable(POLICIES, self.path.as_str(), e))
    }
}

fn read(kind: &'static str, path: &Utf8Path) -> Result<String, StoreError> {
    std::fs::read_to_string(path).map_err(|e| StoreError::unavailable(kind, path.as_str(), e))
}

/// Parse a JSON array of rules, skipping records without a usable `term`.
pub fn parse_rules_json(text: &str) -> Result<Loaded<Rule>, serde_json::Error> {
    parse_records(text, RULES, |rule: &Rule| !rule.term.trim().is_empty())
}

/// Parse a JSON array of policy sections, skipping records without a usable `title`.
pub fn parse_policies_json(text: &str) -> Result<Loaded<PolicySection>, serde_json::Error> {
    parse_records(text, POLICIES, |section: &PolicySection| {
        !section.title.trim().is_empty()
    })
}

fn parse_records<T: DeserializeOwned>(
    text: &str,
    kind: &'static str,
    usable: impl Fn(&T) -> bool,
) -> Result<Loaded<T>, serde_json::Error> {
    let values: Vec<Value> = serde_json::from_str(text)?;
    let mut loaded = Loaded::new(Vec::with_capacity(values.len()));

    for (index, value) in values.into_iter().enumerate() {
        match serde_json::from_value::<T>(value) {
            Ok(record) if usable(&record) => loaded.records.push(record),
            Ok(_) => {
                warn!(kind, index, "skipping record with blank key field");
                loaded.skipped += 1;
            }
            Err(err) => {
                warn!(kind, index, error = %err, "skipping malformed record");
                loaded.skipped += 1;
            }
        }
    }

    debug!(
        kind,
        loaded = loaded.records.len(),
        skipped = loaded.skipped,
        "records parsed"
    );
    Ok(loaded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use listguard_types::Tier;

    #[test]
    fn malformed_rule_records_are_skipped_and_counted() {
        let text = r#"[
            {"term": "replica", "riskLevel": "high", "reason": "No replicas"},
            {"riskLevel": "critical"},
            {"term": "   "},
            "not an object",
            {"term": "fake", "risk_level": "extreme", "category": "counterfeit"}
        ]"#;
        let loaded = parse_rules_json(text).expect("array");

        assert_eq!(loaded.skipped, 3);
        assert_eq!(loaded.records.len(), 2);
        assert_eq!(loaded.records[0].risk_level, Tier::High);
        assert_eq!(loaded.records[1].term, "fake");
        assert_eq!(loaded.records[1].risk_level, Tier::Warning);
    }

    #[test]
    fn odd_tier_values_keep_the_record() {
        let text = r#"[
            {"term": "replica", "riskLevel": null},
            {"term": "knockoff", "riskLevel": 3},
            {"term": "bootleg", "riskLevel": ["high"]}
        ]"#;
        let loaded = parse_rules_json(text).expect("array");
        assert_eq!(loaded.skipped, 0);
        let terms: Vec<_> = loaded.records.iter().map(|r| r.term.as_str()).collect();
        assert_eq!(terms, vec!["replica", "knockoff", "bootleg"]);
        assert!(loaded.records.iter().all(|r| r.risk_level == Tier::Warning));

        let sections =
            parse_policies_json(r#"[{"title": "Weapons", "riskLevel": 1.5}]"#).expect("array");
        assert_eq!(sections.skipped, 0);
        assert_eq!(sections.records[0].risk_level, Tier::Warning);
    }

    #[test]
    fn policy_records_need_a_title() {
        let text = r#"[
            {"title": "Counterfeit Goods", "summary": "No fakes", "riskLevel": "critical"},
            {"summary": "orphan"},
            {"title": ""}
        ]"#;
        let loaded = parse_policies_json(text).expect("array");
        assert_eq!(loaded.records.len(), 1);
        assert_eq!(loaded.skipped, 2);
        assert_eq!(loaded.records[0].risk_level, Tier::Critical);
    }

    #[test]
    fn non_array_documents_are_errors() {
        assert!(parse_rules_json(r#"{"term": "replica"}"#).is_err());
        assert!(parse_policies_json("not json").is_err());
    }
}
