//! Store adapters: where rules and policy sections come from.
//!
//! This crate is allowed to do filesystem IO. Records are read once per analysis and
//! handed to the engine as an immutable snapshot.

#![forbid(unsafe_code)]

mod error;
mod json;
mod memory;

pub use error::StoreError;
pub use json::{JsonPolicyFile, JsonRuleFile, parse_policies_json, parse_rules_json};
pub use memory::InMemoryStore;

use listguard_types::{PolicySection, Rule};

/// Records that survived per-record validation, plus how many were dropped.
#[derive(Clone, Debug, PartialEq)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub skipped: usize,
}

impl<T> Loaded<T> {
    pub fn new(records: Vec<T>) -> Self {
        Self {
            records,
            skipped: 0,
        }
    }
}

impl<T> Default for Loaded<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

pub trait RuleStore {
    fn load_rules(&self) -> Result<Loaded<Rule>, StoreError>;
}

pub trait PolicyStore {
    fn load_policies(&self) -> Result<Loaded<PolicySection>, StoreError>;
}
