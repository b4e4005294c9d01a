use crate::{Loaded, PolicyStore, RuleStore, StoreError};
use listguard_types::{PolicySection, Rule};

/// Rules and policy sections held in memory. Used for tests and for runs without
/// a store file.
#[derive(Clone, Debug, Default)]
pub struct InMemoryStore {
    pub rules: Vec<Rule>,
    pub policies: Vec<PolicySection>,
}

impl InMemoryStore {
    pub fn new(rules: Vec<Rule>, policies: Vec<PolicySection>) -> Self {
        Self { rules, policies }
    }
}

impl RuleStore for InMemoryStore {
    fn load_rules(&self) -> Result<Loaded<Rule>, StoreError> {
        Ok(Loaded::new(self.rules.clone()))
    }
}

impl PolicyStore for InMemoryStore {
    fn load_policies(&self) -> Result<Loaded<PolicySection>, StoreError> {
        Ok(Loaded::new(self.policies.clone()))
    }
}
