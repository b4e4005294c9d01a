//! Deduplication of issues that share a normalized term.

use crate::fingerprint::group_id_for;
use crate::scan::text::normalize;
use listguard_types::{Issue, Occurrence};
use std::collections::BTreeMap;

/// Merge issues by normalized term, keeping first-seen order.
///
/// Every group records all of its sightings in `occurrences`, and
/// `occurrence_count` always equals `occurrences.len()`. The group keeps the
/// highest tier seen; on a tie the earlier description stays. Input issues that
/// are already groups contribute their occurrences as-is, so regrouping a
/// grouped list returns it unchanged.
pub fn group_issues(issues: &[Issue]) -> Vec<Issue> {
    let mut groups: Vec<Issue> = Vec::new();
    let mut by_term: BTreeMap<String, usize> = BTreeMap::new();

    for issue in issues {
        let key = normalize(&issue.term);
        match by_term.get(&key) {
            Some(&at) => merge_into(&mut groups[at], issue),
            None => {
                groups.push(seed(issue, &key));
                by_term.insert(key, groups.len() - 1);
            }
        }
    }

    groups
}

fn seed(issue: &Issue, key: &str) -> Issue {
    let mut group = issue.clone();
    group.occurrences = sightings(issue);
    group.occurrence_count = group.occurrences.len() as u32;
    group.group_id = group_id_for(key);
    group
}

fn merge_into(group: &mut Issue, issue: &Issue) {
    let added = sightings(issue);
    group.occurrence_count += added.len() as u32;
    group.occurrences.extend(added);
    group.is_grouped = true;

    if issue.risk_level > group.risk_level {
        group.risk_level = issue.risk_level;
        group.description = issue.description.clone();
    }
}

fn sightings(issue: &Issue) -> Vec<Occurrence> {
    if issue.occurrences.is_empty() {
        vec![issue.as_occurrence()]
    } else {
        issue.occurrences.clone()
    }
}
