//! Explain registry for tiers and issue kinds.
//!
//! Maps tier labels and issue kinds to human-readable explanations with remediation guidance.

use crate::ids;

/// Explanation entry for a tier or issue kind.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short description of the tier/kind.
    pub title: &'static str,
    /// What it means and how it affects the report.
    pub description: &'static str,
    /// How to address issues of this kind.
    pub remediation: &'static str,
    /// Before/after listing examples.
    pub examples: ExamplePair,
}

/// Before and after listing text.
#[derive(Debug, Clone)]
pub struct ExamplePair {
    /// Listing text that would be flagged.
    pub before: &'static str,
    /// Listing text that passes.
    pub after: &'static str,
}

/// Look up an explanation by tier label or issue kind.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier.trim().to_ascii_lowercase().as_str() {
        // Tiers
        ids::TIER_CRITICAL => Some(explain_critical()),
        ids::TIER_HIGH => Some(explain_high()),
        ids::TIER_MEDIUM => Some(explain_medium()),
        ids::TIER_LOW => Some(explain_low()),
        ids::TIER_WARNING => Some(explain_warning()),

        // Issue kinds
        ids::KIND_RULE => Some(explain_rule()),
        ids::KIND_POLICY => Some(explain_policy()),
        ids::KIND_AI => Some(explain_ai()),

        _ => None,
    }
}

/// List all known tier labels, highest first.
pub fn all_tiers() -> &'static [&'static str] {
    &[
        ids::TIER_CRITICAL,
        ids::TIER_HIGH,
        ids::TIER_MEDIUM,
        ids::TIER_LOW,
        ids::TIER_WARNING,
    ]
}

/// List all known issue kinds.
pub fn all_issue_kinds() -> &'static [&'static str] {
    &[ids::KIND_RULE, ids::KIND_POLICY, ids::KIND_AI]
}

// --- Tier explanations ---

fn explain_critical() -> Explanation {
    Explanation {
        title: "Critical Risk",
        description: "\
The listing mentions an item or practice the marketplace prohibits outright.

Each critical group costs 40 points of the compliance score, and any critical or
high group adds a one-time 20 point penalty. Fields containing a critical term are
reported as `fail` in section health.",
        remediation: "\
Remove the item from sale, or remove every mention of the prohibited term from the
title, description and tags. Critical findings are not resolved by rewording.",
        examples: ExamplePair {
            before: "Title: Real ivory carving\n\nDescription: Genuine elephant ivory.",
            after: "Title: Carved resin figurine\n\nDescription: Hand-carved cast resin.",
        },
    }
}

fn explain_high() -> Explanation {
    Explanation {
        title: "High Risk",
        description: "\
The listing very likely violates marketplace policy, for example by implying a
counterfeit or restricted item.

Each high group costs 30 points; the one-time severe penalty of 20 points also
applies. Fields containing a high term are reported as `fail`.",
        remediation: "\
Rewrite the affected fields so the listing describes only what the item is. Avoid
brand names you are not authorized to sell and terms such as `replica`.",
        examples: ExamplePair {
            before: "Title: Designer replica handbag",
            after: "Title: Quilted leather handbag, unbranded",
        },
    }
}

fn explain_medium() -> Explanation {
    Explanation {
        title: "Medium Risk",
        description: "\
The listing contains wording that commonly needs review, such as unsupported health
or safety claims. Each medium group costs 15 points.",
        remediation: "\
Qualify or remove the claim. State facts the buyer can verify.",
        examples: ExamplePair {
            before: "Description: This tea cures anxiety.",
            after: "Description: A calming chamomile blend.",
        },
    }
}

fn explain_low() -> Explanation {
    Explanation {
        title: "Low Risk",
        description: "\
Minor wording that may draw attention from reviewers. Each low group costs 5 points.",
        remediation: "Consider rephrasing when convenient.",
        examples: ExamplePair {
            before: "Title: Best deal ever, guaranteed",
            after: "Title: Handmade oak cutting board",
        },
    }
}

fn explain_warning() -> Explanation {
    Explanation {
        title: "Warning",
        description: "\
Informational finding with the lowest priority. Each warning group costs 2 points.
Records with an unknown risk level are also treated as warnings.",
        remediation: "Review the wording; no change is required.",
        examples: ExamplePair {
            before: "Tags: cheap, free shipping",
            after: "Tags: ceramic, mug, stoneware",
        },
    }
}

// --- Issue kind explanations ---

fn explain_rule() -> Explanation {
    Explanation {
        title: "Prohibited Term Rule",
        description: "\
A rule term was found in the listing text by case-insensitive substring match. Each
sighting is recorded with the surrounding words and sentence; repeated sightings of
the same term are grouped into one issue with an occurrence count.",
        remediation: "Remove or replace the term in every field it appears in.",
        examples: ExamplePair {
            before: "Description: Replica watch. Looks like the real replica.",
            after: "Description: Stainless steel quartz watch.",
        },
    }
}

fn explain_policy() -> Explanation {
    Explanation {
        title: "Policy Section Relevance",
        description: "\
Keywords from a policy section's title and summary were found in the listing. Sections
whose keyword match ratio exceeds 0.3 are listed as matched; a ratio above 0.6 on a
high or critical section is reported as an issue.",
        remediation: "\
Read the matched policy section and make sure the listing complies with it.",
        examples: ExamplePair {
            before: "Description: Hunting knife with concealed blade for self defense.",
            after: "Description: Stainless kitchen paring knife.",
        },
    }
}

fn explain_ai() -> Explanation {
    Explanation {
        title: "AI Augmentation Finding",
        description: "\
An external model reviewed the title and description and flagged terms. A `fail`
verdict maps to high risk and a `warning` verdict to medium risk. When the model
is unavailable the report is produced from rules and policy sections alone.",
        remediation: "\
Treat AI findings as advisory. Review the flagged wording and the model's suggestions.",
        examples: ExamplePair {
            before: "Description: Miracle supplement, doctors hate it.",
            after: "Description: Vitamin D3 supplement, 60 capsules.",
        },
    }
}
