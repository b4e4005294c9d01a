use crate::ids;
use crate::report::Tier;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A single prohibited term with its severity and rationale.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Rule {
    pub term: String,
    #[serde(default, alias = "risk_level")]
    pub risk_level: Tier,
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub category: String,
}

impl Rule {
    pub fn new(term: &str, risk_level: Tier, reason: &str, category: &str) -> Self {
        Self {
            term: term.to_string(),
            risk_level,
            reason: reason.to_string(),
            category: category.to_string(),
        }
    }
}

/// A summarized policy passage, scored for relevance rather than exact-matched.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PolicySection {
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub category: String,
    #[serde(default, alias = "risk_level")]
    pub risk_level: Tier,
}

/// Structured listing input. Blank fields are omitted from the labeled text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ListingFields {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub price: String,
}

impl ListingFields {
    /// Field values in label order.
    pub fn entries(&self) -> [(FieldName, &str); 5] {
        [
            (FieldName::Title, self.title.as_str()),
            (FieldName::Description, self.description.as_str()),
            (FieldName::Tags, self.tags.as_str()),
            (FieldName::Category, self.category.as_str()),
            (FieldName::Price, self.price.as_str()),
        ]
    }

    pub fn is_blank(&self) -> bool {
        self.entries().iter().all(|(_, v)| v.trim().is_empty())
    }
}

/// Structural listing field.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Title,
    Description,
    Tags,
    Category,
    Price,
}

impl FieldName {
    pub const ALL: [FieldName; 5] = [
        FieldName::Title,
        FieldName::Description,
        FieldName::Tags,
        FieldName::Category,
        FieldName::Price,
    ];

    /// Label used as the line prefix in labeled listing text (without the colon).
    pub fn label(self) -> &'static str {
        match self {
            FieldName::Title => ids::LABEL_TITLE,
            FieldName::Description => ids::LABEL_DESCRIPTION,
            FieldName::Tags => ids::LABEL_TAGS,
            FieldName::Category => ids::LABEL_CATEGORY,
            FieldName::Price => ids::LABEL_PRICE,
        }
    }

    /// Matches a line against `Label:` and returns the field plus the remaining content.
    pub fn strip_label(line: &str) -> Option<(FieldName, &str)> {
        let trimmed = line.trim_start();
        FieldName::ALL.into_iter().find_map(|field| {
            trimmed
                .strip_prefix(field.label())
                .and_then(|rest| rest.strip_prefix(':'))
                .map(|rest| (field, rest.trim()))
        })
    }
}
