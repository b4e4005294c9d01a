//! Listing input: structured fields or free text.

use listguard_domain::sections::parse_sections;
use listguard_types::{AiRequest, FieldName, ListingFields};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    #[error("listing text is empty")]
    Empty,
}

/// Join non-blank fields as `Label: value` blocks separated by blank lines.
pub fn build_listing_text(fields: &ListingFields) -> String {
    fields
        .entries()
        .iter()
        .filter_map(|(field, value)| {
            let value = value.trim();
            (!value.is_empty()).then(|| format!("{}: {}", field.label(), value))
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

#[derive(Clone, Debug)]
pub enum ListingSource {
    Fields(ListingFields),
    /// Used as-is. Labeled lines are still recognized.
    Text(String),
}

impl ListingSource {
    /// The text analyzed by the engine. Rejects blank input.
    pub fn text(&self) -> Result<String, ListingError> {
        let text = match self {
            ListingSource::Fields(fields) => build_listing_text(fields),
            ListingSource::Text(text) => text.clone(),
        };
        if text.trim().is_empty() {
            return Err(ListingError::Empty);
        }
        Ok(text)
    }

    /// Title and description sent to the augmentation service.
    ///
    /// Free text without a `Title:`/`Description:` label is sent whole as the description.
    pub fn ai_request(&self) -> AiRequest {
        match self {
            ListingSource::Fields(fields) => AiRequest {
                title: fields.title.trim().to_string(),
                description: fields.description.trim().to_string(),
            },
            ListingSource::Text(text) => {
                let sections = parse_sections(text);
                let field = |name: FieldName| {
                    sections
                        .iter()
                        .find(|(f, _)| *f == name)
                        .map(|(_, content)| content.clone())
                };
                let title = field(FieldName::Title);
                let description = field(FieldName::Description);
                if title.is_none() && description.is_none() {
                    AiRequest {
                        title: String::new(),
                        description: text.trim().to_string(),
                    }
                } else {
                    AiRequest {
                        title: title.unwrap_or_default(),
                        description: description.unwrap_or_default(),
                    }
                }
            }
        }
    }
}
