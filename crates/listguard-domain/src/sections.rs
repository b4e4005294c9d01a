//! Per-field health for labeled listing text.

use crate::scan::text::normalize;
use listguard_types::{FieldName, Issue, SectionHealth, Status};

/// Characters of a context sentence compared against field content.
const CONTEXT_PREFIX_CHARS: usize = 50;

/// Labeled fields in the order they appear, with their (possibly multi-line) content.
///
/// Unlabeled lines continue the preceding field. A label seen again continues the
/// field it names. Text before the first label is ignored.
pub fn parse_sections(text: &str) -> Vec<(FieldName, String)> {
    let mut fields: Vec<(FieldName, String)> = Vec::new();
    let mut current: Option<usize> = None;

    for line in text.lines() {
        if let Some((field, rest)) = FieldName::strip_label(line) {
            let at = match fields.iter().position(|(f, _)| *f == field) {
                Some(at) => at,
                None => {
                    fields.push((field, String::new()));
                    fields.len() - 1
                }
            };
            append_line(&mut fields[at].1, rest);
            current = Some(at);
        } else if let Some(at) = current {
            append_line(&mut fields[at].1, line.trim());
        }
    }

    fields
}

fn append_line(content: &mut String, line: &str) {
    if line.is_empty() {
        return;
    }
    if !content.is_empty() {
        content.push('\n');
    }
    content.push_str(line);
}

/// Health of each labeled field present in `text`, in canonical field order.
///
/// Unlabeled text yields no entries.
pub fn section_health(text: &str, groups: &[Issue]) -> Vec<SectionHealth> {
    let fields = parse_sections(text);

    FieldName::ALL
        .into_iter()
        .filter_map(|name| {
            let (_, content) = fields.iter().find(|(f, _)| *f == name)?;
            let content = normalize(content);
            let overlapping: Vec<&Issue> = groups
                .iter()
                .filter(|issue| overlaps(issue, &content))
                .collect();

            let status = if overlapping.iter().any(|i| i.risk_level.is_severe()) {
                Status::Fail
            } else if overlapping.is_empty() {
                Status::Pass
            } else {
                Status::Warning
            };

            Some(SectionHealth {
                field_name: name,
                status,
                issue_count: overlapping.len() as u32,
            })
        })
        .collect()
}

/// An issue overlaps a field when its term occurs in the field, or when the start
/// of one of its context sentences does.
fn overlaps(issue: &Issue, content: &str) -> bool {
    let term = normalize(&issue.term);
    if !term.is_empty() && content.contains(&term) {
        return true;
    }

    issue.contexts().any(|ctx| {
        let prefix = context_prefix(&ctx.sentence_or_paragraph);
        !prefix.is_empty() && content.contains(&prefix)
    })
}

fn context_prefix(sentence: &str) -> String {
    let body = FieldName::strip_label(sentence).map_or(sentence, |(_, rest)| rest);
    let prefix: String = normalize(body).chars().take(CONTEXT_PREFIX_CHARS).collect();
    prefix.trim_end().to_string()
}
