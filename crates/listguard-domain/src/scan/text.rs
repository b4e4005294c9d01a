//! Text primitives: normalization, case folding with offset mapping, tokenizing
//! and context extraction.

use listguard_types::Context;

/// Lower-cased, trimmed form used for containment tests and grouping keys.
pub fn normalize(text: &str) -> String {
    fold_case(text.trim())
}

/// Per-char lower-casing, the same fold [`FoldedText`] applies.
///
/// `str::to_lowercase` maps a word-final `Σ` to `ς`, which would never match the
/// per-char fold of the same text.
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// Lower-cased view of a text that remembers where each byte came from.
///
/// Lower-casing can change byte lengths, so match offsets in the folded text are
/// mapped back through `origin` to byte offsets in the original.
pub struct FoldedText<'a> {
    original: &'a str,
    folded: String,
    origin: Vec<usize>,
}

impl<'a> FoldedText<'a> {
    pub fn new(original: &'a str) -> Self {
        let mut folded = String::with_capacity(original.len());
        let mut origin = Vec::with_capacity(original.len() + 1);
        for (offset, ch) in original.char_indices() {
            let before = folded.len();
            folded.extend(ch.to_lowercase());
            origin.resize(origin.len() + (folded.len() - before), offset);
        }
        origin.push(original.len());
        Self {
            original,
            folded,
            origin,
        }
    }

    /// Non-overlapping matches of an already-normalized needle, left to right, as
    /// byte spans into the original text.
    pub fn find_all(&self, needle: &str) -> Vec<(usize, usize)> {
        if needle.is_empty() {
            return Vec::new();
        }
        self.folded
            .match_indices(needle)
            .map(|(at, m)| {
                let start = self.origin[at];
                let mut end = self.origin[at + m.len()];
                if end <= start {
                    // Match ended inside a multi-char lowercase expansion.
                    end = start
                        + self.original[start..]
                            .chars()
                            .next()
                            .map_or(0, char::len_utf8);
                }
                (start, end)
            })
            .collect()
    }

    pub fn contains(&self, needle: &str) -> bool {
        !needle.is_empty() && self.folded.contains(needle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub start: usize,
    pub end: usize,
}

/// Whitespace-delimited tokens with their byte spans.
pub fn tokenize(text: &str) -> Vec<Token<'_>> {
    let mut tokens = Vec::new();
    let mut start: Option<usize> = None;
    for (i, ch) in text.char_indices() {
        if ch.is_whitespace() {
            if let Some(s) = start.take() {
                tokens.push(Token {
                    text: &text[s..i],
                    start: s,
                    end: i,
                });
            }
        } else if start.is_none() {
            start = Some(i);
        }
    }
    if let Some(s) = start {
        tokens.push(Token {
            text: &text[s..],
            start: s,
            end: text.len(),
        });
    }
    tokens
}

/// Indices of the first and last token covering `[start, end)`.
///
/// `None` when either end of the span sits outside every token (on whitespace).
pub fn token_span(tokens: &[Token<'_>], start: usize, end: usize) -> Option<(usize, usize)> {
    let first = tokens
        .iter()
        .position(|t| t.start <= start && start < t.end)?;
    let last = tokens[first..]
        .iter()
        .position(|t| t.start < end && end <= t.end)?;
    Some((first, first + last))
}

/// Context around a match: token window when a token boundary covers it, otherwise
/// a fixed character window.
pub fn extract_context(
    text: &str,
    tokens: &[Token<'_>],
    start: usize,
    end: usize,
    context_tokens: usize,
    char_window: usize,
) -> Context {
    match token_span(tokens, start, end) {
        Some(span) => token_window(text, tokens, span, start, end, context_tokens),
        None => char_window_context(text, start, end, char_window),
    }
}

/// Up to `n` whole tokens before and after the covering tokens.
pub fn token_window(
    text: &str,
    tokens: &[Token<'_>],
    (first, last): (usize, usize),
    start: usize,
    end: usize,
    n: usize,
) -> Context {
    let before_from = tokens[first.saturating_sub(n)].start;
    let after_to = tokens[(last + n).min(tokens.len() - 1)].end;
    Context {
        snippet_before: collapse_whitespace(&text[before_from..start]),
        term: text[start..end].to_string(),
        snippet_after: collapse_whitespace(&text[end..after_to]),
        position: char_offset(text, start),
        sentence_or_paragraph: enclosing_sentence(text, start, end).to_string(),
    }
}

/// `window` characters on each side of the raw match.
pub fn char_window_context(text: &str, start: usize, end: usize, window: usize) -> Context {
    let head = &text[..start];
    let skip = head.chars().count().saturating_sub(window);
    let before: String = head.chars().skip(skip).collect();
    let after: String = text[end..].chars().take(window).collect();
    Context {
        snippet_before: collapse_whitespace(&before),
        term: text[start..end].to_string(),
        snippet_after: collapse_whitespace(&after),
        position: char_offset(text, start),
        sentence_or_paragraph: enclosing_sentence(text, start, end).to_string(),
    }
}

/// The sentence containing `[start, end)`, or its paragraph when the sentence is empty.
///
/// Paragraphs are separated by blank lines. Sentences end at a line break or at
/// `.`, `!`, `?` followed by whitespace or end of text.
pub fn enclosing_sentence(text: &str, start: usize, end: usize) -> &str {
    let para_start = text[..start].rfind("\n\n").map_or(0, |i| i + 2);
    let para_end = text[end..].find("\n\n").map_or(text.len(), |i| end + i);

    let mut sent_start = para_start;
    for (i, ch) in text[para_start..start].char_indices() {
        let at = para_start + i;
        if is_sentence_break(text, at, ch) {
            sent_start = at + ch.len_utf8();
        }
    }

    let mut sent_end = para_end;
    for (i, ch) in text[end..para_end].char_indices() {
        let at = end + i;
        if is_sentence_break(text, at, ch) {
            sent_end = if ch == '\n' { at } else { at + ch.len_utf8() };
            break;
        }
    }

    let sentence = text[sent_start..sent_end].trim();
    if sentence.is_empty() {
        text[para_start..para_end].trim()
    } else {
        sentence
    }
}

fn is_sentence_break(text: &str, at: usize, ch: char) -> bool {
    match ch {
        '\n' => true,
        '.' | '!' | '?' => text[at + ch.len_utf8()..]
            .chars()
            .next()
            .is_none_or(char::is_whitespace),
        _ => false,
    }
}

pub fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn char_offset(text: &str, byte: usize) -> usize {
    text[..byte].chars().count()
}
