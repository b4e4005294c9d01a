//! Fuzz target for context extraction around arbitrary byte spans.
//!
//! Goal: extraction **never panics** for any text and any span on char boundaries,
//! and the reported term is exactly the spanned text.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_context_extraction
//! ```

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use listguard_domain::scan::text::{extract_context, tokenize};

#[derive(Debug, Arbitrary)]
struct Input {
    text: String,
    start: u16,
    len: u8,
    context_tokens: u8,
    char_window: u8,
}

fn floor_boundary(text: &str, mut at: usize) -> usize {
    at = at.min(text.len());
    while !text.is_char_boundary(at) {
        at -= 1;
    }
    at
}

fuzz_target!(|input: Input| {
    let text = input.text.as_str();
    if text.is_empty() {
        return;
    }
    let start = floor_boundary(text, usize::from(input.start));
    let end = floor_boundary(text, start + usize::from(input.len).max(1));
    if end <= start {
        return;
    }

    let tokens = tokenize(text);
    let ctx = extract_context(
        text,
        &tokens,
        start,
        end,
        usize::from(input.context_tokens),
        usize::from(input.char_window),
    );
    assert_eq!(ctx.term, &text[start..end]);
    assert_eq!(ctx.position, text[..start].chars().count());
});
