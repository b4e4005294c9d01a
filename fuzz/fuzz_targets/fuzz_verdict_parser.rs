//! Fuzz target for AI service response parsing.
//!
//! Goal: arbitrary response bodies **never panic** the parser.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_verdict_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(body) = std::str::from_utf8(data) {
        let _ = listguard_augment::parse_verdict(body);
    }
});
