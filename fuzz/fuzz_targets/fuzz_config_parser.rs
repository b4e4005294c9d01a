//! Fuzz target for `listguard.toml` parsing and resolution.
//!
//! Goal: parsing and resolving **never panic**. Errors are fine.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_config_parser
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;
use listguard_settings::{Overrides, parse_config_toml, resolve_config};

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data)
        && let Ok(cfg) = parse_config_toml(text)
        && let Ok(resolved) = resolve_config(cfg, Overrides::default())
    {
        let relevance = &resolved.effective.relevance;
        assert!(relevance.flag_threshold >= relevance.match_threshold);
    }
});
