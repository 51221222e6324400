//! Fuzz target for the JSON rule-document parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_rules_parser
//!
//! This exercises `RuleStore::parse()` with arbitrary byte sequences to find
//! panics, hangs, or memory issues in the JSON parsing and rule validation
//! pipeline.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Try to parse arbitrary bytes as a rule document
    if let Ok(s) = std::str::from_utf8(data) {
        // We don't care about the result — just that it doesn't panic
        let _ = pincer_core::RuleStore::parse(s);
    }
});
