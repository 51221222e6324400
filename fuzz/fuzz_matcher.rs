//! Fuzz target for matcher evaluation.
//!
//! Run with: cargo +nightly fuzz run fuzz_matcher
//!
//! Exercises the matcher with arbitrary input/context strings against a
//! fixed rule store and checks that the reply invariants hold.

#![no_main]

use libfuzzer_sys::fuzz_target;
use pincer_core::{Context, DEFAULT_FALLBACK, Matcher, Rule, RuleStore};
use rand::SeedableRng;
use rand::rngs::StdRng;

fuzz_target!(|data: &[u8]| {
    if data.len() < 3 {
        return;
    }

    // Use the first byte as a split point to divide data into two strings
    let split = (data[0] as usize % (data.len() - 1)).max(1);
    let input = std::str::from_utf8(&data[1..split]).unwrap_or("hello");
    let context = std::str::from_utf8(&data[split..]).unwrap_or("");

    let matcher = Matcher::new(RuleStore::from_rules(vec![
        Rule::new(&["hello", "hi"], &["Hello!", "Hi there!"]),
        Rule::new(&["track"], &["Order number?"]).with_set("awaiting_order_id"),
        Rule::new(&["ord"], &["On its way."]).with_filter("awaiting_order_id"),
    ]));

    // Should never panic regardless of input
    let mut rng = StdRng::seed_from_u64(data[0] as u64);
    let reply = matcher.respond(input, &Context::from(context), &mut rng);

    // The reply must come from a declared response set or be the fallback,
    // and the next context must be a declared context_set value or empty.
    let declared = matcher
        .store()
        .rules()
        .iter()
        .any(|rule| rule.responses.contains(&reply.text));
    assert!(declared || reply.text == DEFAULT_FALLBACK);
    assert!(reply.next_context.is_none() || reply.next_context.as_str() == "awaiting_order_id");
});
