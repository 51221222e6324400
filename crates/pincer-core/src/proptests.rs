//! Property-based tests for the matcher.
//!
//! Verify the lookup invariants hold across generated rule stores, inputs,
//! and contexts. Patterns are generated from lowercase letters so that
//! digit-only inputs are guaranteed non-matching.

use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::context::Context;
use crate::matcher::{DEFAULT_FALLBACK, Matcher};
use crate::rule::Rule;
use crate::store::RuleStore;

// ── Generators ────────────────────────────────────────────────────

fn arb_pattern() -> impl Strategy<Value = String> {
    "[a-z]{2,8}"
}

fn arb_response() -> impl Strategy<Value = String> {
    "[A-Za-z ]{1,30}"
}

fn arb_context_name() -> impl Strategy<Value = String> {
    "[a-z_]{3,12}"
}

fn arb_rule() -> impl Strategy<Value = Rule> {
    (
        prop::collection::vec(arb_pattern(), 1..4),
        prop::collection::vec(arb_response(), 1..4),
        prop::option::of(arb_context_name()),
        prop::option::of(arb_context_name()),
    )
        .prop_map(|(patterns, responses, context_filter, context_set)| Rule {
            patterns,
            responses,
            context_filter,
            context_set,
        })
}

fn arb_store() -> impl Strategy<Value = RuleStore> {
    prop::collection::vec(arb_rule(), 1..8).prop_map(RuleStore::from_rules)
}

fn arb_context() -> impl Strategy<Value = Context> {
    prop::option::of(arb_context_name())
        .prop_map(|value| value.map(Context::from).unwrap_or_else(Context::none))
}

// ── Properties ────────────────────────────────────────────────────

proptest! {
    // Every reply text is a declared response or the fallback, and every
    // next context is a declared context_set value or none.
    #[test]
    fn reply_stays_within_declared_values(
        store in arb_store(),
        input in "[a-z0-9 ]{0,30}",
        context in arb_context(),
        seed in any::<u64>(),
    ) {
        let matcher = Matcher::new(store);
        let mut rng = StdRng::seed_from_u64(seed);
        let reply = matcher.respond(&input, &context, &mut rng);

        let from_rule = matcher
            .store()
            .rules()
            .iter()
            .any(|r| r.responses.contains(&reply.text));
        prop_assert!(from_rule || reply.text == DEFAULT_FALLBACK);

        let known_context = reply.next_context.is_none()
            || matcher
                .store()
                .rules()
                .iter()
                .any(|r| r.context_set.as_deref() == Some(reply.next_context.as_str()));
        prop_assert!(known_context);
    }

    // Inputs without letters cannot contain a letter pattern, so they
    // always fall back and clear the context.
    #[test]
    fn unmatched_input_falls_back_and_clears(
        store in arb_store(),
        input in "[0-9 ]{0,20}",
        context in arb_context(),
        seed in any::<u64>(),
    ) {
        let matcher = Matcher::new(store);
        let mut rng = StdRng::seed_from_u64(seed);
        let reply = matcher.respond(&input, &context, &mut rng);

        prop_assert_eq!(reply.text.as_str(), DEFAULT_FALLBACK);
        prop_assert!(reply.next_context.is_none());
    }

    // A gated rule never fires under a mismatched context, even when its
    // pattern occurs in the input; under the exact context it fires.
    #[test]
    fn gate_requires_exact_context(
        pattern in arb_pattern(),
        response in "[A-Z]{4,12}",
        seed in any::<u64>(),
    ) {
        let rule = Rule::new(&[pattern.as_str()], &[response.as_str()]).with_filter("gate");
        let matcher = Matcher::new(RuleStore::from_rules(vec![rule]));
        let input = format!("please {pattern} now");
        let mut rng = StdRng::seed_from_u64(seed);

        let blocked = matcher.respond(&input, &Context::none(), &mut rng);
        prop_assert_eq!(blocked.text.as_str(), DEFAULT_FALLBACK);

        let allowed = matcher.respond(&input, &Context::from("gate"), &mut rng);
        prop_assert_eq!(allowed.text, response);
    }

    // When two rules match the same input, the earlier one wins.
    #[test]
    fn earlier_rule_wins(
        pattern in arb_pattern(),
        first in "[A-Z]{4,10}",
        second in "[a-z]{4,10}",
        seed in any::<u64>(),
    ) {
        let store = RuleStore::from_rules(vec![
            Rule::new(&[pattern.as_str()], &[first.as_str()]),
            Rule::new(&[pattern.as_str()], &[second.as_str()]),
        ]);
        let matcher = Matcher::new(store);
        let mut rng = StdRng::seed_from_u64(seed);

        let reply = matcher.respond(&pattern, &Context::none(), &mut rng);
        prop_assert_eq!(reply.text, first);
    }

    // Repeated fallback turns keep the context cleared no matter what it
    // was before.
    #[test]
    fn fallback_is_idempotent_on_context(
        store in arb_store(),
        context in arb_context_name(),
        seed in any::<u64>(),
    ) {
        let matcher = Matcher::new(store);
        let mut rng = StdRng::seed_from_u64(seed);

        let first = matcher.respond("12345", &Context::from(context.as_str()), &mut rng);
        prop_assert!(first.next_context.is_none());

        let second = matcher.respond("12345", &first.next_context, &mut rng);
        prop_assert_eq!(second.text.as_str(), DEFAULT_FALLBACK);
        prop_assert!(second.next_context.is_none());
    }

    // A firing rule's context_set becomes the next context verbatim.
    #[test]
    fn context_set_becomes_next_context(
        pattern in arb_pattern(),
        context in arb_context_name(),
        seed in any::<u64>(),
    ) {
        let rule = Rule::new(&[pattern.as_str()], &["ok"]).with_set(&context);
        let matcher = Matcher::new(RuleStore::from_rules(vec![rule]));
        let mut rng = StdRng::seed_from_u64(seed);

        let reply = matcher.respond(&pattern, &Context::none(), &mut rng);
        prop_assert_eq!(reply.next_context.as_str(), context.as_str());
    }
}
