//! First-match rule scanning and response selection.
//!
//! The [`Matcher`] owns an ordered [`RuleStore`] and a fallback reply for
//! the lifetime of a conversation. Each [`Matcher::respond`] call is a
//! single pass over the store: the first rule whose context gate passes and
//! whose pattern occurs in the lowercased input fires. Rule choice is never
//! randomized, only the reply text drawn from the firing rule's responses.

use rand::Rng;
use rand::seq::SliceRandom;
use tracing::debug;

use crate::context::Context;
use crate::store::RuleStore;

/// Reply used when no rule fires.
pub const DEFAULT_FALLBACK: &str = "I'm sorry, I don't quite understand that. \
     Could you please rephrase or ask about hours, shipping, or payment?";

/// The outcome of one conversation turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    /// The text to show the user.
    pub text: String,

    /// Context the conversation carries into the next turn.
    pub next_context: Context,
}

/// A matcher bound to one rule store.
///
/// Holds no mutable state, so it can be shared behind an `Arc` by any number
/// of concurrent conversations; each call supplies its own context and rng.
#[derive(Debug, Clone)]
pub struct Matcher {
    store: RuleStore,
    fallback: String,
}

impl Matcher {
    /// Create a matcher over the given store with the default fallback.
    pub fn new(store: RuleStore) -> Self {
        Self {
            store,
            fallback: DEFAULT_FALLBACK.to_string(),
        }
    }

    /// Replace the fallback reply.
    pub fn with_fallback(mut self, fallback: &str) -> Self {
        self.fallback = fallback.to_string();
        self
    }

    /// The rule store this matcher scans.
    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Produce the reply for one turn.
    ///
    /// Scans rules in store order and fires the first whose
    /// `context_filter` (if any) equals `context` and whose pattern occurs
    /// in the lowercased input. On fire the reply is drawn uniformly from
    /// the rule's responses and the next context is its `context_set`
    /// (cleared when absent). When nothing fires the fallback is returned
    /// and the context is cleared unconditionally.
    pub fn respond<R: Rng + ?Sized>(&self, input: &str, context: &Context, rng: &mut R) -> Reply {
        let input = input.to_lowercase();

        for (index, rule) in self.store.rules().iter().enumerate() {
            if !rule.fires(&input, context.as_str()) {
                continue;
            }
            debug!(rule = index, "rule fired");
            let text = rule
                .responses
                .choose(rng)
                .cloned()
                .unwrap_or_else(|| self.fallback.clone());
            let next_context = rule
                .context_set
                .as_deref()
                .map(Context::from)
                .unwrap_or_else(Context::none);
            return Reply { text, next_context };
        }

        debug!("no rule fired, replying with fallback");
        Reply {
            text: self.fallback.clone(),
            next_context: Context::none(),
        }
    }
}
