//! Per-conversation state: the current context and the response rng.

use std::sync::Arc;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::context::Context;
use crate::matcher::Matcher;

/// One user's conversation against a shared matcher.
///
/// Owns the single context slot and the rng used for response selection.
/// The matcher is immutable and shared, so any number of sessions can run
/// against it concurrently.
pub struct Session {
    matcher: Arc<Matcher>,
    context: Context,
    rng: StdRng,
}

impl Session {
    /// Start a session with OS-seeded randomness.
    pub fn new(matcher: Arc<Matcher>) -> Self {
        Self {
            matcher,
            context: Context::none(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Start a session with a fixed seed for reproducible response choice.
    pub fn with_seed(matcher: Arc<Matcher>, seed: u64) -> Self {
        Self {
            matcher,
            context: Context::none(),
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Run one turn: produce the reply text and carry its context forward.
    pub fn turn(&mut self, input: &str) -> String {
        let reply = self.matcher.respond(input, &self.context, &mut self.rng);
        self.context = reply.next_context;
        reply.text
    }

    /// Produce the farewell reply for the final turn of a conversation.
    ///
    /// Matches the literal input "bye" under the current context. The
    /// resulting context is discarded because the session is over.
    pub fn farewell(&mut self) -> String {
        self.matcher.respond("bye", &self.context, &mut self.rng).text
    }

    /// The context currently carried by this session.
    pub fn context(&self) -> &Context {
        &self.context
    }

    /// The matcher this session runs against.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }
}
