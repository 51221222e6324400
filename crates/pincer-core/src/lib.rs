#![deny(unsafe_code)]

//! Pincer core — rule lookup engine for a text-based support agent.
//!
//! Provides the matching pipeline: an ordered [`RuleStore`] loaded from a
//! JSON document, a [`Matcher`] that scans it first-match-wins for each user
//! input, and the one-slot [`Context`] a conversation carries between turns.
//! The matching core is pure and synchronous; only the store loader touches
//! the filesystem.

/// One-slot conversational context carried between turns.
pub mod context;
/// First-match rule scanning and response selection.
pub mod matcher;
/// Rule data model and shape validation.
pub mod rule;
/// Per-conversation state: context plus response randomness.
pub mod session;
/// Ordered rule store and its JSON loader.
pub mod store;

pub use context::Context;
pub use matcher::{DEFAULT_FALLBACK, Matcher, Reply};
pub use rule::{Rule, RuleError};
pub use session::Session;
pub use store::{RuleStore, StoreError};

#[cfg(test)]
mod proptests;
