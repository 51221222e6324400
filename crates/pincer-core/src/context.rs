//! One-slot conversational context.
//!
//! The context is the entire memory a conversation carries between turns: a
//! single string, replaced wholesale on every turn. The empty string means
//! no context is active, so every conversation starts from [`Context::none`].

use std::fmt;

/// The context value carried between conversation turns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context(String);

impl Context {
    /// The no-context value a conversation starts in.
    pub fn none() -> Self {
        Self(String::new())
    }

    /// Whether no context is active.
    pub fn is_none(&self) -> bool {
        self.0.is_empty()
    }

    /// The raw context value; empty when no context is active.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Context {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for Context {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
