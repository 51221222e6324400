//! Rule data model — the unit of the knowledge base.
//!
//! A [`Rule`] pairs trigger patterns with candidate responses, optionally
//! gated on the conversation context and optionally establishing a new
//! context when it fires. Rules are matched in store order, so their
//! position is part of their meaning.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Errors raised by rule shape validation.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("rule {index} has no patterns")]
    NoPatterns { index: usize },

    #[error("rule {index} has no responses")]
    NoResponses { index: usize },
}

/// A single lookup rule.
///
/// `patterns` and `responses` are ordered: the first matching pattern ends
/// the scan, and response order makes seeded selection reproducible.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Rule {
    /// Case-insensitive substrings that trigger this rule.
    pub patterns: Vec<String>,

    /// Candidate replies; one is chosen uniformly at random on fire.
    pub responses: Vec<String>,

    /// When set, the rule is eligible only while the conversation context
    /// equals this value exactly.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_filter: Option<String>,

    /// Context established for the next turn when this rule fires.
    /// Absent means the next context is cleared.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context_set: Option<String>,
}

impl Rule {
    /// Create a rule with no context behavior.
    pub fn new(patterns: &[&str], responses: &[&str]) -> Self {
        Self {
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            responses: responses.iter().map(|r| r.to_string()).collect(),
            context_filter: None,
            context_set: None,
        }
    }

    /// Gate the rule on an exact context value.
    pub fn with_filter(mut self, context: &str) -> Self {
        self.context_filter = Some(context.to_string());
        self
    }

    /// Establish a context for the following turn when the rule fires.
    pub fn with_set(mut self, context: &str) -> Self {
        self.context_set = Some(context.to_string());
        self
    }

    /// Validate the rule's shape. `index` is its position in the store and
    /// is carried into the error for reporting.
    pub fn validate(&self, index: usize) -> Result<(), RuleError> {
        if self.patterns.is_empty() {
            return Err(RuleError::NoPatterns { index });
        }
        if self.responses.is_empty() {
            return Err(RuleError::NoResponses { index });
        }
        if self.patterns.iter().any(|p| p.is_empty()) {
            warn!(rule = index, "empty pattern matches every input");
        }
        Ok(())
    }

    /// Whether this rule fires for the given lowercased input under the
    /// given context value.
    pub(crate) fn fires(&self, input_lower: &str, context: &str) -> bool {
        if let Some(filter) = &self.context_filter
            && filter != context
        {
            return false;
        }
        self.patterns
            .iter()
            .any(|pattern| input_lower.contains(&pattern.to_lowercase()))
    }
}
