//! Ordered rule store and its JSON loader.
//!
//! Rule documents are JSON objects with a top-level `rules` array. The
//! store preserves document order because order is match precedence. Two
//! loading surfaces exist: the strict [`RuleStore::load`] / [`RuleStore::parse`]
//! for tooling, and [`RuleStore::load_or_empty`] for the chat startup path,
//! which degrades any failure to an empty store that callers treat as
//! do-not-start.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{error, info};

use crate::rule::{Rule, RuleError};

/// Errors raised while loading a rule document.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read rules file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse rules JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid rule document: {0}")]
    Invalid(#[from] RuleError),
}

/// The shape of a rule document on disk.
#[derive(Debug, Serialize, Deserialize)]
struct RuleDoc {
    rules: Vec<Rule>,
}

/// An ordered, immutable set of rules.
///
/// Read-only for the lifetime of a conversation; the matcher scans it
/// front to back on every turn.
#[derive(Debug, Clone, Default)]
pub struct RuleStore {
    rules: Vec<Rule>,
}

impl RuleStore {
    /// An empty store. The chat loop refuses to start on one.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a store from rules already in memory, keeping their order.
    pub fn from_rules(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Parse a rule document from a JSON string and validate rule shapes.
    pub fn parse(s: &str) -> Result<Self, StoreError> {
        let doc: RuleDoc = serde_json::from_str(s)?;
        let store = Self { rules: doc.rules };
        store.validate()?;
        Ok(store)
    }

    /// Load a rule document from the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, StoreError> {
        let content = tokio::fs::read_to_string(path).await?;
        let store = Self::parse(&content)?;
        info!(path = %path.display(), rules = store.len(), "loaded rule document");
        Ok(store)
    }

    /// Load a rule document, degrading to an empty store on any failure.
    ///
    /// The underlying error is logged. Callers must treat an empty store as
    /// fatal for starting a conversation.
    pub async fn load_or_empty(path: &Path) -> Self {
        match Self::load(path).await {
            Ok(store) => store,
            Err(err) => {
                error!(path = %path.display(), error = %err, "failed to load rules, using empty store");
                Self::empty()
            }
        }
    }

    /// Validate every rule's shape against the store's contract.
    pub fn validate(&self) -> Result<(), RuleError> {
        for (index, rule) in self.rules.iter().enumerate() {
            rule.validate(index)?;
        }
        Ok(())
    }

    /// The rules in precedence order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Number of rules in the store.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the store holds no rules.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    const VALID_DOC: &str = r#"{
        "rules": [
            {
                "patterns": ["hours", "open"],
                "responses": ["We open 9-5"]
            },
            {
                "patterns": ["track"],
                "responses": ["What's your order number?"],
                "context_set": "awaiting_order_id"
            },
            {
                "patterns": ["ord"],
                "responses": ["On its way."],
                "context_filter": "awaiting_order_id"
            }
        ]
    }"#;

    #[test]
    fn test_parse_preserves_order() {
        let store = RuleStore::parse(VALID_DOC).unwrap();
        assert_eq!(store.len(), 3);
        assert_eq!(store.rules()[0].patterns[0], "hours");
        assert_eq!(store.rules()[1].context_set.as_deref(), Some("awaiting_order_id"));
        assert_eq!(store.rules()[2].context_filter.as_deref(), Some("awaiting_order_id"));
    }

    #[test]
    fn test_parse_ignores_unknown_fields() {
        let doc = r#"{
            "rules": [
                {"patterns": ["hi"], "responses": ["hello"], "note": "extra"}
            ],
            "version": 2
        }"#;
        let store = RuleStore::parse(doc).unwrap();
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_parse_rejects_missing_rules_key() {
        let result = RuleStore::parse(r#"{"other": []}"#);
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_invalid_json() {
        let result = RuleStore::parse("not json {{{");
        assert!(matches!(result, Err(StoreError::Parse(_))));
    }

    #[test]
    fn test_parse_rejects_rule_without_responses() {
        let doc = r#"{
            "rules": [
                {"patterns": ["hi"], "responses": ["hello"]},
                {"patterns": ["bye"], "responses": []}
            ]
        }"#;
        let err = RuleStore::parse(doc).unwrap_err();
        assert_eq!(err.to_string(), "invalid rule document: rule 1 has no responses");
    }

    #[test]
    fn test_parse_accepts_empty_rules_list() {
        let store = RuleStore::parse(r#"{"rules": []}"#).unwrap();
        assert!(store.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_from_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.json");
        tokio::fs::write(&path, VALID_DOC).await.unwrap();

        let store = RuleStore::load(&path).await.unwrap();
        assert_eq!(store.len(), 3);
    }

    #[test_log::test(tokio::test)]
    async fn test_load_nonexistent_file() {
        let result = RuleStore::load(Path::new("/nonexistent/rules.json")).await;
        assert!(matches!(result, Err(StoreError::Io(_))));
    }

    #[test_log::test(tokio::test)]
    async fn test_load_or_empty_on_missing_file() {
        let store = RuleStore::load_or_empty(Path::new("/nonexistent/rules.json")).await;
        assert!(store.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_or_empty_on_malformed_json() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.json");
        tokio::fs::write(&path, "{ broken").await.unwrap();

        let store = RuleStore::load_or_empty(&path).await;
        assert!(store.is_empty());
    }

    #[test_log::test(tokio::test)]
    async fn test_load_or_empty_on_invalid_rule() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("rules.json");
        tokio::fs::write(&path, r#"{"rules": [{"patterns": [], "responses": ["x"]}]}"#)
            .await
            .unwrap();

        let store = RuleStore::load_or_empty(&path).await;
        assert!(store.is_empty());
    }
}
