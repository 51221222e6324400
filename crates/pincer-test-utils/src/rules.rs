//! Rule fixtures for tests.
//!
//! The sample store covers every rule shape the matcher distinguishes: plain
//! lookups, a context-setting rule, a context-gated rule, and a farewell, so
//! one fixture can drive lookup, context, and conversation-loop tests alike.

use std::path::PathBuf;

use pincer_core::{Rule, RuleStore};
use tempfile::TempDir;

/// The rules backing [`sample_store`], in precedence order.
pub fn sample_rules() -> Vec<Rule> {
    vec![
        Rule::new(&["hello", "hi"], &["Hello! How can I help you today?"]),
        Rule::new(&["hours", "open"], &["We're open 9am-5pm, Monday to Friday."]),
        Rule::new(&["track"], &["Sure, what's your order number?"]).with_set("awaiting_order_id"),
        Rule::new(&["ord"], &["Thanks! Your order is on its way."])
            .with_filter("awaiting_order_id"),
        Rule::new(&["bye"], &["Goodbye! Have a great day."]),
    ]
}

/// Canonical rule store used across workspace tests.
pub fn sample_store() -> RuleStore {
    RuleStore::from_rules(sample_rules())
}

/// A JSON rule document equivalent to [`sample_rules`].
pub fn sample_doc_json() -> String {
    serde_json::json!({ "rules": sample_rules() }).to_string()
}

/// A test-scoped rule document on disk, backed by an owned temp directory.
///
/// The temp directory is deleted automatically when this value is dropped,
/// guaranteeing cleanup even on panic.
pub struct TestRulesFile {
    pub path: PathBuf,
    _temp_dir: TempDir,
}

impl TestRulesFile {
    /// Write the given JSON document to a temporary `rules.json`.
    pub async fn with_json(content: &str) -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp dir");
        let path = temp_dir.path().join("rules.json");
        tokio::fs::write(&path, content)
            .await
            .expect("failed to write test rules");

        Self {
            path,
            _temp_dir: temp_dir,
        }
    }

    /// Write the sample rule document to a temporary `rules.json`.
    pub async fn sample() -> Self {
        Self::with_json(&sample_doc_json()).await
    }
}
