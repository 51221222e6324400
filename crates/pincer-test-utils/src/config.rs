//! Configuration builders for tests.
//!
//! Use [`TestConfigBuilder`] to create customised [`AppConfig`] values
//! without repeating boilerplate across crate boundaries.

use std::path::PathBuf;

use pincer_config::AppConfig;

/// Fluent builder for [`AppConfig`] in tests.
///
/// # Example
///
/// ```ignore
/// let config = TestConfigBuilder::new()
///     .rules_file("kb/rules.json")
///     .prompt("> ")
///     .build();
/// ```
pub struct TestConfigBuilder {
    config: AppConfig,
}

impl TestConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: AppConfig::default(),
        }
    }

    pub fn rules_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.rules.file = path.into();
        self
    }

    pub fn prompt(mut self, prompt: &str) -> Self {
        self.config.chat.prompt = prompt.to_string();
        self
    }

    pub fn reply_prefix(mut self, prefix: &str) -> Self {
        self.config.chat.reply_prefix = prefix.to_string();
        self
    }

    pub fn fallback(mut self, fallback: &str) -> Self {
        self.config.chat.fallback = Some(fallback.to_string());
        self
    }

    pub fn log_level(mut self, level: &str) -> Self {
        self.config.logging.level = level.to_string();
        self
    }

    pub fn build(self) -> AppConfig {
        self.config
    }
}

impl Default for TestConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
