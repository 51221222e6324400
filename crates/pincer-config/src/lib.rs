#![deny(unsafe_code)]

//! Configuration loading and validation for Pincer.
//!
//! Loads TOML configuration files and validates them against expected
//! schemas. Provides the [`AppConfig`] type as the central configuration
//! structure: where the rule document lives, how the chat presents itself,
//! and the default log level.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Errors that can occur during configuration loading and validation.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

/// Top-level application configuration.
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Rule document configuration.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Chat presentation configuration.
    #[serde(default)]
    pub chat: ChatConfig,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the rule document is loaded from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Path to the JSON rule document.
    #[serde(default = "default_rules_file")]
    pub file: PathBuf,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            file: default_rules_file(),
        }
    }
}

fn default_rules_file() -> PathBuf {
    PathBuf::from("data/rules.json")
}

/// How the chat loop presents itself to the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Prompt written before each user input.
    #[serde(default = "default_prompt")]
    pub prompt: String,

    /// Prefix written before each reply.
    #[serde(default = "default_reply_prefix")]
    pub reply_prefix: String,

    /// Reply used when no rule matches. Absent means the engine's
    /// built-in fallback message is kept.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fallback: Option<String>,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            prompt: default_prompt(),
            reply_prefix: default_reply_prefix(),
            fallback: None,
        }
    }
}

fn default_prompt() -> String {
    "You: ".to_string()
}

fn default_reply_prefix() -> String {
    "Bot: ".to_string()
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g. "info", "debug", "trace").
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl AppConfig {
    /// Load configuration from a TOML file at the given path using async I/O.
    pub async fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = tokio::fs::read_to_string(path).await?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), rules_file = %config.rules.file.display(), "loaded configuration");
        Ok(config)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(s: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rules.file.as_os_str().is_empty() {
            return Err(ConfigError::Validation(
                "rules.file must not be empty".to_string(),
            ));
        }
        if let Some(fallback) = &self.chat.fallback
            && fallback.is_empty()
        {
            return Err(ConfigError::Validation(
                "chat.fallback must not be empty when set".to_string(),
            ));
        }
        if self.logging.level.is_empty() {
            return Err(ConfigError::Validation(
                "logging.level must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
