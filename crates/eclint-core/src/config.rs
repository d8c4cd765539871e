//! Tool configuration for eclint.
//!
//! Style settings live in `.editorconfig`; this file only controls how the
//! checker runs (which paths to skip, which rules to run, how much to show).

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Prefix marking settings that override their un-prefixed counterparts.
pub const DEFAULT_OVERRIDE_PREFIX: &str = "eclint_";

/// Top-level configuration for eclint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Glob patterns to exclude from checking.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Findings rendered per file before the rest is summarized.
    #[serde(default)]
    pub show_error_quantity: Option<usize>,

    /// Prefix for overriding `.editorconfig` settings (default: `eclint_`).
    /// An empty string disables overrides.
    #[serde(default)]
    pub override_prefix: Option<String>,

    /// Per-rule configurations, keyed by rule name or code.
    #[serde(default)]
    pub rules: HashMap<String, RuleConfig>,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Checks if a rule is enabled, looking it up by name and by code.
    #[must_use]
    pub fn is_rule_enabled(&self, name: &str, code: &str) -> bool {
        [name, code]
            .iter()
            .filter_map(|key| self.rules.get(*key))
            .all(|c| c.enabled.unwrap_or(true))
    }

    /// The effective override prefix.
    #[must_use]
    pub fn override_prefix(&self) -> &str {
        self.override_prefix
            .as_deref()
            .unwrap_or(DEFAULT_OVERRIDE_PREFIX)
    }
}

/// Per-rule configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Whether this rule is enabled.
    #[serde(default)]
    pub enabled: Option<bool>,
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading config file.
    #[error("Failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in config file.
    #[error("Failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.exclude.is_empty());
        assert!(config.rules.is_empty());
        assert_eq!(config.override_prefix(), DEFAULT_OVERRIDE_PREFIX);
        assert!(config.is_rule_enabled("indent-style", "EC003"));
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
exclude = ["vendor/**", "*.min.js"]
show_error_quantity = 3
override_prefix = ""

[rules.max-line-length]
enabled = false

[rules.EC002]
enabled = false

[rules.indent-style]
enabled = true
"#;

        let config = Config::parse(toml).expect("Failed to parse");
        assert_eq!(config.exclude, vec!["vendor/**", "*.min.js"]);
        assert_eq!(config.show_error_quantity, Some(3));
        assert_eq!(config.override_prefix(), "");
        assert!(!config.is_rule_enabled("max-line-length", "EC005"));
        assert!(!config.is_rule_enabled("trim-trailing-whitespace", "EC002"));
        assert!(config.is_rule_enabled("indent-style", "EC003"));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Config::parse("excludes = []").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = Config::from_file(Path::new("/nonexistent/eclint.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/eclint.toml"));
    }
}
