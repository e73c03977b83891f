//! Configuration management for notegraph.
//!
//! Configuration is loaded from multiple sources with the following priority:
//! 1. Environment variables (highest priority)
//! 2. An explicit config file passed by the caller
//! 3. Project-local `notegraph.toml` file
//! 4. User config `~/.config/notegraph/config.toml`
//! 5. Built-in defaults (lowest priority)

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

mod defaults;

pub use defaults::*;

use crate::graph::ExportFormat;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Document parsing configuration.
    pub parser: ParserConfig,

    /// Corpus walking configuration.
    pub corpus: CorpusConfig,

    /// Graph export configuration.
    pub export: ExportConfig,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// Searches for config in order:
    /// 1. `./notegraph.toml` (project local)
    /// 2. `~/.config/notegraph/config.toml` (user config)
    /// 3. Falls back to defaults
    pub fn load() -> Result<Self, ConfigError> {
        if Path::new(PROJECT_CONFIG_FILE).exists() {
            return Self::from_file(PROJECT_CONFIG_FILE);
        }

        if let Some(config_dir) = dirs::config_dir() {
            let user_config = config_dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE);
            if user_config.exists() {
                return Self::from_file(&user_config);
            }
        }

        let mut config = Self::default();
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an explicit file, or the default locations.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::load(),
        }
    }

    /// Load configuration from a specific file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text, applying environment overrides.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Apply environment variable overrides.
    fn apply_env_overrides(&mut self) {
        if let Ok(key) = std::env::var("NOTEGRAPH_ALIAS_KEY") {
            self.parser.alias_key = key;
        }
        if let Ok(width) = std::env::var("NOTEGRAPH_TAB_WIDTH") {
            if let Ok(n) = width.parse() {
                self.parser.tab_width = n;
            }
        }
        if let Ok(flag) = std::env::var("NOTEGRAPH_CONTINUE_ON_ERROR") {
            if let Ok(b) = flag.parse() {
                self.corpus.continue_on_error = b;
            }
        }
        if let Ok(format) = std::env::var("NOTEGRAPH_EXPORT_FORMAT") {
            self.export.format = format;
        }
    }

    /// Reject values that would make parsing ambiguous.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.parser.alias_key.trim().is_empty() {
            return Err(ConfigError::Invalid("parser.alias_key must not be empty".into()));
        }
        if self.parser.tab_width == 0 {
            return Err(ConfigError::Invalid("parser.tab_width must be at least 1".into()));
        }
        if self.corpus.namespace_marker.is_empty() {
            return Err(ConfigError::Invalid("corpus.namespace_marker must not be empty".into()));
        }
        self.export.format()?;
        Ok(())
    }

    /// Create a default config file content as a string.
    pub fn default_config_string() -> String {
        let config = Config::default();
        toml::to_string_pretty(&config).unwrap_or_default()
    }
}

/// Document parsing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ParserConfig {
    /// Front matter key holding the aliases.
    pub alias_key: String,

    /// Character separating aliases in the alias field.
    pub alias_delimiter: char,

    /// Columns a tab counts for when measuring list nesting.
    pub tab_width: usize,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            alias_key: DEFAULT_ALIAS_KEY.to_string(),
            alias_delimiter: DEFAULT_ALIAS_DELIMITER,
            tab_width: DEFAULT_TAB_WIDTH,
        }
    }
}

/// Corpus walking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CorpusConfig {
    /// File extensions to parse (without leading dot).
    pub extensions: Vec<String>,

    /// Whether hidden files and directories are walked.
    pub include_hidden: bool,

    /// Whether `.gitignore` rules are honored.
    pub respect_gitignore: bool,

    /// Filename marker replaced by `/` when deriving document identities.
    pub namespace_marker: String,

    /// Keep going after a document fails instead of aborting the run.
    pub continue_on_error: bool,
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            extensions: DEFAULT_EXTENSIONS.iter().map(|s| s.to_string()).collect(),
            include_hidden: false,
            respect_gitignore: true,
            namespace_marker: DEFAULT_NAMESPACE_MARKER.to_string(),
            continue_on_error: true,
        }
    }
}

/// Graph export configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Output format: "dot" or "json".
    pub format: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_EXPORT_FORMAT.to_string(),
        }
    }
}

impl ExportConfig {
    /// Parse the configured format name.
    pub fn format(&self) -> Result<ExportFormat, ConfigError> {
        self.format.parse().map_err(ConfigError::Invalid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.parser.alias_key, DEFAULT_ALIAS_KEY);
        assert_eq!(config.parser.tab_width, DEFAULT_TAB_WIDTH);
        assert_eq!(config.corpus.namespace_marker, DEFAULT_NAMESPACE_MARKER);
        assert!(config.corpus.continue_on_error);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_to_toml() {
        let toml_str = Config::default_config_string();
        assert!(toml_str.contains("[parser]"));
        assert!(toml_str.contains("[corpus]"));
        assert!(toml_str.contains("[export]"));
    }

    #[test]
    fn test_config_from_toml() {
        let toml_str = r#"
[parser]
alias_key = "aliases"
tab_width = 2

[corpus]
extensions = ["md", "markdown"]
include_hidden = true

[export]
format = "json"
"#;
        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.parser.alias_key, "aliases");
        assert_eq!(config.parser.tab_width, 2);
        assert_eq!(config.parser.alias_delimiter, DEFAULT_ALIAS_DELIMITER);
        assert_eq!(config.corpus.extensions, vec!["md", "markdown"]);
        assert!(config.corpus.include_hidden);
        assert_eq!(config.export.format().unwrap(), ExportFormat::Json);
    }

    #[test]
    fn test_validate_rejects_zero_tab_width() {
        let mut config = Config::default();
        config.parser.tab_width = 0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut config = Config::default();
        config.export.format = "graphml".to_string();
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
