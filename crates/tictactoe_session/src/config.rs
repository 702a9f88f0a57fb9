//! Session configuration.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// How a game session reports progress.
///
/// Loaded from TOML; missing keys take their defaults.
///
/// ```toml
/// verbose = true
/// prompt_next_player = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Present the new state after every accepted move.
    #[serde(default = "default_verbose")]
    verbose: bool,

    /// Prompt the next player after `start` and after each move that does
    /// not end the game.
    #[serde(default)]
    prompt_next_player: bool,
}

fn default_verbose() -> bool {
    true
}

impl SessionConfig {
    /// Creates a configuration.
    pub fn new(verbose: bool, prompt_next_player: bool) -> Self {
        Self {
            verbose,
            prompt_next_player,
        }
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the text is not valid TOML for this type.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or parsed.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref()).map_err(|e| {
            ConfigError::new(format!("Failed to read config file: {}", e))
        })?;

        let config = Self::from_toml_str(&content)?;
        info!(
            verbose = config.verbose,
            prompt_next_player = config.prompt_next_player,
            "Config loaded successfully"
        );
        Ok(config)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new(default_verbose(), false)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert!(*config.verbose());
        assert!(!*config.prompt_next_player());
    }

    #[test]
    fn test_missing_keys_take_defaults() {
        let config = SessionConfig::from_toml_str("prompt_next_player = true").unwrap();
        assert!(*config.verbose());
        assert!(*config.prompt_next_player());

        assert_eq!(SessionConfig::from_toml_str("").unwrap(), SessionConfig::default());
    }

    #[test]
    fn test_parse_error_reports_location() {
        let err = SessionConfig::from_toml_str("verbose = \"loud\"").unwrap_err();
        assert!(err.message.starts_with("Failed to parse config"));
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: "));
    }
}
