use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::types::Config;

/// Environment variable holding the NewsAPI key.
pub const API_KEY_ENV: &str = "NEWS_API_KEY";

/// Errors that can occur when loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Config validation failed: {message}")]
    ValidationError { message: String },
}

impl Config {
    /// Returns the path to the configuration file.
    ///
    /// Uses `~/.config/breaking-news/config.toml` on Unix/macOS,
    /// or equivalent on other platforms via `dirs::config_dir()`.
    /// Falls back to current directory if config_dir is unavailable.
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        config_dir.join("breaking-news").join("config.toml")
    }

    /// Loads configuration from the default config file.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&Self::config_path())
    }

    /// Loads configuration from `path`.
    ///
    /// - If the file doesn't exist, returns `Config::default()`.
    /// - If the file exists, parses it as TOML and validates.
    /// - Returns an error if reading, parsing, or validation fails.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "Config file not found, using defaults");
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            source: e,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Apply environment overrides (`NEWS_API_KEY`).
    pub fn with_env_overrides(self) -> Self {
        let key = std::env::var(API_KEY_ENV).ok();
        self.with_api_key_override(key)
    }

    /// Replace the API key when `key` is present and non-empty.
    pub fn with_api_key_override(mut self, key: Option<String>) -> Self {
        if let Some(key) = key.filter(|k| !k.trim().is_empty()) {
            self.api.api_key = Some(key);
        }
        self
    }

    /// Validates the configuration.
    ///
    /// Checks:
    /// - Base URL and endpoint are not empty
    /// - Country is a two-letter code
    /// - Timeouts are positive
    pub fn validate(&self) -> Result<(), ConfigError> {
        let api = &self.api;

        if api.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.base_url must not be empty".to_string(),
            });
        }

        if api.endpoint.trim().is_empty() {
            return Err(ConfigError::ValidationError {
                message: "api.endpoint must not be empty".to_string(),
            });
        }

        if api.country.len() != 2 || !api.country.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ConfigError::ValidationError {
                message: format!(
                    "api.country must be a two-letter country code, got '{}'",
                    api.country
                ),
            });
        }

        if api.timeout_seconds == 0 || api.connect_timeout_seconds == 0 {
            return Err(ConfigError::ValidationError {
                message: "api timeouts must be greater than zero".to_string(),
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(Config::default().validate().is_ok());
    }

    #[test]
    fn rejects_bad_country() {
        let mut config = Config::default();
        config.api.country = "usa".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationError { .. })
        ));
    }

    #[test]
    fn api_key_override_ignores_blank_values() {
        let mut config = Config::default();
        config.api.api_key = Some("from-file".to_string());

        let config = config.with_api_key_override(Some("  ".to_string()));
        assert_eq!(config.api.api_key.as_deref(), Some("from-file"));

        let config = config.with_api_key_override(Some("from-env".to_string()));
        assert_eq!(config.api.api_key.as_deref(), Some("from-env"));

        let config = config.with_api_key_override(None);
        assert_eq!(config.api.api_key.as_deref(), Some("from-env"));
    }
}
