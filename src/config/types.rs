use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
}

/// NewsAPI connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the API (e.g., "https://newsapi.org/").
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Path of the headlines endpoint relative to `base_url`.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Two-letter country code for headlines (default: "us").
    #[serde(default = "default_country")]
    pub country: String,
    /// API key; the `NEWS_API_KEY` environment variable takes precedence.
    #[serde(default)]
    pub api_key: Option<String>,
    /// Request timeout in seconds (default: 30).
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds (default: 5).
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

impl ApiConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.timeout_seconds))
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(u64::from(self.connect_timeout_seconds))
    }
}

fn default_base_url() -> String {
    "https://newsapi.org/".to_string()
}

fn default_endpoint() -> String {
    "v2/top-headlines".to_string()
}

fn default_country() -> String {
    "us".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            endpoint: default_endpoint(),
            country: default_country(),
            api_key: None,
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}
