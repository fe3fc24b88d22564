//! Data layer: the port screens fetch through and its NewsAPI adapter.

pub mod model;
pub mod news_api;
pub mod response;

use async_trait::async_trait;
use thiserror::Error;

pub use model::{Article, NewsFeed, Source};
pub use news_api::NewsApiClient;

/// Capability a screen calls to fetch its items.
///
/// Called at most once per fetch action; retrying is the caller's decision,
/// expressed as a new action.
#[async_trait]
pub trait DataPort: Send + Sync {
    type Item: Send;

    async fn fetch_items(&self) -> Result<Vec<Self::Item>, FetchError>;
}

/// Reasons a fetch can fail. Rendered into the screen's error state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("News API key is not configured (set NEWS_API_KEY or api.api_key)")]
    MissingApiKey,

    #[error("Invalid request URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Connection to {url} failed: {reason}")]
    Connection { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("News API returned HTTP {status}: {message}")]
    Http { status: u16, message: String },

    #[error("News API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("Failed to decode news payload: {0}")]
    Decode(String),

    #[error("{0}")]
    Unavailable(String),
}
