use async_trait::async_trait;
use reqwest::{Client, Url};

use super::response::NewsResponse;
use super::{Article, DataPort, FetchError, NewsFeed};
use crate::config::ApiConfig;

const COUNTRY_PARAM: &str = "country";
const API_KEY_PARAM: &str = "apiKey";

/// HTTP adapter for the NewsAPI top-headlines endpoint.
pub struct NewsApiClient {
    client: Client,
    config: ApiConfig,
}

impl NewsApiClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.timeout())
            .build()
            .map_err(|e| FetchError::Unavailable(format!("Failed to build HTTP client: {e}")))?;

        Ok(Self { client, config })
    }

    /// Endpoint URL without query parameters.
    pub fn endpoint_url(&self) -> String {
        let base = self.config.base_url.trim_end_matches('/');
        let endpoint = self.config.endpoint.trim_start_matches('/');
        format!("{base}/{endpoint}")
    }

    /// Fetch the current headlines page.
    pub async fn fetch_feed(&self) -> Result<NewsFeed, FetchError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or(FetchError::MissingApiKey)?;

        let endpoint = self.endpoint_url();
        let url = Url::parse_with_params(
            &endpoint,
            &[
                (COUNTRY_PARAM, self.config.country.as_str()),
                (API_KEY_PARAM, api_key),
            ],
        )
        .map_err(|e| FetchError::InvalidUrl {
            url: endpoint.clone(),
            reason: e.to_string(),
        })?;

        tracing::debug!(url = %endpoint, country = %self.config.country, "Fetching headlines");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| classify(&endpoint, e))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| classify(&endpoint, e))?;

        if !status.is_success() {
            let message = serde_json::from_slice::<NewsResponse>(&body)
                .ok()
                .and_then(|payload| payload.message)
                .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown").to_string());
            return Err(FetchError::Http {
                status: status.as_u16(),
                message,
            });
        }

        let payload: NewsResponse =
            serde_json::from_slice(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        if payload.is_error() {
            return Err(FetchError::Api {
                code: payload.code.unwrap_or_default(),
                message: payload.message.unwrap_or_default(),
            });
        }

        Ok(payload.into())
    }
}

#[async_trait]
impl DataPort for NewsApiClient {
    type Item = Article;

    async fn fetch_items(&self) -> Result<Vec<Article>, FetchError> {
        self.fetch_feed().await.map(NewsFeed::into_articles)
    }
}

fn classify(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout {
            url: url.to_string(),
        }
    } else if err.is_decode() {
        FetchError::Decode(err.to_string())
    } else {
        FetchError::Connection {
            url: url.to_string(),
            reason: err.to_string(),
        }
    }
}
