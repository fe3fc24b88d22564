//! NewsAPI wire payloads and their mapping into domain models.

use serde::Deserialize;

use super::model::{Article, NewsFeed, Source};

/// Body of `v2/top-headlines`, success and error shapes alike.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsResponse {
    #[serde(default)]
    pub articles: Option<Vec<ArticleResponse>>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub total_results: Option<u32>,
    /// Present when `status` is `"error"`.
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleResponse {
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub published_at: Option<String>,
    #[serde(default)]
    pub source: Option<SourceResponse>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SourceResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
}

impl NewsResponse {
    pub fn is_error(&self) -> bool {
        self.status.as_deref() == Some("error")
    }
}

impl From<NewsResponse> for NewsFeed {
    fn from(response: NewsResponse) -> Self {
        Self {
            articles: response
                .articles
                .map(|articles| articles.into_iter().map(Article::from).collect()),
            status: response.status,
            total_results: response.total_results,
        }
    }
}

impl From<ArticleResponse> for Article {
    fn from(response: ArticleResponse) -> Self {
        Self {
            author: response.author,
            content: response.content,
            description: response.description,
            published_at: response.published_at,
            source: response.source.map(Source::from),
            title: response.title,
            url: response.url,
            url_to_image: response.url_to_image,
        }
    }
}

impl From<SourceResponse> for Source {
    fn from(response: SourceResponse) -> Self {
        Self {
            id: response.id,
            name: response.name,
        }
    }
}
