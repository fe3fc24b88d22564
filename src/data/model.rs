//! Domain models handed from the data layer to the screens.

/// One page of headlines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NewsFeed {
    pub articles: Option<Vec<Article>>,
    pub status: Option<String>,
    pub total_results: Option<u32>,
}

impl NewsFeed {
    /// Articles of the feed; an absent list is treated as empty.
    pub fn into_articles(self) -> Vec<Article> {
        self.articles.unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Article {
    pub author: Option<String>,
    pub content: Option<String>,
    pub description: Option<String>,
    pub published_at: Option<String>,
    pub source: Option<Source>,
    pub title: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Source {
    pub id: Option<String>,
    pub name: Option<String>,
}
