use crate::data::Article;

/// What the details screen needs to render an article.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DetailsArgs {
    pub url_to_image: String,
    pub description: String,
}

impl DetailsArgs {
    pub fn new(url_to_image: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            url_to_image: url_to_image.into(),
            description: description.into(),
        }
    }
}

impl From<&Article> for DetailsArgs {
    /// Missing fields render as empty text.
    fn from(article: &Article) -> Self {
        Self {
            url_to_image: article.url_to_image.clone().unwrap_or_default(),
            description: article.description.clone().unwrap_or_default(),
        }
    }
}
