//! Actions for the headlines screen.

use crate::data::Article;
use crate::ui::details::DetailsArgs;
use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum HomeAction {
    /// Acknowledge a one-shot state.
    Idle,

    /// Fetch the current headlines.
    RequestBreakingNews,

    /// User tapped an article.
    RequestNavigationToDetails(DetailsArgs),

    /// User tapped the about button in the top bar.
    RequestNavigationToAbout,
}

impl HomeAction {
    pub fn open_article(article: &Article) -> Self {
        HomeAction::RequestNavigationToDetails(DetailsArgs::from(article))
    }
}

impl Action for HomeAction {}
