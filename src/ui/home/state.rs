//! State for the headlines screen.

use super::action::HomeAction;
use crate::data::Article;
use crate::navigation::{NavigationEffect, OneShot, Route};
use crate::ui::details::DetailsArgs;
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum HomeState {
    #[default]
    Loading,

    Idle,

    ShowData(Vec<Article>),

    /// One-shot: the UI must open details and submit `Idle`.
    NavigateToDetails(DetailsArgs),

    /// One-shot: the UI must open about and submit `Idle`.
    NavigateToAbout,

    /// Fetch failed; a new `RequestBreakingNews` retries.
    Error(String),
}

impl UiState for HomeState {}

impl HomeState {
    pub fn articles(&self) -> Option<&[Article]> {
        match self {
            HomeState::ShowData(articles) => Some(articles),
            _ => None,
        }
    }
}

impl OneShot for HomeState {
    type Ack = HomeAction;

    fn one_shot(&self) -> Option<NavigationEffect> {
        match self {
            HomeState::NavigateToDetails(args) => {
                Some(NavigationEffect::Navigate(Route::Details(args.clone())))
            }
            HomeState::NavigateToAbout => Some(NavigationEffect::Navigate(Route::About)),
            HomeState::Loading
            | HomeState::Idle
            | HomeState::ShowData(_)
            | HomeState::Error(_) => None,
        }
    }

    fn acknowledge() -> HomeAction {
        HomeAction::Idle
    }
}
