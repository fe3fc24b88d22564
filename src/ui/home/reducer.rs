//! Reducer for the headlines screen.

use std::sync::Arc;

use crate::data::{Article, DataPort};
use crate::ui::mvi::{Reducer, Transition};

use super::action::HomeAction;
use super::state::HomeState;

/// Port the headlines screen fetches through.
pub type HeadlinesPort = Arc<dyn DataPort<Item = Article>>;

pub struct HomeReducer {
    port: HeadlinesPort,
}

impl HomeReducer {
    pub fn new(port: HeadlinesPort) -> Self {
        Self { port }
    }
}

impl Reducer for HomeReducer {
    type State = HomeState;
    type Action = HomeAction;

    const SCREEN: &'static str = "home";

    fn reduce(&self, _state: &Self::State, action: Self::Action) -> Transition<Self::State> {
        match action {
            HomeAction::Idle => Transition::Set(HomeState::Idle),
            HomeAction::RequestBreakingNews => {
                let port = Arc::clone(&self.port);
                Transition::effect_with_interim(HomeState::Loading, async move {
                    match port.fetch_items().await {
                        Ok(articles) => {
                            tracing::debug!(count = articles.len(), "Headlines loaded");
                            HomeState::ShowData(articles)
                        }
                        Err(err) => {
                            tracing::warn!(error = %err, "Headlines fetch failed");
                            HomeState::Error(err.to_string())
                        }
                    }
                })
            }
            HomeAction::RequestNavigationToDetails(args) => {
                Transition::Set(HomeState::NavigateToDetails(args))
            }
            HomeAction::RequestNavigationToAbout => Transition::Set(HomeState::NavigateToAbout),
        }
    }

    fn recover(&self, reason: &str) -> Option<Self::State> {
        Some(HomeState::Error(reason.to_string()))
    }
}
