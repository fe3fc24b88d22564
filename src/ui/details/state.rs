//! State for the details screen.

use super::action::DetailsAction;
use super::args::DetailsArgs;
use crate::navigation::{NavigationEffect, OneShot};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DetailsState {
    #[default]
    Loading,

    Idle,

    /// One-shot: the UI must go back and submit `Idle`.
    OnBackPressed,

    ShowArticle(DetailsArgs),
}

impl UiState for DetailsState {}

impl OneShot for DetailsState {
    type Ack = DetailsAction;

    fn one_shot(&self) -> Option<NavigationEffect> {
        match self {
            DetailsState::OnBackPressed => Some(NavigationEffect::Back),
            DetailsState::Loading | DetailsState::Idle | DetailsState::ShowArticle(_) => None,
        }
    }

    fn acknowledge() -> DetailsAction {
        DetailsAction::Idle
    }
}
