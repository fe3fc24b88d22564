//! State for the about screen.

use super::action::AboutAction;
use crate::navigation::{NavigationEffect, OneShot};
use crate::ui::mvi::UiState;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum AboutState {
    #[default]
    Loading,

    Idle,

    /// One-shot: the UI must go back and submit `Idle`.
    OnBackPressed,
}

impl UiState for AboutState {}

impl OneShot for AboutState {
    type Ack = AboutAction;

    fn one_shot(&self) -> Option<NavigationEffect> {
        match self {
            AboutState::OnBackPressed => Some(NavigationEffect::Back),
            AboutState::Loading | AboutState::Idle => None,
        }
    }

    fn acknowledge() -> AboutAction {
        AboutAction::Idle
    }
}
