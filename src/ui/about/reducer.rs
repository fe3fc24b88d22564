//! Reducer for the about screen.

use crate::ui::mvi::{Reducer, Transition};

use super::action::AboutAction;
use super::state::AboutState;

pub struct AboutReducer;

impl Reducer for AboutReducer {
    type State = AboutState;
    type Action = AboutAction;

    const SCREEN: &'static str = "about";

    fn reduce(&self, _state: &Self::State, action: Self::Action) -> Transition<Self::State> {
        match action {
            AboutAction::Idle => Transition::Set(AboutState::Idle),
            AboutAction::Loading => Transition::Ignore,
            AboutAction::OnBackPressed => Transition::Set(AboutState::OnBackPressed),
        }
    }
}
