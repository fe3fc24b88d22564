//! Reducer for the details screen.

use crate::ui::mvi::{Reducer, Transition};

use super::action::DetailsAction;
use super::args::DetailsArgs;
use super::state::DetailsState;

/// Details screen reducer, built with the article it was navigated to.
pub struct DetailsReducer {
    args: DetailsArgs,
}

impl DetailsReducer {
    pub fn new(args: DetailsArgs) -> Self {
        Self { args }
    }
}

impl Reducer for DetailsReducer {
    type State = DetailsState;
    type Action = DetailsAction;

    const SCREEN: &'static str = "details";

    fn reduce(&self, _state: &Self::State, action: Self::Action) -> Transition<Self::State> {
        match action {
            DetailsAction::Idle => Transition::Set(DetailsState::Idle),
            DetailsAction::Loading => Transition::Set(DetailsState::Loading),
            DetailsAction::OnBackPressed => Transition::Set(DetailsState::OnBackPressed),
            DetailsAction::RequestUpdateView => {
                Transition::Set(DetailsState::ShowArticle(self.args.clone()))
            }
        }
    }
}
