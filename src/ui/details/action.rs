//! Actions for the details screen.

use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailsAction {
    /// Acknowledge a one-shot state.
    Idle,

    /// Show the loading indicator.
    Loading,

    /// User pressed back.
    OnBackPressed,

    /// Screen mounted; render the article it was opened with.
    RequestUpdateView,
}

impl Action for DetailsAction {}
