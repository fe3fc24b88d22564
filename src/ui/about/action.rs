//! Actions for the about screen.

use crate::ui::mvi::Action;

#[derive(Debug, Clone, PartialEq)]
pub enum AboutAction {
    /// Acknowledge a one-shot state.
    Idle,

    /// Kept for parity with the other screens; has no effect.
    Loading,

    /// User pressed back.
    OnBackPressed,
}

impl Action for AboutAction {}
