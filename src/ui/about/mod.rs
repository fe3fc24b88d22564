//! About screen.
//!
//! Static platform information plus a back button; the only transition of
//! interest is the one-shot back state.

mod action;
mod platform;
mod reducer;
mod state;

pub use action::AboutAction;
pub use platform::{about_entries, AboutEntry};
pub use reducer::AboutReducer;
pub use state::AboutState;
