//! Headlines list screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Screen state enum
//! - `action.rs` - User/lifecycle actions
//! - `reducer.rs` - State transitions and the headlines fetch

mod action;
mod reducer;
mod state;

pub use action::HomeAction;
pub use reducer::{HeadlinesPort, HomeReducer};
pub use state::HomeState;
