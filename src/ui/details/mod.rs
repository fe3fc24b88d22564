//! Article details screen.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `args.rs` - Payload handed over by navigation
//! - `state.rs` - Screen state enum
//! - `action.rs` - User/lifecycle actions
//! - `reducer.rs` - State transitions

mod action;
mod args;
mod reducer;
mod state;

pub use action::DetailsAction;
pub use args::DetailsArgs;
pub use reducer::DetailsReducer;
pub use state::DetailsState;
