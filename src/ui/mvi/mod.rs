//! Model-View-Intent (MVI) architecture primitives.
//!
//! This module provides base traits for implementing unidirectional
//! data flow in the UI layer.
//!
//! # Architecture
//!
//! ```text
//! Action ──→ Reducer ──→ Transition ──→ Store ──→ State ──→ View
//!    ↑                       │                               │
//!    │                    Effect (DataPort)                  │
//!    └───────────────────────────────────────────────────────┘
//! ```
//!
//! - **State**: Immutable representation of a screen
//! - **Action**: User interactions or lifecycle events
//! - **Reducer**: Decides the transition for each action; effects are
//!   described as futures and executed by the store

mod action;
mod reducer;
mod state;

pub use action::Action;
pub use reducer::{Effect, EffectFuture, Reducer, Transition};
pub use state::UiState;
