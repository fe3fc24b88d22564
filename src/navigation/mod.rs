//! Navigation collaborator.
//!
//! Stores know nothing about routes. Screens expose their navigation and back
//! states as one-shot values ([`OneShot`]); the UI observes them, acknowledges
//! each one by submitting the screen's `Idle` action, and performs the
//! navigation through a [`Navigator`]. [`bind_navigation`] implements exactly
//! that protocol on top of a [`StoreHandle`].

mod back_stack;

pub use back_stack::BackStack;

use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::store::StoreHandle;
use crate::ui::details::DetailsArgs;
use crate::ui::mvi::{Action, UiState};

/// Destinations of the client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Home,
    Details(DetailsArgs),
    About,
}

/// What a one-shot state asks the UI to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationEffect {
    Navigate(Route),
    Back,
}

/// Performs navigation on behalf of the UI.
pub trait Navigator: Send + Sync {
    fn navigate(&self, route: Route);

    fn back(&self);
}

/// States that may carry a transient navigation instruction.
pub trait OneShot: UiState {
    /// Action that clears the one-shot state (the screen's `Idle`).
    type Ack: Action;

    fn one_shot(&self) -> Option<NavigationEffect>;

    fn acknowledge() -> Self::Ack;
}

/// Observe `handle` and turn its one-shot states into navigator calls.
///
/// For every one-shot state the binding first submits the acknowledgment,
/// then navigates. The task ends when the store is torn down.
pub fn bind_navigation<S>(
    handle: StoreHandle<S::Ack, S>,
    navigator: Arc<dyn Navigator>,
) -> JoinHandle<()>
where
    S: OneShot,
{
    // Subscribe before spawning so states published before the task's first
    // poll are still delivered.
    let mut states = handle.observe();
    tokio::spawn(async move {
        while let Some(state) = states.next().await {
            let Some(effect) = state.one_shot() else {
                continue;
            };
            tracing::debug!(?effect, "One-shot state observed");
            handle.submit(S::acknowledge());
            match effect {
                NavigationEffect::Navigate(route) => navigator.navigate(route),
                NavigationEffect::Back => navigator.back(),
            }
        }
    })
}
