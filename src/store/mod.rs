//! Per-screen action/state store.
//!
//! A [`Store`] owns three parts:
//! - an action queue (`channel.rs`) that UI callbacks submit into,
//! - a [`StateCell`] (`cell.rs`) holding the current state for observers,
//! - an [`ActionProcessor`] (`processor.rs`) running on its own tokio task,
//!   applying one reducer transition at a time.
//!
//! Dropping the store (or calling [`Store::teardown`]) cancels the processor
//! and any in-flight effect; nothing is written to the cell afterwards.

mod cell;
mod channel;
mod processor;
mod teardown;

pub use cell::{StateCell, StateStream};
pub use channel::{action_channel, ActionReceiver, ActionSender};
pub use processor::ActionProcessor;
pub use teardown::Teardown;

use tokio::task::JoinHandle;
use tracing::Instrument;
use uuid::Uuid;

use crate::ui::mvi::{Action, Reducer, UiState};

pub struct Store<R: Reducer> {
    id: Uuid,
    handle: StoreHandle<R::Action, R::State>,
    teardown: Teardown,
    task: Option<JoinHandle<()>>,
}

impl<R: Reducer> Store<R> {
    /// Mount a store with an explicit initial state.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(reducer: R, initial: R::State) -> Self {
        let id = Uuid::new_v4();
        let teardown = Teardown::new();
        let (sender, receiver) = action_channel(teardown.clone());
        let cell = StateCell::new(initial);
        let processor = ActionProcessor::new(reducer, cell.clone(), receiver, teardown.clone());

        let span = tracing::debug_span!("store", screen = R::SCREEN, %id);
        let task = tokio::spawn(processor.run().instrument(span));
        tracing::debug!(screen = R::SCREEN, %id, "Store mounted");

        Self {
            id,
            handle: StoreHandle { sender, cell },
            teardown,
            task: Some(task),
        }
    }

    /// Mount a store starting from the screen's designated initial state.
    pub fn mount(reducer: R) -> Self {
        Self::spawn(reducer, R::State::default())
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Queue an action. Never blocks; `false` once torn down.
    pub fn submit(&self, action: R::Action) -> bool {
        self.handle.submit(action)
    }

    pub fn state(&self) -> R::State {
        self.handle.state()
    }

    pub fn observe(&self) -> StateStream<R::State> {
        self.handle.observe()
    }

    /// Cloneable handle for UI callbacks and observers.
    pub fn handle(&self) -> StoreHandle<R::Action, R::State> {
        self.handle.clone()
    }

    pub fn is_torn_down(&self) -> bool {
        self.teardown.is_torn_down()
    }

    /// Cancel pending work and close the state cell.
    pub fn teardown(&mut self) {
        if self.teardown.signal() {
            self.handle.cell.close();
            tracing::debug!(screen = R::SCREEN, id = %self.id, "Store torn down");
        }
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    /// Tear down and wait for the processor task to finish.
    pub async fn shutdown(mut self) {
        if self.teardown.signal() {
            self.handle.cell.close();
        }
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                if err.is_panic() {
                    tracing::error!(screen = R::SCREEN, id = %self.id, "Action processor panicked");
                }
            }
        }
    }
}

impl<R: Reducer> Drop for Store<R> {
    fn drop(&mut self) {
        self.teardown();
    }
}

/// Submit/observe access to a store without owning its lifetime.
pub struct StoreHandle<A, S> {
    sender: ActionSender<A>,
    cell: StateCell<S>,
}

impl<A: Action, S: UiState> StoreHandle<A, S> {
    pub fn submit(&self, action: A) -> bool {
        self.sender.submit(action)
    }

    pub fn state(&self) -> S {
        self.cell.get()
    }

    pub fn observe(&self) -> StateStream<S> {
        self.cell.observe()
    }

    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}

impl<A, S> Clone for StoreHandle<A, S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
            cell: self.cell.clone(),
        }
    }
}
