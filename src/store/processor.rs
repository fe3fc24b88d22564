//! Sequential reducer/effect loop of a store.

use std::any::Any;
use std::ops::ControlFlow;

use tokio::task::JoinHandle;
use tracing::Instrument;

use super::cell::StateCell;
use super::channel::ActionReceiver;
use super::teardown::Teardown;
use crate::ui::mvi::{Effect, Reducer, Transition};

/// Drains the action queue and applies each transition before dequeuing the
/// next action.
pub struct ActionProcessor<R: Reducer> {
    reducer: R,
    cell: StateCell<R::State>,
    actions: ActionReceiver<R::Action>,
    teardown: Teardown,
}

impl<R: Reducer> ActionProcessor<R> {
    pub fn new(
        reducer: R,
        cell: StateCell<R::State>,
        actions: ActionReceiver<R::Action>,
        teardown: Teardown,
    ) -> Self {
        Self {
            reducer,
            cell,
            actions,
            teardown,
        }
    }

    /// Run until the store is torn down.
    pub async fn run(mut self) {
        while let Some(action) = self.actions.next().await {
            if self.process(action).await.is_break() {
                break;
            }
        }
        tracing::debug!("Action processor stopped");
    }

    async fn process(&mut self, action: R::Action) -> ControlFlow<()> {
        tracing::trace!(?action, "Processing action");
        let current = self.cell.get();
        match self.reducer.reduce(&current, action) {
            Transition::Set(state) => {
                self.cell.set(state);
                ControlFlow::Continue(())
            }
            Transition::Run(effect) => self.run_effect(effect).await,
            Transition::Ignore => ControlFlow::Continue(()),
        }
    }

    async fn run_effect(&self, effect: Effect<R::State>) -> ControlFlow<()> {
        let (interim, future) = effect.into_parts();
        if let Some(state) = interim {
            self.cell.set(state);
        }

        // The effect runs in its own task so a panic inside it cannot take
        // the processor down with it.
        let mut task = EffectTask(tokio::spawn(future.in_current_span()));
        tokio::select! {
            biased;
            _ = self.teardown.wait() => {
                tracing::debug!("Teardown during effect, discarding its result");
                ControlFlow::Break(())
            }
            joined = &mut task.0 => {
                match joined {
                    Ok(state) => {
                        self.cell.set(state);
                    }
                    Err(err) if err.is_panic() => {
                        let reason = panic_reason(err.into_panic());
                        tracing::error!(%reason, "Effect panicked");
                        if let Some(state) = self.reducer.recover(&reason) {
                            self.cell.set(state);
                        }
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "Effect cancelled");
                    }
                }
                ControlFlow::Continue(())
            }
        }
    }
}

/// Aborts the effect when the processor stops awaiting it, including when the
/// processor task itself is aborted.
struct EffectTask<S>(JoinHandle<S>);

impl<S> Drop for EffectTask<S> {
    fn drop(&mut self) {
        self.0.abort();
    }
}

fn panic_reason(payload: Box<dyn Any + Send>) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "effect panicked".to_string()
    }
}
