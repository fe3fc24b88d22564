//! Ordered action queue feeding a store's processor.

use tokio::sync::mpsc;

use super::teardown::Teardown;
use crate::ui::mvi::Action;

/// Create the two halves of a store's action queue.
///
/// The queue is unbounded: submissions come from human input and are never
/// dropped while the store is alive.
pub fn action_channel<A: Action>(teardown: Teardown) -> (ActionSender<A>, ActionReceiver<A>) {
    let (tx, rx) = mpsc::unbounded_channel();
    (
        ActionSender {
            tx,
            teardown: teardown.clone(),
        },
        ActionReceiver { rx, teardown },
    )
}

/// Producer half. Cheap to clone, usable from any thread.
pub struct ActionSender<A> {
    tx: mpsc::UnboundedSender<A>,
    teardown: Teardown,
}

impl<A: Action> ActionSender<A> {
    /// Append `action` to the queue without blocking.
    ///
    /// Returns `false` when the store has been torn down; the action is
    /// dropped silently in that case.
    pub fn submit(&self, action: A) -> bool {
        if self.teardown.is_torn_down() {
            tracing::trace!(?action, "Action submitted after teardown, dropping");
            return false;
        }
        match self.tx.send(action) {
            Ok(()) => true,
            Err(mpsc::error::SendError(action)) => {
                tracing::trace!(?action, "Action queue closed, dropping");
                false
            }
        }
    }

    pub fn is_closed(&self) -> bool {
        self.teardown.is_torn_down() || self.tx.is_closed()
    }
}

impl<A> Clone for ActionSender<A> {
    fn clone(&self) -> Self {
        Self {
            tx: self.tx.clone(),
            teardown: self.teardown.clone(),
        }
    }
}

/// Consumer half, owned by the processor.
pub struct ActionReceiver<A> {
    rx: mpsc::UnboundedReceiver<A>,
    teardown: Teardown,
}

impl<A: Action> ActionReceiver<A> {
    /// Next action in submission order.
    ///
    /// Suspends while the queue is empty. Returns `None` once the store is
    /// torn down (pending actions are discarded) or every sender is gone.
    pub async fn next(&mut self) -> Option<A> {
        if self.teardown.is_torn_down() {
            self.rx.close();
            return None;
        }
        tokio::select! {
            biased;
            _ = self.teardown.wait() => {
                self.rx.close();
                None
            }
            action = self.rx.recv() => action,
        }
    }
}
