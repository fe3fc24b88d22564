//! Current-state holder with non-coalescing observers.

use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use futures_core::Stream;
use parking_lot::Mutex;
use tokio::sync::mpsc;

use crate::ui::mvi::UiState;

/// Holds exactly one current state and fans every update out to observers.
///
/// Unlike a "latest value" watch, every `set` reaches every observer, even
/// when the value equals the previous one.
pub struct StateCell<S> {
    inner: Arc<Mutex<CellInner<S>>>,
}

struct CellInner<S> {
    current: S,
    observers: Vec<mpsc::UnboundedSender<S>>,
    closed: bool,
}

impl<S: UiState> StateCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CellInner {
                current: initial,
                observers: Vec::new(),
                closed: false,
            })),
        }
    }

    /// Latest state.
    pub fn get(&self) -> S {
        self.inner.lock().current.clone()
    }

    /// Replace the current state and notify observers.
    ///
    /// Returns `false` without touching anything once the cell is closed.
    pub fn set(&self, state: S) -> bool {
        let mut inner = self.inner.lock();
        if inner.closed {
            tracing::trace!(?state, "State set after close, discarding");
            return false;
        }
        // Observers whose stream was dropped are pruned here.
        inner
            .observers
            .retain(|observer| observer.send(state.clone()).is_ok());
        inner.current = state;
        true
    }

    /// Subscribe to the current state followed by every later update.
    pub fn observe(&self) -> StateStream<S> {
        let (tx, rx) = mpsc::unbounded_channel();
        let mut inner = self.inner.lock();
        // Receiver is alive, the send cannot fail.
        let _ = tx.send(inner.current.clone());
        if !inner.closed {
            inner.observers.push(tx);
        }
        StateStream { rx }
    }

    /// Stop accepting updates and end all subscriptions.
    pub fn close(&self) {
        let mut inner = self.inner.lock();
        inner.closed = true;
        inner.observers.clear();
    }

    pub fn is_closed(&self) -> bool {
        self.inner.lock().closed
    }

    pub fn observer_count(&self) -> usize {
        let mut inner = self.inner.lock();
        inner.observers.retain(|observer| !observer.is_closed());
        inner.observers.len()
    }
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

/// A subscription created by [`StateCell::observe`].
///
/// Ends after the cell is closed and the already delivered values are drained.
pub struct StateStream<S> {
    rx: mpsc::UnboundedReceiver<S>,
}

impl<S> StateStream<S> {
    pub async fn next(&mut self) -> Option<S> {
        self.rx.recv().await
    }

    /// Next value if one is already queued.
    pub fn try_next(&mut self) -> Option<S> {
        self.rx.try_recv().ok()
    }
}

impl<S> Stream for StateStream<S> {
    type Item = S;

    fn poll_next(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<S>> {
        self.get_mut().rx.poll_recv(cx)
    }
}
