use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Shared teardown flag for one store.
///
/// Cloned into the action channel and the processor; signalled once when the
/// screen goes away.
#[derive(Clone, Default)]
pub struct Teardown {
    torn_down: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl Teardown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Signal teardown. Returns `true` only for the first caller.
    pub fn signal(&self) -> bool {
        if self.torn_down.swap(true, Ordering::SeqCst) {
            return false;
        }
        self.notify.notify_waiters();
        true
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down.load(Ordering::SeqCst)
    }

    /// Resolve once teardown has been signalled.
    pub async fn wait(&self) {
        // Register with Notify before reading the flag, otherwise a signal
        // landing between the check and the await is lost.
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_torn_down() {
            return;
        }
        notified.await;
    }
}
