use tokio::sync::watch;

use super::{Navigator, Route};

/// In-memory route stack rooted at [`Route::Home`].
pub struct BackStack {
    routes: watch::Sender<Vec<Route>>,
}

impl BackStack {
    pub fn new() -> Self {
        let (routes, _) = watch::channel(vec![Route::Home]);
        Self { routes }
    }

    /// Route on top of the stack.
    pub fn current(&self) -> Route {
        self.routes
            .borrow()
            .last()
            .cloned()
            .unwrap_or(Route::Home)
    }

    pub fn depth(&self) -> usize {
        self.routes.borrow().len()
    }

    /// Receiver notified whenever the stack changes.
    pub fn subscribe(&self) -> watch::Receiver<Vec<Route>> {
        self.routes.subscribe()
    }
}

impl Default for BackStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Navigator for BackStack {
    fn navigate(&self, route: Route) {
        tracing::debug!(?route, "Navigate");
        self.routes.send_modify(|routes| routes.push(route));
    }

    fn back(&self) {
        self.routes.send_modify(|routes| {
            // The root route is never popped.
            if routes.len() > 1 {
                routes.pop();
            }
        });
    }
}
