//! Reducer trait for MVI architecture.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use super::action::Action;
use super::state::UiState;

/// Reducer transforms state based on actions.
///
/// The reducer is the only place where state transitions are decided. It
/// never writes state itself: it describes the transition and the store's
/// processor applies it.
pub trait Reducer: Send + Sync + 'static {
    /// The state type this reducer operates on.
    type State: UiState;

    /// The action type this reducer handles.
    type Action: Action;

    /// Screen name used in log spans.
    const SCREEN: &'static str;

    /// Decide the transition for `action` given the current `state`.
    ///
    /// Must be total over `Self::Action`: every variant maps to a
    /// transition, even if that transition is [`Transition::Ignore`].
    fn reduce(&self, state: &Self::State, action: Self::Action) -> Transition<Self::State>;

    /// Map a panicked effect into a state.
    ///
    /// Returning `None` leaves the current state untouched.
    fn recover(&self, _reason: &str) -> Option<Self::State> {
        None
    }
}

/// Outcome of reducing one action.
pub enum Transition<S> {
    /// Replace the current state immediately.
    Set(S),

    /// Run an asynchronous effect and publish the state it resolves to.
    Run(Effect<S>),

    /// Leave the current state untouched.
    Ignore,
}

impl<S: Send + 'static> Transition<S> {
    /// Effect without an interim state.
    pub fn effect<F>(future: F) -> Self
    where
        F: Future<Output = S> + Send + 'static,
    {
        Transition::Run(Effect::new(future))
    }

    /// Effect that publishes `interim` before awaiting `future`.
    pub fn effect_with_interim<F>(interim: S, future: F) -> Self
    where
        F: Future<Output = S> + Send + 'static,
    {
        Transition::Run(Effect::new(future).with_interim(interim))
    }
}

impl<S: fmt::Debug> fmt::Debug for Transition<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Transition::Set(state) => f.debug_tuple("Set").field(state).finish(),
            Transition::Run(effect) => f.debug_tuple("Run").field(effect).finish(),
            Transition::Ignore => write!(f, "Ignore"),
        }
    }
}

pub type EffectFuture<S> = Pin<Box<dyn Future<Output = S> + Send + 'static>>;

/// An asynchronous side effect that resolves to the next state.
///
/// Failures are expected to be mapped into a state inside the future
/// itself, so the processor only ever sees a state.
pub struct Effect<S> {
    interim: Option<S>,
    future: EffectFuture<S>,
}

impl<S: Send + 'static> Effect<S> {
    pub fn new<F>(future: F) -> Self
    where
        F: Future<Output = S> + Send + 'static,
    {
        Self {
            interim: None,
            future: Box::pin(future),
        }
    }

    pub fn with_interim(mut self, interim: S) -> Self {
        self.interim = Some(interim);
        self
    }

    /// State published while the effect runs, if any.
    pub fn interim(&self) -> Option<&S> {
        self.interim.as_ref()
    }

    /// Await the effect directly, without a store.
    pub async fn resolve(self) -> S {
        self.future.await
    }

    pub fn into_parts(self) -> (Option<S>, EffectFuture<S>) {
        (self.interim, self.future)
    }
}

impl<S: fmt::Debug> fmt::Debug for Effect<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Effect")
            .field("interim", &self.interim)
            .finish_non_exhaustive()
    }
}
