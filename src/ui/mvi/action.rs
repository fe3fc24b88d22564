//! Base trait for actions (user/system intents) in MVI architecture.

/// Marker trait for action objects.
///
/// Actions represent:
/// - User interactions (taps on an article, the back button)
/// - Lifecycle events (a screen asking for its data on mount)
/// - Acknowledgments of one-shot states (`Idle`)
///
/// Actions are queued on a store and processed by its reducer one at a time.
pub trait Action: std::fmt::Debug + Send + 'static {}
