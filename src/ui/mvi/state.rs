//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq for tests and observers)
///
/// `Default` is the screen's designated initial state.
pub trait UiState: std::fmt::Debug + Clone + PartialEq + Default + Send + 'static {}
