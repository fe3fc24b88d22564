//! Breaking-news client core.
//!
//! Every screen (headlines, details, about) is backed by a [`store::Store`]:
//! an action queue drained by a single processor task that applies the
//! screen's reducer and publishes each resulting state to observers.

pub mod config;
pub mod data;
pub mod logging;
pub mod navigation;
pub mod store;
pub mod ui;
