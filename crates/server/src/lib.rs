//! HTTP surface for the booth order tracker.

pub mod api;
pub mod metrics;
pub mod state;
