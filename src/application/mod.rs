//! Application layer managing UI-facing state.
//!
//! This module coordinates between the domain counters and the presentation
//! layer: it owns the counter instances, the active page and input mode.

pub mod state;

pub use state::*;
