//! tcounter - Terminal Counter Library
//!
//! An interactive counter with adjustable step, bounded history and a display
//! colour toggle, plus a static four-panel page layout, rendered in the terminal.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;
pub mod cli;

pub use domain::*;
pub use application::*;
