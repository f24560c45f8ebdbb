//! Infrastructure layer providing external service integrations.
//!
//! This module contains configuration loading and log setup, the only
//! pieces of the application that touch the filesystem.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
