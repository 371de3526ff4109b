//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (timeouts, endpoints, widget timing)
//! - CLI option types and parsing

mod cli;
mod constants;
mod types;

// Re-export all constants
pub use cli::Config;
pub use constants::*;
pub use types::{LogFormat, LogLevel};
