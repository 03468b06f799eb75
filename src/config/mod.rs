//! Application configuration and constants.
//!
//! This module provides:
//! - Configuration constants (environment variable names, output files)
//! - CLI option types and parsing
//! - The library `Config` built once at startup

mod constants;
mod types;

// Re-export all constants
pub use constants::*;
pub use types::{Config, ListingSyntax, LogFormat, LogLevel, Opt};
