//! Error handling.
//!
//! This module provides:
//! - Error type definitions (`ExportError`, `InitializationError`)
//! - Categorization of driver errors and server status codes
//!
//! Export failures fall into a flat set of categories: connectivity,
//! authentication, query syntax, filesystem, serialization, and a catch-all
//! for any other database failure.

mod categorization;
mod types;

// Re-export public API
pub use categorization::{categorize_driver_error, categorize_server_code};
pub use types::{ExportError, InitializationError};
