//! Application initialization and resource setup.
//!
//! This module provides functions to initialize shared resources:
//! - Logger (plain or JSON)
//! - Neo4j graph handle
//!
//! All initialization functions return proper error types for error handling.

mod graph;
mod logger;

// Re-export public API
pub use graph::init_graph;
pub use logger::init_logger_with;
