//! Neo4j driver initialization.
//!
//! This module builds the `neo4rs` graph handle from the library `Config`.

use log::debug;
use neo4rs::{ConfigBuilder, Graph};

use crate::config::Config;
use crate::error_handling::{categorize_driver_error, ExportError};

/// Number of rows pulled from the server per round trip.
const FETCH_SIZE: usize = 500;

/// Initializes the Neo4j graph handle.
///
/// Creates a `neo4rs::Graph` configured with:
/// - URI, user and password from the config
/// - The target database, if one is set
/// - A single pooled connection (the exporter never runs queries concurrently)
///
/// # Errors
///
/// Returns an `ExportError` categorized from the driver error, usually
/// `Connectivity` for a malformed URI and `Authentication` for rejected
/// credentials.
pub async fn init_graph(config: &Config) -> Result<Graph, ExportError> {
    let mut builder = ConfigBuilder::default()
        .uri(config.uri.as_str())
        .user(config.user.as_str())
        .password(config.password.as_str())
        .fetch_size(FETCH_SIZE)
        .max_connections(1);
    if let Some(db) = config.database.as_deref() {
        builder = builder.db(db);
    }

    let driver_config = builder.build().map_err(categorize_driver_error)?;
    debug!("Connecting to {} as {}", config.uri, config.user);
    Graph::connect(driver_config)
        .await
        .map_err(categorize_driver_error)
}
