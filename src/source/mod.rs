//! Schema sources.
//!
//! The export pipeline talks to the database only through [`SchemaSource`],
//! which keeps connection handling in one place and lets tests substitute an
//! in-memory source.

mod neo4j;

use async_trait::async_trait;

use crate::error_handling::ExportError;
use crate::schema::{Record, SchemaQuery};

pub use neo4j::Neo4jSource;

/// A connection that can answer the schema queries.
#[async_trait]
pub trait SchemaSource: Send {
    /// Acquires the connection.
    async fn open(&mut self) -> Result<(), ExportError>;

    /// Runs one query in its own read transaction and returns its records in
    /// result order.
    async fn fetch(&mut self, query: SchemaQuery) -> Result<Vec<Record>, ExportError>;

    /// Releases the connection.
    ///
    /// Must be safe to call when `open` failed or was never called, and more
    /// than once.
    async fn close(&mut self);
}
