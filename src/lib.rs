//! neo4j_schema_export library: schema snapshots of a Neo4j database
//!
//! This library runs Neo4j's built-in schema introspection procedures (node
//! and relationship property types, constraints, indexes) and writes each
//! result set to its own YAML file.
//!
//! # Example
//!
//! ```no_run
//! use neo4j_schema_export::{run_export, Config};
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let config = Config {
//!     uri: "neo4j://localhost:7687".to_string(),
//!     user: "neo4j".to_string(),
//!     password: "secret".to_string(),
//!     ..Default::default()
//! };
//!
//! let report = run_export(config).await?;
//! println!("Wrote {} records to {}", report.total_records(), report.output_dir.display());
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Use `#[tokio::main]` in your application
//! or ensure you're calling library functions within an async context.

#![warn(missing_docs)]

pub mod config;
pub mod error_handling;
pub mod export;
pub mod initialization;
pub mod schema;
pub mod source;

// Re-export public API
pub use config::{Config, ListingSyntax, LogFormat, LogLevel};
pub use error_handling::ExportError;
pub use export::{ExportOptions, ExportReport};
pub use run::{export_schema, run_export};
pub use source::{Neo4jSource, SchemaSource};

// Internal run module (contains the export pipeline)
mod run {
    use log::{debug, error, info};

    use crate::config::Config;
    use crate::error_handling::ExportError;
    use crate::export::{write_snapshot, ExportOptions, ExportReport};
    use crate::schema::{decode_rows, Record, SchemaQuery, SchemaSnapshot};
    use crate::source::{Neo4jSource, SchemaSource};

    /// Exports the schema of the database described by `config`.
    ///
    /// This is the main entry point for the library. It opens one connection,
    /// runs the four schema queries, writes the four YAML files and releases
    /// the connection.
    ///
    /// # Errors
    ///
    /// Returns the `ExportError` category of the first failure. Queries after
    /// a failed one are not run and no file is written.
    pub async fn run_export(config: Config) -> Result<ExportReport, ExportError> {
        let options = ExportOptions {
            output_dir: config.output_dir.clone(),
        };
        let mut source = Neo4jSource::new(config);
        export_schema(&mut source, &options).await
    }

    /// Runs the export pipeline against any [`SchemaSource`].
    ///
    /// `source.close()` is called on every path, including when `open` fails.
    pub async fn export_schema<S>(
        source: &mut S,
        options: &ExportOptions,
    ) -> Result<ExportReport, ExportError>
    where
        S: SchemaSource + ?Sized,
    {
        let outcome = open_fetch_and_write(source, options).await;
        source.close().await;

        if let Err(ref e) = outcome {
            error!("Export failed ({}): {}", e.category(), e.detail());
        }
        outcome
    }

    async fn open_fetch_and_write<S>(
        source: &mut S,
        options: &ExportOptions,
    ) -> Result<ExportReport, ExportError>
    where
        S: SchemaSource + ?Sized,
    {
        source.open().await?;
        let snapshot = fetch_snapshot(source).await?;
        write_snapshot(&snapshot, options).await
    }

    async fn fetch_snapshot<S>(source: &mut S) -> Result<SchemaSnapshot, ExportError>
    where
        S: SchemaSource + ?Sized,
    {
        let nodes = decode_rows(fetch_one(source, SchemaQuery::NodeProperties).await?)?;
        let relationships =
            decode_rows(fetch_one(source, SchemaQuery::RelationshipProperties).await?)?;
        let constraints = fetch_one(source, SchemaQuery::Constraints).await?;
        let indexes = fetch_one(source, SchemaQuery::Indexes).await?;

        Ok(SchemaSnapshot {
            nodes,
            relationships,
            constraints,
            indexes,
        })
    }

    async fn fetch_one<S>(source: &mut S, query: SchemaQuery) -> Result<Vec<Record>, ExportError>
    where
        S: SchemaSource + ?Sized,
    {
        info!("Fetching {}", query);
        let records = source.fetch(query).await?;
        debug!("{} returned {} record(s)", query, records.len());
        Ok(records)
    }
}
