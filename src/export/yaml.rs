//! YAML export functionality.
//!
//! Writes each result set of a schema snapshot to its own YAML file. Every file
//! holds a top-level sequence of block-style mappings whose keys keep the order
//! the database reported them in.

use std::path::Path;

use log::{debug, info};
use serde::Serialize;
use strum::IntoEnumIterator;

use crate::error_handling::ExportError;
use crate::schema::{SchemaQuery, SchemaSnapshot};

use super::types::{ExportOptions, ExportReport, WrittenFile};

/// Serializes rows to block-style YAML.
///
/// Keys are emitted in field/insertion order, never sorted. An empty slice
/// renders as `[]`.
///
/// # Errors
///
/// Returns `ExportError::Serialization` if a value cannot be represented.
pub fn render_yaml<T: Serialize>(rows: &[T]) -> Result<String, ExportError> {
    Ok(serde_yaml::to_string(rows)?)
}

/// Creates the output directory and any missing parents.
///
/// Does nothing if the directory already exists; existing contents are left
/// alone.
pub async fn ensure_output_dir(dir: &Path) -> Result<(), ExportError> {
    tokio::fs::create_dir_all(dir).await?;
    Ok(())
}

/// Writes the four result sets of `snapshot` to the output directory.
///
/// All four files are rendered before any is written, so a serialization
/// failure leaves the directory untouched. Each target file is replaced
/// wholesale; other files in the directory are not touched.
///
/// # Arguments
///
/// * `snapshot` - The fetched result sets
/// * `options` - Export options including the output directory
///
/// # Returns
///
/// An `ExportReport` listing each written file and its record count.
pub async fn write_snapshot(
    snapshot: &SchemaSnapshot,
    options: &ExportOptions,
) -> Result<ExportReport, ExportError> {
    let rendered = SchemaQuery::iter()
        .map(|query| render_result_set(snapshot, query).map(|(text, n)| (query, text, n)))
        .collect::<Result<Vec<_>, ExportError>>()?;

    ensure_output_dir(&options.output_dir).await?;

    let mut files = Vec::with_capacity(rendered.len());
    for (query, text, records) in rendered {
        let path = options.output_dir.join(query.file_name());
        tokio::fs::write(&path, text.as_bytes()).await?;
        info!("Wrote {} {} record(s) to {}", records, query, path.display());
        files.push(WrittenFile {
            query,
            path,
            records,
        });
    }
    debug!("Export wrote {} files", files.len());

    Ok(ExportReport {
        output_dir: options.output_dir.clone(),
        files,
    })
}

/// Renders the result set belonging to `query`, returning the text and its record count.
fn render_result_set(
    snapshot: &SchemaSnapshot,
    query: SchemaQuery,
) -> Result<(String, usize), ExportError> {
    match query {
        SchemaQuery::NodeProperties => Ok((render_yaml(&snapshot.nodes)?, snapshot.nodes.len())),
        SchemaQuery::RelationshipProperties => Ok((
            render_yaml(&snapshot.relationships)?,
            snapshot.relationships.len(),
        )),
        SchemaQuery::Constraints => Ok((
            render_yaml(&snapshot.constraints)?,
            snapshot.constraints.len(),
        )),
        SchemaQuery::Indexes => Ok((render_yaml(&snapshot.indexes)?, snapshot.indexes.len())),
    }
}
