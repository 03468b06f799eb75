//! Export types and options.

use std::path::PathBuf;

use crate::schema::SchemaQuery;

/// Options for writing a schema snapshot.
#[derive(Clone, Debug)]
pub struct ExportOptions {
    /// Directory the YAML files are written to (created if missing)
    pub output_dir: PathBuf,
}

/// One YAML file written by an export.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrittenFile {
    /// Query whose result set the file holds
    pub query: SchemaQuery,
    /// Full path of the file
    pub path: PathBuf,
    /// Number of records written
    pub records: usize,
}

/// Results of a completed export.
#[derive(Clone, Debug)]
pub struct ExportReport {
    /// Directory the files were written to
    pub output_dir: PathBuf,
    /// Files written, in query order
    pub files: Vec<WrittenFile>,
}

impl ExportReport {
    /// Total records across all four files.
    pub fn total_records(&self) -> usize {
        self.files.iter().map(|f| f.records).sum()
    }

    /// Record count for one query, if its file was written.
    pub fn records_for(&self, query: SchemaQuery) -> Option<usize> {
        self.files
            .iter()
            .find(|f| f.query == query)
            .map(|f| f.records)
    }
}
