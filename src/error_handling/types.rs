//! Error type definitions.
//!
//! This module defines the error types used throughout the application.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Failure categories of an export run.
///
/// The `Display` text of each variant is the one-line diagnostic printed to
/// the user, so the binary only has to print the error.
#[derive(Error, Debug)]
pub enum ExportError {
    /// The database could not be reached (unreachable host, bad URI, socket failure).
    #[error("Could not connect to the Neo4j database. Check your URI and network.")]
    Connectivity(String),

    /// The server rejected the credentials.
    #[error("Authentication to Neo4j failed. Check your username and password.")]
    Authentication(String),

    /// The server rejected the query text.
    #[error("Cypher syntax error: {0}")]
    QuerySyntax(String),

    /// Creating the output directory or writing a file failed.
    #[error("File write error: {0}")]
    Filesystem(#[from] std::io::Error),

    /// A result could not be decoded or rendered as YAML.
    #[error("YAML serialization error: {0}")]
    Serialization(String),

    /// Any other driver or server failure.
    #[error("Neo4j query failed: {0}")]
    Database(String),
}

impl From<serde_yaml::Error> for ExportError {
    fn from(err: serde_yaml::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl From<serde_json::Error> for ExportError {
    fn from(err: serde_json::Error) -> Self {
        ExportError::Serialization(err.to_string())
    }
}

impl ExportError {
    /// Short category name, used in structured log lines.
    pub fn category(&self) -> &'static str {
        match self {
            ExportError::Connectivity(_) => "connectivity",
            ExportError::Authentication(_) => "authentication",
            ExportError::QuerySyntax(_) => "query_syntax",
            ExportError::Filesystem(_) => "filesystem",
            ExportError::Serialization(_) => "serialization",
            ExportError::Database(_) => "database",
        }
    }

    /// Underlying driver or library detail, for logging alongside the diagnostic.
    pub fn detail(&self) -> String {
        match self {
            ExportError::Connectivity(detail)
            | ExportError::Authentication(detail)
            | ExportError::QuerySyntax(detail)
            | ExportError::Serialization(detail)
            | ExportError::Database(detail) => detail.clone(),
            ExportError::Filesystem(e) => e.to_string(),
        }
    }
}
