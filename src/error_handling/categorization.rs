//! Error categorization.
//!
//! Maps `neo4rs` driver errors and Neo4j server status codes onto the
//! `ExportError` categories.

use log::warn;

use super::types::ExportError;

/// Categorizes a `neo4rs::Error` into an `ExportError`.
///
/// Transport-level failures (socket I/O, unparsable URI, unsupported scheme)
/// are connectivity failures. Server failures are classified by their status
/// code via [`categorize_server_code`]. Anything else is reported as a generic
/// database failure rather than crashing the run.
pub fn categorize_driver_error(error: neo4rs::Error) -> ExportError {
    match error {
        neo4rs::Error::IOError { detail } => ExportError::Connectivity(detail.to_string()),
        neo4rs::Error::ConnectionError => {
            ExportError::Connectivity("connection to the server was lost".to_string())
        }
        neo4rs::Error::UrlParseError(e) => ExportError::Connectivity(format!("invalid URI: {e}")),
        neo4rs::Error::UnsupportedScheme(scheme) => {
            ExportError::Connectivity(format!("unsupported URI scheme: {scheme}"))
        }
        neo4rs::Error::AuthenticationError(detail) => ExportError::Authentication(detail),
        neo4rs::Error::Neo4j(e) => categorize_server_code(e.code(), e.message()),
        other => ExportError::Database(other.to_string()),
    }
}

/// Categorizes a Neo4j status code (`Neo.<Classification>.<Category>.<Title>`).
///
/// # Arguments
///
/// * `code` - The status code reported by the server
/// * `message` - The server's human-readable message
pub fn categorize_server_code(code: &str, message: &str) -> ExportError {
    let mut parts = code.split('.');
    let _neo = parts.next();
    let classification = parts.next().unwrap_or_default();
    let category = parts.next().unwrap_or_default();
    let title = parts.next().unwrap_or_default();

    match (classification, category, title) {
        ("ClientError", "Security", "Unauthorized" | "AuthenticationRateLimit") => {
            ExportError::Authentication(message.to_string())
        }
        ("ClientError", "Statement", "SyntaxError") => {
            ExportError::QuerySyntax(message.to_string())
        }
        (_, _, "DatabaseUnavailable" | "ServiceUnavailable") => {
            ExportError::Connectivity(message.to_string())
        }
        ("ClientError", "Procedure", "ProcedureNotFound") => {
            warn!("Listing procedure not found; on Neo4j 5.x use --listing-syntax show");
            ExportError::Database(format!("{code}: {message}"))
        }
        _ => ExportError::Database(format!("{code}: {message}")),
    }
}
