//! Result rows returned by the schema queries.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error_handling::ExportError;

/// One result row as returned by the database.
///
/// Field order is the column order of the query result (`serde_json` is built
/// with `preserve_order`), and values stay loosely typed because constraint
/// and index listings differ between server versions.
pub type Record = serde_json::Map<String, Value>;

/// A property of a node label set, from `db.schema.nodeTypeProperties()`.
///
/// Labels without any property are reported once with a null property name
/// and null types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePropertyRow {
    /// Label set the property belongs to
    pub node_labels: Vec<String>,
    /// Property name (`None` for a label set without properties)
    pub property_name: Option<String>,
    /// Types observed for the property, e.g. `String`, `Long`
    pub property_types: Option<Vec<String>>,
}

/// A property of a relationship type, from `db.schema.relTypeProperties()`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RelationshipPropertyRow {
    /// Relationship type as the server reports it (``:`ACTED_IN` ``)
    pub rel_type: String,
    /// Property name (`None` for a type without properties)
    pub property_name: Option<String>,
    /// Types observed for the property
    pub property_types: Option<Vec<String>>,
}

/// The four result sets of one export run.
#[derive(Debug, Clone, Default)]
pub struct SchemaSnapshot {
    /// Node property listing
    pub nodes: Vec<NodePropertyRow>,
    /// Relationship property listing
    pub relationships: Vec<RelationshipPropertyRow>,
    /// Constraint listing
    pub constraints: Vec<Record>,
    /// Index listing
    pub indexes: Vec<Record>,
}

/// Decodes raw records into typed rows, keeping their order.
///
/// # Errors
///
/// Returns `ExportError::Serialization` if a record does not have the
/// expected shape.
pub fn decode_rows<T: DeserializeOwned>(records: Vec<Record>) -> Result<Vec<T>, ExportError> {
    records
        .into_iter()
        .map(|record| serde_json::from_value(Value::Object(record)).map_err(ExportError::from))
        .collect()
}
