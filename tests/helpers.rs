// Shared test helpers: an in-memory schema source and record builders.
//
// This module provides common utilities used across multiple test files to reduce duplication.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;
use serde_json::{json, Value};

use neo4j_schema_export::schema::{Record, SchemaQuery};
use neo4j_schema_export::{ExportError, SchemaSource};

/// Builds a `Record` from a JSON object literal, keeping key order.
pub fn record(value: Value) -> Record {
    match value {
        Value::Object(map) => map,
        other => panic!("record must be a JSON object, got {other}"),
    }
}

/// In-memory `SchemaSource` with scripted responses.
///
/// Queries without a scripted response return an empty result set.
#[derive(Default)]
pub struct FakeSource {
    open_error: Option<ExportError>,
    responses: HashMap<SchemaQuery, Result<Vec<Record>, ExportError>>,
    opened: bool,
    /// Queries in the order they were fetched
    pub fetched: Vec<SchemaQuery>,
    /// Number of `open` calls
    pub open_calls: usize,
    /// Number of `close` calls
    pub close_calls: usize,
}

#[allow(dead_code)] // Not every test file uses every builder
impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, query: SchemaQuery, records: Vec<Record>) -> Self {
        self.responses.insert(query, Ok(records));
        self
    }

    pub fn failing_open(mut self, error: ExportError) -> Self {
        self.open_error = Some(error);
        self
    }

    pub fn failing_fetch(mut self, query: SchemaQuery, error: ExportError) -> Self {
        self.responses.insert(query, Err(error));
        self
    }
}

#[async_trait]
impl SchemaSource for FakeSource {
    async fn open(&mut self) -> Result<(), ExportError> {
        self.open_calls += 1;
        if let Some(error) = self.open_error.take() {
            return Err(error);
        }
        self.opened = true;
        Ok(())
    }

    async fn fetch(&mut self, query: SchemaQuery) -> Result<Vec<Record>, ExportError> {
        assert!(self.opened, "fetch called before open");
        self.fetched.push(query);
        self.responses.remove(&query).unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn close(&mut self) {
        self.opened = false;
        self.close_calls += 1;
    }
}

/// A source resembling a small movie graph.
#[allow(dead_code)]
pub fn movie_graph_source() -> FakeSource {
    FakeSource::new()
        .with_records(
            SchemaQuery::NodeProperties,
            vec![
                record(json!({"nodeLabels": ["Movie"], "propertyName": "released", "propertyTypes": ["Long"]})),
                record(json!({"nodeLabels": ["Movie"], "propertyName": "title", "propertyTypes": ["String"]})),
                record(json!({"nodeLabels": ["Person"], "propertyName": "born", "propertyTypes": ["Long"]})),
                record(json!({"nodeLabels": ["Person"], "propertyName": "name", "propertyTypes": ["String"]})),
            ],
        )
        .with_records(
            SchemaQuery::RelationshipProperties,
            vec![
                record(json!({"relType": ":`ACTED_IN`", "propertyName": "roles", "propertyTypes": ["StringArray"]})),
                record(json!({"relType": ":`DIRECTED`", "propertyName": null, "propertyTypes": null})),
            ],
        )
        .with_records(
            SchemaQuery::Constraints,
            vec![record(json!({
                "name": "constraint_person_name",
                "description": "CONSTRAINT ON ( person:Person ) ASSERT (person.name) IS UNIQUE",
                "details": "Constraint( id=3, name='constraint_person_name', type='UNIQUENESS' )"
            }))],
        )
        .with_records(
            SchemaQuery::Indexes,
            vec![
                record(json!({
                    "id": 1,
                    "name": "constraint_person_name",
                    "state": "ONLINE",
                    "populationPercent": 100.0,
                    "uniqueness": "UNIQUE",
                    "type": "BTREE",
                    "entityType": "NODE",
                    "labelsOrTypes": ["Person"],
                    "properties": ["name"],
                    "provider": "native-btree-1.0"
                })),
                record(json!({
                    "id": 2,
                    "name": "movie_title",
                    "state": "ONLINE",
                    "populationPercent": 100.0,
                    "uniqueness": "NONUNIQUE",
                    "type": "BTREE",
                    "entityType": "NODE",
                    "labelsOrTypes": ["Movie"],
                    "properties": ["title"],
                    "provider": "native-btree-1.0"
                })),
            ],
        )
}

/// Reads a YAML file back as a list of ordered mappings.
#[allow(dead_code)]
pub fn read_yaml_records(path: &Path) -> Vec<serde_yaml::Mapping> {
    let text = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    serde_yaml::from_str(&text)
        .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
}

/// Keys of a YAML mapping, in file order.
#[allow(dead_code)]
pub fn mapping_keys(mapping: &serde_yaml::Mapping) -> Vec<String> {
    mapping
        .keys()
        .map(|k| k.as_str().expect("string key").to_string())
        .collect()
}
