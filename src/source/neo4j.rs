//! `SchemaSource` backed by a live Neo4j server via `neo4rs`.

use async_trait::async_trait;
use log::{debug, info};
use neo4rs::{query, Graph, Row};
use serde_json::Value;

use crate::config::Config;
use crate::error_handling::{categorize_driver_error, ExportError};
use crate::initialization::init_graph;
use crate::schema::{Record, SchemaQuery};

use super::SchemaSource;

/// Neo4j connection owned by one export run.
///
/// The connection is acquired by `open` and released by `close`; if the
/// source is dropped while still open, the drop releases it.
pub struct Neo4jSource {
    config: Config,
    graph: Option<Graph>,
}

impl Neo4jSource {
    /// Creates a source for the given configuration without connecting.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            graph: None,
        }
    }

    /// Whether `open` succeeded and `close` has not run yet.
    pub fn is_open(&self) -> bool {
        self.graph.is_some()
    }
}

#[async_trait]
impl SchemaSource for Neo4jSource {
    async fn open(&mut self) -> Result<(), ExportError> {
        if self.graph.is_none() {
            info!("Connecting to Neo4j at {}", self.config.uri);
            self.graph = Some(init_graph(&self.config).await?);
        }
        Ok(())
    }

    async fn fetch(&mut self, schema_query: SchemaQuery) -> Result<Vec<Record>, ExportError> {
        let graph = self
            .graph
            .as_ref()
            .ok_or_else(|| ExportError::Connectivity("connection is not open".to_string()))?;
        let columns = schema_query.columns(self.config.listing_syntax);
        let cypher = schema_query.cypher(self.config.listing_syntax);
        debug!("Running {} query: {}", schema_query, cypher);

        let mut txn = graph.start_txn().await.map_err(categorize_driver_error)?;
        let mut rows = txn
            .execute(query(&cypher))
            .await
            .map_err(categorize_driver_error)?;

        let mut records = Vec::new();
        while let Some(row) = rows
            .next(txn.handle())
            .await
            .map_err(categorize_driver_error)?
        {
            records.push(record_from_row(&row, columns)?);
        }

        // Nothing was written; end the transaction without committing.
        txn.rollback().await.map_err(categorize_driver_error)?;
        Ok(records)
    }

    async fn close(&mut self) {
        if self.graph.take().is_some() {
            debug!("Released Neo4j connection");
        }
    }
}

/// Builds a `Record` from a driver row, with keys in `columns` order.
///
/// `neo4rs` keeps a row's columns in a hash map, so key order has to come from
/// the query's declared column list rather than from the row itself.
///
/// # Errors
///
/// Returns `ExportError::Serialization` if a column is missing from the row or
/// its value has no JSON representation.
pub fn record_from_row(row: &Row, columns: &[&str]) -> Result<Record, ExportError> {
    let mut record = Record::new();
    for column in columns {
        let value: Value = row
            .get(column)
            .map_err(|e| ExportError::Serialization(format!("column `{column}`: {e}")))?;
        record.insert((*column).to_string(), value);
    }
    Ok(record)
}

impl Drop for Neo4jSource {
    fn drop(&mut self) {
        if self.graph.take().is_some() {
            debug!("Released Neo4j connection on drop");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ListingSyntax;
    use crate::export::render_yaml;
    use neo4rs::{BoltList, BoltType};

    fn bolt_list<T: Into<BoltType>>(items: Vec<T>) -> BoltList {
        let mut list = BoltList::new();
        for item in items {
            list.push(item.into());
        }
        list
    }

    fn index_row(fields: &[&str]) -> Row {
        let values: Vec<BoltType> = fields
            .iter()
            .map(|field| match *field {
                "id" => BoltType::from(7_i64),
                "populationPercent" => BoltType::from(100.0_f64),
                "labelsOrTypes" => BoltType::List(bolt_list(vec!["Person"])),
                "properties" => BoltType::List(bolt_list(vec!["name"])),
                "name" => BoltType::from("person_name"),
                "state" => BoltType::from("ONLINE"),
                "uniqueness" => BoltType::from("UNIQUE"),
                "type" => BoltType::from("BTREE"),
                "entityType" => BoltType::from("NODE"),
                "provider" => BoltType::from("native-btree-1.0"),
                other => BoltType::from(other),
            })
            .collect();
        Row::new(bolt_list(fields.to_vec()), bolt_list(values))
    }

    #[test]
    fn test_record_from_row_keeps_column_order() {
        let columns = SchemaQuery::Indexes.columns(ListingSyntax::Procedures);
        let row = index_row(columns);

        let record = record_from_row(&row, columns).expect("convert");
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, columns);
        assert_eq!(record["id"], Value::from(7));
        assert_eq!(record["labelsOrTypes"], serde_json::json!(["Person"]));
    }

    #[test]
    fn test_record_from_row_follows_columns_not_row_layout() {
        let columns = SchemaQuery::Indexes.columns(ListingSyntax::Procedures);
        let mut shuffled: Vec<&str> = columns.to_vec();
        shuffled.reverse();
        let row = index_row(&shuffled);

        let record = record_from_row(&row, columns).expect("convert");
        let keys: Vec<&str> = record.keys().map(String::as_str).collect();
        assert_eq!(keys, columns);
    }

    #[test]
    fn test_record_from_row_renders_identically_every_time() {
        let columns = SchemaQuery::Indexes.columns(ListingSyntax::Procedures);
        let first = vec![record_from_row(&index_row(columns), columns).expect("convert")];
        let second = vec![record_from_row(&index_row(columns), columns).expect("convert")];

        let first_yaml = render_yaml(&first).expect("render");
        assert_eq!(first_yaml, render_yaml(&second).expect("render"));
        assert!(first_yaml.starts_with("- id: 7\n  name: person_name\n  state: ONLINE\n"));
    }

    #[test]
    fn test_record_from_row_missing_column_is_serialization_error() {
        let row = index_row(&["id", "name"]);
        let result = record_from_row(&row, &["id", "name", "state"]);
        match result {
            Err(ExportError::Serialization(msg)) => assert!(msg.contains("state")),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_fetch_before_open_is_connectivity_error() {
        let mut source = Neo4jSource::new(Config::default());
        let result = source.fetch(SchemaQuery::NodeProperties).await;
        assert!(matches!(result, Err(ExportError::Connectivity(_))));
    }

    #[tokio::test]
    async fn test_close_without_open_is_noop() {
        let mut source = Neo4jSource::new(Config::default());
        source.close().await;
        source.close().await;
        assert!(!source.is_open());
    }
}
