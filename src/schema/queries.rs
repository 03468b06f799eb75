//! The four schema introspection queries.

use strum_macros::EnumIter;

use crate::config::{
    ListingSyntax, CONSTRAINTS_FILE, INDEXES_FILE, NODES_FILE, RELATIONSHIPS_FILE,
};

const NODE_COLUMNS: &[&str] = &["nodeLabels", "propertyName", "propertyTypes"];
const RELATIONSHIP_COLUMNS: &[&str] = &["relType", "propertyName", "propertyTypes"];

// Neo4j 4.x `db.constraints()` / `db.indexes()` columns
const PROCEDURE_CONSTRAINT_COLUMNS: &[&str] = &["name", "description", "details"];
const PROCEDURE_INDEX_COLUMNS: &[&str] = &[
    "id",
    "name",
    "state",
    "populationPercent",
    "uniqueness",
    "type",
    "entityType",
    "labelsOrTypes",
    "properties",
    "provider",
];

// Neo4j 5.x `SHOW` columns; lastRead/readCount change between runs and are left out
const SHOW_CONSTRAINT_COLUMNS: &[&str] = &[
    "id",
    "name",
    "type",
    "entityType",
    "labelsOrTypes",
    "properties",
    "ownedIndex",
];
const SHOW_INDEX_COLUMNS: &[&str] = &[
    "id",
    "name",
    "state",
    "populationPercent",
    "type",
    "entityType",
    "labelsOrTypes",
    "properties",
    "indexProvider",
    "owningConstraint",
];

/// One of the fixed, read-only schema queries.
///
/// Variants are declared in execution order; `SchemaQuery::iter()` yields them
/// in that order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum SchemaQuery {
    /// Node label sets and their property types
    NodeProperties,
    /// Relationship types and their property types
    RelationshipProperties,
    /// Defined constraints
    Constraints,
    /// Defined indexes
    Indexes,
}

impl SchemaQuery {
    /// Result columns, in the order they are written to the output file.
    ///
    /// The driver hands rows over as unordered maps, so each record is rebuilt
    /// from this list.
    pub fn columns(&self, listing: ListingSyntax) -> &'static [&'static str] {
        match (self, listing) {
            (SchemaQuery::NodeProperties, _) => NODE_COLUMNS,
            (SchemaQuery::RelationshipProperties, _) => RELATIONSHIP_COLUMNS,
            (SchemaQuery::Constraints, ListingSyntax::Procedures) => PROCEDURE_CONSTRAINT_COLUMNS,
            (SchemaQuery::Constraints, ListingSyntax::Show) => SHOW_CONSTRAINT_COLUMNS,
            (SchemaQuery::Indexes, ListingSyntax::Procedures) => PROCEDURE_INDEX_COLUMNS,
            (SchemaQuery::Indexes, ListingSyntax::Show) => SHOW_INDEX_COLUMNS,
        }
    }

    /// Cypher text for this query, yielding exactly [`SchemaQuery::columns`].
    ///
    /// The first two are explicitly ordered by label set / relationship type and
    /// then property name. Constraints and indexes come back in database order.
    pub fn cypher(&self, listing: ListingSyntax) -> String {
        let columns = self.columns(listing).join(", ");
        match (self, listing) {
            (SchemaQuery::NodeProperties, _) => format!(
                "CALL db.schema.nodeTypeProperties() YIELD {columns} \
                 RETURN {columns} ORDER BY nodeLabels, propertyName"
            ),
            (SchemaQuery::RelationshipProperties, _) => format!(
                "CALL db.schema.relTypeProperties() YIELD {columns} \
                 RETURN {columns} ORDER BY relType, propertyName"
            ),
            (SchemaQuery::Constraints, ListingSyntax::Procedures) => {
                format!("CALL db.constraints() YIELD {columns} RETURN {columns}")
            }
            (SchemaQuery::Constraints, ListingSyntax::Show) => {
                format!("SHOW CONSTRAINTS YIELD {columns}")
            }
            (SchemaQuery::Indexes, ListingSyntax::Procedures) => {
                format!("CALL db.indexes() YIELD {columns} RETURN {columns}")
            }
            (SchemaQuery::Indexes, ListingSyntax::Show) => format!("SHOW INDEXES YIELD {columns}"),
        }
    }

    /// Output file name for this query's result set.
    pub fn file_name(&self) -> &'static str {
        match self {
            SchemaQuery::NodeProperties => NODES_FILE,
            SchemaQuery::RelationshipProperties => RELATIONSHIPS_FILE,
            SchemaQuery::Constraints => CONSTRAINTS_FILE,
            SchemaQuery::Indexes => INDEXES_FILE,
        }
    }

    /// Short name used in logs and reports.
    pub fn label(&self) -> &'static str {
        match self {
            SchemaQuery::NodeProperties => "nodes",
            SchemaQuery::RelationshipProperties => "relationships",
            SchemaQuery::Constraints => "constraints",
            SchemaQuery::Indexes => "indexes",
        }
    }
}

impl std::fmt::Display for SchemaQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
