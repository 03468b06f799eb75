//! Configuration constants.
//!
//! Environment variable names, output locations and file names used
//! throughout the application.

// Connection environment variables
/// Bolt URI of the database, e.g. `neo4j://localhost:7687`
pub const ENV_NEO4J_URI: &str = "NEO4J_URI";
/// Username used to authenticate
pub const ENV_NEO4J_USER: &str = "NEO4J_USER";
/// Password used to authenticate
pub const ENV_NEO4J_PASSWORD: &str = "NEO4J_PASSWORD";
/// Optional target database name (server default when unset)
pub const ENV_NEO4J_DATABASE: &str = "NEO4J_DATABASE";

/// Connection URI used when `NEO4J_URI` is unset
pub const DEFAULT_NEO4J_URI: &str = "neo4j://localhost:7687";
/// Username used when `NEO4J_USER` is unset
pub const DEFAULT_NEO4J_USER: &str = "neo4j";

/// Directory the YAML files are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "../schema";

// Output file names, one per result set
/// Node label/property types
pub const NODES_FILE: &str = "lg_nodes.yaml";
/// Relationship type/property types
pub const RELATIONSHIPS_FILE: &str = "lg_relationships.yaml";
/// Constraints
pub const CONSTRAINTS_FILE: &str = "lg_constraints.yaml";
/// Indexes
pub const INDEXES_FILE: &str = "lg_indexes.yaml";
