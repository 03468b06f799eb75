//! Schema queries and their result rows.
//!
//! This module provides:
//! - The four fixed introspection queries (`SchemaQuery`)
//! - Typed rows for node and relationship property listings
//! - Open `Record` mappings for constraints and indexes

mod queries;
mod records;

pub use queries::SchemaQuery;
pub use records::{
    decode_rows, NodePropertyRow, Record, RelationshipPropertyRow, SchemaSnapshot,
};
