//! Export functionality for schema snapshots.
//!
//! This module writes the four schema result sets to YAML files, one file per
//! result set.

mod types;
mod yaml;

pub use types::{ExportOptions, ExportReport, WrittenFile};
pub use yaml::{ensure_output_dir, render_yaml, write_snapshot};
