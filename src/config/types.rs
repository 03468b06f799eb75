//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::fmt;
use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_NEO4J_URI, DEFAULT_NEO4J_USER, DEFAULT_OUTPUT_DIR, ENV_NEO4J_DATABASE,
    ENV_NEO4J_PASSWORD, ENV_NEO4J_URI, ENV_NEO4J_USER,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Which Cypher form lists constraints and indexes.
///
/// Neo4j 4.x exposes `db.constraints()` / `db.indexes()` procedures; those were
/// removed in 5.x in favour of the `SHOW CONSTRAINTS` / `SHOW INDEXES` commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ListingSyntax {
    /// `CALL db.constraints()` and `CALL db.indexes()`
    Procedures,
    /// `SHOW CONSTRAINTS` and `SHOW INDEXES`
    Show,
}

/// Command-line options.
///
/// Every option falls back to an environment variable or a default, so the
/// exporter runs with no arguments at all. Defaults match `Config::default()`.
/// Connection values are not validated here; bad ones surface as connection or
/// authentication failures.
///
/// # Examples
///
/// ```bash
/// # Credentials from the environment (or a .env file)
/// NEO4J_URI=neo4j://localhost:7687 NEO4J_USER=neo4j NEO4J_PASSWORD=secret neo4j_schema_export
///
/// # Neo4j 5.x with a custom output directory
/// neo4j_schema_export --listing-syntax show --output-dir ./schema
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "neo4j_schema_export",
    about = "Exports the schema of a Neo4j database to YAML files."
)]
pub struct Opt {
    /// Connection URI
    #[arg(long, env = ENV_NEO4J_URI, default_value = DEFAULT_NEO4J_URI)]
    pub uri: String,

    /// Username
    #[arg(long, env = ENV_NEO4J_USER, default_value = DEFAULT_NEO4J_USER)]
    pub user: String,

    /// Password
    #[arg(long, env = ENV_NEO4J_PASSWORD, default_value = "", hide_env_values = true)]
    pub password: String,

    /// Database name (server default when omitted)
    #[arg(long, env = ENV_NEO4J_DATABASE)]
    pub database: Option<String>,

    /// Directory the four YAML files are written to
    #[arg(long, value_parser, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: PathBuf,

    /// Constraint/index listing syntax: procedures (Neo4j 4.x) | show (Neo4j 5.x)
    #[arg(long, value_enum, default_value_t = ListingSyntax::Procedures)]
    pub listing_syntax: ListingSyntax,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,
}

/// Library configuration (no CLI dependencies).
///
/// Built once at startup and passed to [`crate::run_export`].
///
/// # Examples
///
/// ```no_run
/// use neo4j_schema_export::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     uri: "neo4j://db.internal:7687".to_string(),
///     password: "secret".to_string(),
///     output_dir: PathBuf::from("./schema"),
///     ..Default::default()
/// };
/// ```
#[derive(Clone)]
pub struct Config {
    /// Connection URI
    pub uri: String,

    /// Username
    pub user: String,

    /// Password
    pub password: String,

    /// Target database (server default when `None`)
    pub database: Option<String>,

    /// Output directory for the YAML files
    pub output_dir: PathBuf,

    /// Constraint/index listing syntax
    pub listing_syntax: ListingSyntax,

    /// Log level
    pub log_level: LogLevel,

    /// Log format
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            uri: DEFAULT_NEO4J_URI.to_string(),
            user: DEFAULT_NEO4J_USER.to_string(),
            password: String::new(),
            database: None,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            listing_syntax: ListingSyntax::Procedures,
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        Self {
            uri: opt.uri,
            user: opt.user,
            password: opt.password,
            database: opt.database.filter(|db| !db.is_empty()),
            output_dir: opt.output_dir,
            listing_syntax: opt.listing_syntax,
            log_level: opt.log_level,
            log_format: opt.log_format,
        }
    }
}

// Keeps the password out of debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("uri", &self.uri)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("database", &self.database)
            .field("output_dir", &self.output_dir)
            .field("listing_syntax", &self.listing_syntax)
            .field("log_level", &self.log_level)
            .field("log_format", &self.log_format)
            .finish()
    }
}
