//! Error types for configuration and batch processing.
//!
//! Calculation errors live in [`crate::milhdbk217f::error`]; the types here
//! cover everything around the engine: reading configuration, resolving
//! input patterns, parsing parts lists and writing reports.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file could not be read.
    #[error("failed to read configuration file: {path}")]
    ReadError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("failed to parse configuration file: {path}")]
    ParseError {
        /// Path to the configuration file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Configuration file not found.
    #[error("configuration file not found: {path}")]
    NotFound {
        /// Path where the configuration file was expected.
        path: PathBuf,
    },

    /// Configuration validation failed.
    #[error("configuration validation failed: {message}")]
    ValidationError {
        /// Description of the validation failure.
        message: String,
    },
}

/// Result type for batch operations.
pub type BatchResult<T> = Result<T, BatchError>;

/// Errors that can occur while loading parts lists or writing reports.
#[derive(Error, Debug)]
pub enum BatchError {
    /// Input pattern is not a valid glob.
    #[error("invalid input pattern: {pattern}")]
    Pattern {
        /// The pattern as given.
        pattern: String,
        /// The underlying glob error.
        #[source]
        source: glob::PatternError,
    },

    /// Input pattern matched no files.
    #[error("no input files match: {pattern}")]
    NoMatch {
        /// The pattern as given.
        pattern: String,
    },

    /// Input file has an extension other than `.json` or `.csv`.
    #[error("unsupported input format: {path}")]
    UnsupportedFormat {
        /// Path to the input file.
        path: PathBuf,
    },

    /// Input file could not be read.
    #[error("failed to read input file: {path}")]
    Read {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// JSON parts list could not be parsed.
    #[error("failed to parse JSON parts list: {path}")]
    Json {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// CSV parts list could not be parsed.
    #[error("failed to parse CSV parts list: {path}")]
    Csv {
        /// Path to the input file.
        path: PathBuf,
        /// The underlying CSV error.
        #[source]
        source: csv::Error,
    },

    /// Report could not be serialised.
    #[error("failed to serialise report")]
    Serialise {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Report could not be written.
    #[error("failed to write report: {path}")]
    Write {
        /// Path to the report file.
        path: PathBuf,
        /// The underlying IO error.
        #[source]
        source: std::io::Error,
    },
}
