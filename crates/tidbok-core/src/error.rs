//! Core error types for tidbok-core.
//!
//! Store and timer operations keep the original silent-no-op contract for
//! missing identifiers and report their outcome through `Option`/`bool`
//! return values instead. Everything that touches the filesystem, the
//! report provider, or serialization fails loudly through these types.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for tidbok-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Report fetch/aggregation errors
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// CSV export errors
    #[error("Export error: {0}")]
    Export(#[from] ExportError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key passed to get/set
    #[error("Unknown configuration key: {0}")]
    UnknownKey(String),

    /// Failed to parse a configuration value
    #[error("Cannot parse '{value}' for key '{key}': {message}")]
    ParseFailed {
        key: String,
        value: String,
        message: String,
    },
}

/// Report provider errors.
///
/// The bundled sample provider never fails; the variant exists so real
/// providers have a defined failure path to surface to the view layer.
#[derive(Error, Debug)]
pub enum ReportError {
    /// Provider could not produce a dataset
    #[error("Report fetch failed: {0}")]
    FetchFailed(String),
}

/// CSV export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Underlying CSV writer failed
    #[error("CSV write failed: {0}")]
    Csv(#[from] csv::Error),

    /// Writer buffer held invalid UTF-8
    #[error("CSV output was not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Validation errors.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Invalid time range
    #[error("Invalid time range: end_time ({end}) must be greater than start_time ({start})")]
    InvalidTimeRange {
        start: chrono::DateTime<chrono::Utc>,
        end: chrono::DateTime<chrono::Utc>,
    },

    /// Invalid value
    #[error("Invalid value for '{field}': {message}")]
    InvalidValue { field: String, message: String },
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
