//! Error types
//!
//! [BuildError] covers malformed input rows, [FormatError] the serialization formats and
//! [Error] everything a conversion can run into, including the I/O boundary.

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// A row that cannot be placed into a table
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    #[error("Malformed row {row}: data row appears before any heading row")]
    DataBeforeHeading { row: usize },
    #[error("Malformed row {row}: missing required field '{field}'")]
    MissingField { row: usize, field: String },
}

/// Error raised by a format or the format registry
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    #[error("Format '{0}' not found")]
    FormatNotFound(String),
    #[error("{0}")]
    NotSupported(String),
    #[error("Serialization error: {0}")]
    Serialization(String),
    #[error("Parse error: {0}")]
    Parse(String),
}

impl From<fmt::Error> for FormatError {
    fn from(err: fmt::Error) -> Self {
        FormatError::Serialization(err.to_string())
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("File does not exist: {}", .0.display())]
    InputNotFound(PathBuf),
    #[error("File must be a CSV file: {}", .0.display())]
    InputWrongType(PathBuf),
    #[error(transparent)]
    MalformedRow(#[from] BuildError),
    #[error("Failed to read CSV record: {0}")]
    Csv(#[from] csv::Error),
    #[error("Error writing to output file {}: {source}", .path.display())]
    OutputWriteFailure {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Format(#[from] FormatError),
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}
