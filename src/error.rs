//! Error types shared by the loaders and the normaliser.

use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    ColumnNotFound(#[from] ColumnNotFound),

    #[error("{0}")]
    MalformedHeader(#[from] MalformedHeader),

    #[error("{0}")]
    RaggedRow(#[from] RaggedRow),

    #[error("{0}")]
    InvalidCell(#[from] InvalidCell),

    #[error("{0}")]
    InvalidConfig(#[from] InvalidConfig),
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("column '{0}' not found")]
pub struct ColumnNotFound(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
#[error("malformed header: {0}")]
pub struct MalformedHeader(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row} has {actual} cells, expected {expected}")]
pub struct RaggedRow {
    pub row: usize,
    pub expected: usize,
    pub actual: usize,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("row {row}, column '{column}': expected {expected}, got '{actual}'")]
pub struct InvalidCell {
    pub row: usize,
    pub column: String,
    pub expected: &'static str,
    pub actual: String,
}

#[derive(Debug, Clone, PartialEq, Error)]
#[error("unknown colour scheme '{0}', expected one of: green, white")]
pub struct UnknownColourScheme(pub String);

#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid config: {0}")]
pub struct InvalidConfig(pub String);
