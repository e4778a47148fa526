//! Shared error types for the application

use thiserror::Error;

/// Main error type for accessmap operations
#[derive(Debug, Error)]
pub enum Error {
    /// A sheet is missing one or more required columns
    #[error("{table} file is missing columns: {}", columns.join(", "))]
    MissingColumns { table: String, columns: Vec<String> },

    /// A sheet has no header row at all
    #[error("{0} file has no header row")]
    EmptyTable(String),

    /// IO errors
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// CSV parse errors
    #[error(transparent)]
    Csv(#[from] csv::Error),

    /// JSON errors
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create a missing-columns error for a named sheet
    pub fn missing_columns(table: impl Into<String>, columns: Vec<String>) -> Self {
        Self::MissingColumns {
            table: table.into(),
            columns,
        }
    }
}

/// Result type alias using our error type
pub type Result<T> = std::result::Result<T, Error>;
