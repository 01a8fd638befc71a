//! Error types for Networth core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-friendly messages and exit codes.

use thiserror::Error;

/// Result type alias for Networth operations.
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Core error type for ledger operations.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// A value failed validation (negative amount, non-finite number)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Year or record not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Invalid user input (unknown category, malformed date)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backup data rejected on import
    #[error("Import error: {0}")]
    Import(String),

    /// Store backend error
    #[error("Storage error: {0}")]
    Storage(String),

    /// Benchmark projection needs a positive first-year net worth
    #[error("Insufficient baseline: first net worth is {baseline}, projections need a positive value")]
    InsufficientBaseline { baseline: f64 },
}

impl LedgerError {
    /// Whether this error is the soft "unknown year or id" failure.
    pub fn is_not_found(&self) -> bool {
        matches!(self, LedgerError::NotFound(_))
    }
}

impl From<std::io::Error> for LedgerError {
    fn from(err: std::io::Error) -> Self {
        LedgerError::Storage(err.to_string())
    }
}

impl From<serde_json::Error> for LedgerError {
    fn from(err: serde_json::Error) -> Self {
        LedgerError::Import(err.to_string())
    }
}
