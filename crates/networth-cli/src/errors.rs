//! CLI error types for structured error handling.
//!
//! Typed errors map to specific exit codes so every command reports
//! failures the same way.

use std::fmt;

use networth_core::LedgerError;

use crate::constants::exit_codes;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Resource not found (config, ledger file, record)
    NotFound { message: String, hint: String },

    /// Invalid user input
    InvalidInput {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::NotFound { message, .. } => write!(f, "{}", message),
            CliError::InvalidInput { message, .. } => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create a NotFound error with message and hint.
    pub fn not_found(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::NotFound {
            message: message.into(),
            hint: hint.into(),
        }
    }

    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: None,
        }
    }

    /// Create an InvalidInput error with a hint.
    pub fn invalid_input_with_hint(message: impl Into<String>, hint: impl Into<String>) -> Self {
        CliError::InvalidInput {
            message: message.into(),
            hint: Some(hint.into()),
        }
    }

    pub fn hint(&self) -> Option<&str> {
        match self {
            CliError::NotFound { hint, .. } => Some(hint),
            CliError::InvalidInput { hint, .. } => hint.as_deref(),
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::NotFound { .. } => exit_codes::NOT_FOUND,
            CliError::InvalidInput { .. } => exit_codes::INVALID_INPUT,
        }
    }
}

/// Exit code for any error returned by a command handler.
pub fn exit_code_for(err: &anyhow::Error) -> i32 {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.exit_code();
    }
    match err.downcast_ref::<LedgerError>() {
        Some(LedgerError::NotFound(_)) => exit_codes::NOT_FOUND,
        Some(
            LedgerError::Validation(_)
            | LedgerError::InvalidInput(_)
            | LedgerError::Import(_)
            | LedgerError::InsufficientBaseline { .. },
        ) => exit_codes::INVALID_INPUT,
        Some(LedgerError::Storage(_)) | None => exit_codes::GENERAL,
    }
}

/// Hint to print under an error, if one applies.
pub fn hint_for(err: &anyhow::Error) -> Option<String> {
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        return cli_err.hint().map(String::from);
    }
    let ledger_err = err.downcast_ref::<LedgerError>()?;
    let text = ledger_err.to_string().to_lowercase();
    let hint = match ledger_err {
        LedgerError::NotFound(_) if text.contains("year") => {
            "Run `networth year list` to see recorded years."
        }
        LedgerError::NotFound(_) if text.contains("milestone") => {
            "Run `networth milestone list` to find milestone IDs."
        }
        LedgerError::NotFound(_) if text.contains("salary") => {
            "Run `networth salary list` to find salary entry IDs."
        }
        LedgerError::NotFound(_) if text.contains("savings") => {
            "Run `networth savings list` to find savings entry IDs."
        }
        LedgerError::NotFound(_) => "Use the ID shown by the matching `list` command.",
        LedgerError::InsufficientBaseline { .. } => {
            "Benchmarks need a positive net worth in the first recorded year."
        }
        LedgerError::Import(_) => "The file must be a networth export with a \"years\" object.",
        _ => return None,
    };
    Some(hint.to_string())
}
