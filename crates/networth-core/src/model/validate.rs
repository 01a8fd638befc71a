//! Numeric input validation shared by every add/update path.

use crate::error::{LedgerError, Result};

/// Accept a finite value that is zero or greater.
pub fn non_negative(field: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(LedgerError::Validation(format!(
            "{} must be a finite number",
            field
        )));
    }
    if value < 0.0 {
        return Err(LedgerError::Validation(format!(
            "{} cannot be negative (got {})",
            field, value
        )));
    }
    Ok(value)
}

/// Accept a finite value strictly greater than zero.
pub fn positive(field: &str, value: f64) -> Result<f64> {
    let value = non_negative(field, value)?;
    if value == 0.0 {
        return Err(LedgerError::Validation(format!(
            "{} must be greater than zero",
            field
        )));
    }
    Ok(value)
}
