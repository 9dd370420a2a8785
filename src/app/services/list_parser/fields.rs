//! Fixed-column field classification
//!
//! A listing line carries numeric fields at fixed character columns. The
//! classifier slices the configured window out of a line and parses it,
//! distinguishing the expected in-file missing-value placeholder (which
//! propagates as NaN) from a genuinely malformed field (which degrades the
//! surrounding block and is worth a diagnostic).

use super::layout::ColumnWindow;
use crate::constants::MISSING_VALUE_TOKEN;

/// Per-field failure kinds
///
/// `Missing` is data-dependent and expected; `Malformed` is not. Both degrade
/// the current block to NaN at the block level, but only `Malformed` is
/// diagnostic-worthy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("field '{field}' is the missing-value placeholder")]
    Missing { field: String },

    #[error("field '{field}' is not numeric")]
    Malformed { field: String },
}

/// Classify a numeric field at the given window
///
/// Returns the parsed value, NaN when the trimmed field contains the
/// missing-value placeholder, or `Malformed` for anything else.
pub fn classify_value(line: &str, window: ColumnWindow) -> Result<f64, FieldError> {
    let field = window.slice(line);
    let trimmed = field.trim();
    match trimmed.parse::<f64>() {
        Ok(value) => Ok(value),
        Err(_) => {
            if trimmed.to_ascii_uppercase().contains(MISSING_VALUE_TOKEN) {
                Err(FieldError::Missing {
                    field: trimmed.to_string(),
                })
            } else {
                Err(FieldError::Malformed {
                    field: trimmed.to_string(),
                })
            }
        }
    }
}

/// Classify a numeric field, folding the missing placeholder into NaN
///
/// This is the block extractors' view: a missing placeholder is a value.
pub fn classify_value_or_nan(line: &str, window: ColumnWindow) -> Result<f64, FieldError> {
    match classify_value(line, window) {
        Ok(value) => Ok(value),
        Err(FieldError::Missing { .. }) => Ok(f64::NAN),
        Err(err) => Err(err),
    }
}

/// Classify an index field (timestep or stress-period number)
///
/// Index fields have no missing placeholder; any parse failure is malformed.
pub fn classify_index(line: &str, window: ColumnWindow) -> Result<u32, FieldError> {
    let field = window.slice(line);
    let trimmed = field.trim();
    trimmed.parse::<u32>().map_err(|_| FieldError::Malformed {
        field: trimmed.to_string(),
    })
}

/// Classify the (timestep, stress period) pair on a block header line
pub fn classify_step_period(
    line: &str,
    time_step: ColumnWindow,
    stress_period: ColumnWindow,
) -> Result<(u32, u32), FieldError> {
    Ok((
        classify_index(line, time_step)?,
        classify_index(line, stress_period)?,
    ))
}
