//! Error types for the plate check

use thiserror::Error;

/// Errors raised at the input boundary.
///
/// The calculation itself never fails; everything here comes from reading
/// or validating the inputs handed to it.
#[derive(Error, Debug)]
pub enum CalcError {
    #[error("{field} must be at least {min} (got {value})")]
    BelowMinimum {
        field: &'static str,
        min: f64,
        value: f64,
    },

    #[error("{field} must be at most {max} (got {value})")]
    AboveMaximum {
        field: &'static str,
        max: f64,
        value: f64,
    },

    #[error("{0} must be a finite number")]
    NonFinite(&'static str),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl CalcError {
    /// Name of the offending input field, when the error is tied to one
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CalcError::BelowMinimum { field, .. }
            | CalcError::AboveMaximum { field, .. }
            | CalcError::NonFinite(field) => Some(*field),
            _ => None,
        }
    }
}

/// Result type for plate check operations
pub type CalcResult<T> = Result<T, CalcError>;
