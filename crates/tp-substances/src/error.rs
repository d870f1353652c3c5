//! Substance property errors.

use thiserror::Error;

/// Result type for substance property operations.
pub type SubstanceResult<T> = Result<T, SubstanceError>;

/// Errors that can occur while evaluating substance property relations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubstanceError {
    /// Non-physical values (non-positive pressure, volume, temperature, mass).
    #[error("non-physical state: {what}")]
    NonPhysical { what: &'static str },

    /// Value outside the substance model's valid range.
    #[error("value out of range for {what}")]
    OutOfRange { what: &'static str },
}
