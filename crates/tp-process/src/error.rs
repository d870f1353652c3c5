//! Error taxonomy for process solving.
//!
//! Every error is request-scoped: a failed solve never affects other
//! concurrent requests, and the engine never retries internally.

use thiserror::Error;
use tp_substances::SubstanceError;

/// Result type for process operations.
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Errors that can occur while solving a process request.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ProcessError {
    /// A required field is missing, extraneous, or the provided field set
    /// does not match what the process variant requires.
    #[error("invalid request: {what}")]
    Validation { what: String },

    /// A value is physically invalid (non-positive P/V/T, or a property
    /// model input outside its valid range).
    #[error("{what}")]
    Domain { what: String },

    /// A process-specific input is mathematically unusable for the chosen
    /// variant.
    #[error("invalid process input: {what}")]
    InvalidInput { what: String },

    /// No registered substance model for the requested key.
    #[error("unknown substance: {key}")]
    UnsupportedSubstance { key: String },
}

impl From<SubstanceError> for ProcessError {
    fn from(err: SubstanceError) -> Self {
        ProcessError::Domain {
            what: err.to_string(),
        }
    }
}
