//! Error types for the tp-api service layer.

use tp_process::ProcessError;

/// Unified error for API consumers (CLI, HTTP adapters).
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    /// Stable machine-readable kind, for callers that translate errors
    /// into user-visible messages or HTTP statuses.
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::Process(ProcessError::Validation { .. }) => "validation_error",
            ApiError::Process(ProcessError::Domain { .. }) => "domain_error",
            ApiError::Process(ProcessError::InvalidInput { .. }) => "invalid_input_error",
            ApiError::Process(ProcessError::UnsupportedSubstance { .. }) => {
                "unsupported_substance_error"
            }
            ApiError::Io(_) => "io_error",
            ApiError::Json(_) => "json_error",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kinds_are_stable_strings() {
        let err: ApiError = ProcessError::UnsupportedSubstance {
            key: "x".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "unsupported_substance_error");

        let err: ApiError = ProcessError::Validation {
            what: "missing required input: P1".to_string(),
        }
        .into();
        assert_eq!(err.kind(), "validation_error");
        assert!(err.to_string().contains("P1"));
    }
}
