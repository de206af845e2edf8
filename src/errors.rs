//! Error types for the surveyctl CLI
//!
//! Each error type has a corresponding error code for programmatic handling.

use thiserror::Error;

/// Result type alias for surveyctl operations
pub type Result<T> = std::result::Result<T, SurveyctlError>;

/// Main error type for all surveyctl operations
#[derive(Debug, Error)]
pub enum SurveyctlError {
    /// Record validation failed (empty title, empty questions, ...)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Record not found for the given id
    #[error("Not found: {0}")]
    NotFound(String),

    /// Unrecognized lifecycle status value
    #[error("Invalid status: {0}")]
    InvalidStatus(String),

    /// Network or HTTP-level failure
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server returned an unexpected status code
    #[error("API error (HTTP {status}): {message}")]
    Api { status: u16, message: String },

    /// Status write succeeded but begin-processing failed. The stored status
    /// is Running even though processing was never launched; no automatic
    /// rollback is attempted.
    #[error("Inconsistent state for questionnaire {id}: status is Running but processing was not started: {message}")]
    InconsistentState { id: String, message: String },

    /// Invalid JSON format
    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    /// File not found
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// IO error wrapper
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed base URL or endpoint path
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl From<serde_json::Error> for SurveyctlError {
    fn from(e: serde_json::Error) -> Self {
        SurveyctlError::InvalidJson(e.to_string())
    }
}

impl SurveyctlError {
    /// Get the error code for this error type
    pub fn code(&self) -> &'static str {
        match self {
            SurveyctlError::Validation(_) => "VALIDATION",
            SurveyctlError::NotFound(_) => "NOT_FOUND",
            SurveyctlError::InvalidStatus(_) => "INVALID_STATUS",
            SurveyctlError::Transport(_) => "TRANSPORT",
            SurveyctlError::Api { .. } => "API",
            SurveyctlError::InconsistentState { .. } => "INCONSISTENT_STATE",
            SurveyctlError::InvalidJson(_) => "INVALID_JSON",
            SurveyctlError::FileNotFound(_) => "FILE_NOT_FOUND",
            SurveyctlError::ConfigError(_) => "CONFIG_ERROR",
            SurveyctlError::Io(_) => "IO_ERROR",
            SurveyctlError::InvalidUrl(_) => "INVALID_URL",
        }
    }
}

/// Convert an error to an appropriate exit code.
///
/// Inconsistent state gets a distinct code so scripts can tell "the toggle
/// failed cleanly" apart from "the store now disagrees with what you asked".
pub fn to_exit_code(error: &SurveyctlError) -> i32 {
    match error {
        SurveyctlError::InconsistentState { .. } => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(SurveyctlError::Validation("test".into()).code(), "VALIDATION");
        assert_eq!(SurveyctlError::NotFound("test".into()).code(), "NOT_FOUND");
        assert_eq!(SurveyctlError::InvalidStatus("test".into()).code(), "INVALID_STATUS");
        assert_eq!(SurveyctlError::InvalidJson("test".into()).code(), "INVALID_JSON");
        assert_eq!(SurveyctlError::FileNotFound("test".into()).code(), "FILE_NOT_FOUND");
        assert_eq!(SurveyctlError::ConfigError("test".into()).code(), "CONFIG_ERROR");
        assert_eq!(
            SurveyctlError::Api {
                status: 500,
                message: "test".into()
            }
            .code(),
            "API"
        );
        assert_eq!(
            SurveyctlError::InconsistentState {
                id: "q-001".into(),
                message: "test".into()
            }
            .code(),
            "INCONSISTENT_STATE"
        );
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(
            to_exit_code(&SurveyctlError::InconsistentState {
                id: "q-001".into(),
                message: "start failed".into()
            }),
            2
        );
        assert_eq!(to_exit_code(&SurveyctlError::NotFound("q-001".into())), 1);
        assert_eq!(to_exit_code(&SurveyctlError::Validation("empty title".into())), 1);
    }

    #[test]
    fn test_inconsistent_state_message_names_the_divergence() {
        let err = SurveyctlError::InconsistentState {
            id: "q-001".into(),
            message: "HTTP 500".into(),
        };
        let text = err.to_string();
        assert!(text.contains("q-001"));
        assert!(text.contains("Running"));
        assert!(text.contains("not started"));
    }
}
