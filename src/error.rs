//! Error types for interactif
//!
//! This module defines the error types used throughout the application,
//! using `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Main error type for interactif operations
///
/// Covers configuration loading, prompt validation, calls to the remote
/// guidance service, board edits and view navigation.
#[derive(Error, Debug)]
pub enum InteractifError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Prompt was empty after trimming
    #[error("Prompt cannot be empty")]
    EmptyPrompt,

    /// Prompt exceeded the configured character cap
    #[error("Prompt too long: {actual} characters (limit {limit})")]
    PromptTooLong {
        /// Configured character limit
        limit: usize,
        /// Length of the rejected prompt
        actual: usize,
    },

    /// A request is already pending
    #[error("A request is already in flight")]
    RequestInFlight,

    /// Transport-level failure talking to the guidance service
    #[error("Service error: {0}")]
    Service(String),

    /// Guidance service answered with a non-success status
    #[error("Service returned {status}: {body}")]
    ServiceStatus {
        /// HTTP status code
        status: u16,
        /// Response body (may be empty)
        body: String,
    },

    /// Response body did not match the expected shape
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Index outside of a board
    #[error("Index {index} out of range (board has {len} items)")]
    IndexOutOfRange {
        /// Zero-based index that was requested
        index: usize,
        /// Number of items on the board
        len: usize,
    },

    /// View transition not allowed from the current view
    #[error("Cannot switch from {from} to {to}")]
    InvalidTransition {
        /// Current view name
        from: String,
        /// Requested view name
        to: String,
    },

    /// Operation requires an open dashboard
    #[error("No active session")]
    NoActiveSession,

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Line editor errors
    #[error("Readline error: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),
}

/// Result type alias for interactif operations
///
/// Uses `anyhow::Error` so call sites can add context; callers that care
/// about the variant downcast to [`InteractifError`].
pub type Result<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let error = InteractifError::Config("invalid format".to_string());
        assert_eq!(error.to_string(), "Configuration error: invalid format");
    }

    #[test]
    fn test_empty_prompt_display() {
        assert_eq!(
            InteractifError::EmptyPrompt.to_string(),
            "Prompt cannot be empty"
        );
    }

    #[test]
    fn test_prompt_too_long_display() {
        let error = InteractifError::PromptTooLong {
            limit: 1000,
            actual: 1200,
        };
        let s = error.to_string();
        assert!(s.contains("1200"));
        assert!(s.contains("limit 1000"));
    }

    #[test]
    fn test_service_status_display() {
        let error = InteractifError::ServiceStatus {
            status: 503,
            body: "unavailable".to_string(),
        };
        assert_eq!(error.to_string(), "Service returned 503: unavailable");
    }

    #[test]
    fn test_index_out_of_range_display() {
        let error = InteractifError::IndexOutOfRange { index: 4, len: 2 };
        assert_eq!(
            error.to_string(),
            "Index 4 out of range (board has 2 items)"
        );
    }

    #[test]
    fn test_invalid_transition_display() {
        let error = InteractifError::InvalidTransition {
            from: "analysis".to_string(),
            to: "dashboard".to_string(),
        };
        assert_eq!(error.to_string(), "Cannot switch from analysis to dashboard");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: InteractifError = io_error.into();
        assert!(matches!(error, InteractifError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("{invalid json}").unwrap_err();
        let error: InteractifError = json_error.into();
        assert!(matches!(error, InteractifError::Serialization(_)));
    }

    #[test]
    fn test_yaml_error_conversion() {
        let yaml_error = serde_yaml::from_str::<serde_yaml::Value>("invalid: : yaml").unwrap_err();
        let error: InteractifError = yaml_error.into();
        assert!(matches!(error, InteractifError::Yaml(_)));
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<InteractifError>();
    }

    #[test]
    fn test_downcast_through_anyhow() {
        let err: anyhow::Error = InteractifError::RequestInFlight.into();
        assert!(matches!(
            err.downcast_ref::<InteractifError>(),
            Some(InteractifError::RequestInFlight)
        ));
    }
}
