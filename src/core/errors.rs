//! Error types for the surprisal library.
//!
//! Every fallible operation returns [`Result`], carrying a structured
//! [`SurprisalError`] that names the argument or operation at fault. Degenerate
//! but valid states (too few samples, all-zero tables) are not errors; they
//! are reported as `NaN` or `0.0` by the computations themselves.

use std::io;

use thiserror::Error;

/// Main result type for surprisal operations.
pub type Result<T> = std::result::Result<T, SurprisalError>;

/// Error type for all surprisal operations.
#[derive(Error, Debug)]
pub enum SurprisalError {
    /// A caller supplied a value outside the operation's domain
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// Error description
        message: String,
        /// Name of the offending argument
        argument: Option<String>,
    },

    /// An operation was invoked on state that does not satisfy its precondition
    #[error("Precondition violated in '{operation}': {message}")]
    PreconditionViolation {
        /// Operation that was rejected
        operation: String,
        /// Error description
        message: String,
    },

    /// Validation errors for configuration values
    #[error("Validation error: {message}")]
    Validation {
        /// Error description
        message: String,
        /// Field that failed validation
        field: Option<String>,
    },

    /// I/O errors while reading or writing configuration
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data format being handled
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl SurprisalError {
    /// Create a new invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            argument: None,
        }
    }

    /// Create a new invalid-argument error naming the argument
    pub fn invalid_argument_named(
        message: impl Into<String>,
        argument: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            message: message.into(),
            argument: Some(argument.into()),
        }
    }

    /// Create a new precondition violation for `operation`
    pub fn precondition(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::PreconditionViolation {
            operation: operation.into(),
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Whether this error was caused by a bad argument rather than bad state
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Attach a field or argument name to errors that carry one
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::InvalidArgument { argument: ctx, .. }
            | Self::Validation { field: ctx, .. } => {
                *ctx = Some(context.into());
            }
            _ => {}
        }
        self
    }
}

impl From<io::Error> for SurprisalError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<serde_json::Error> for SurprisalError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for SurprisalError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<statrs::StatsError> for SurprisalError {
    fn from(err: statrs::StatsError) -> Self {
        Self::invalid_argument(format!("Distribution parameters rejected: {err}"))
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<SurprisalError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = SurprisalError::invalid_argument("negative count");
        assert!(err.is_invalid_argument());

        let err = SurprisalError::precondition("remove", "accumulator is empty");
        assert!(matches!(err, SurprisalError::PreconditionViolation { .. }));
        assert!(!err.is_invalid_argument());
    }

    #[test]
    fn test_invalid_argument_named() {
        let err = SurprisalError::invalid_argument_named("must be non-negative", "k12");

        if let SurprisalError::InvalidArgument { message, argument } = err {
            assert_eq!(message, "must be non-negative");
            assert_eq!(argument, Some("k12".to_string()));
        } else {
            panic!("Expected InvalidArgument error");
        }
    }

    #[test]
    fn test_with_context_sets_field() {
        let err =
            SurprisalError::validation("min_score must not be NaN").with_context("ranking");

        if let SurprisalError::Validation { field, .. } = err {
            assert_eq!(field, Some("ranking".to_string()));
        } else {
            panic!("Expected Validation error");
        }
    }

    #[test]
    fn test_with_context_non_contextual_error() {
        let err = SurprisalError::precondition("remove", "empty").with_context("ignored");

        if let SurprisalError::PreconditionViolation { operation, message } = err {
            assert_eq!(operation, "remove");
            assert_eq!(message, "empty");
        } else {
            panic!("Expected PreconditionViolation error");
        }
    }

    #[test]
    fn test_result_extension() {
        let result: std::result::Result<i32, std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "File not found",
        ));

        let converted = result.context("Failed to read configuration file");
        assert!(matches!(converted, Err(SurprisalError::Io { .. })));
    }

    #[test]
    fn test_from_yaml_error() {
        let yaml_err = serde_yaml::from_str::<i32>("invalid: yaml: content").unwrap_err();
        let err: SurprisalError = yaml_err.into();

        if let SurprisalError::Serialization { data_type, .. } = err {
            assert_eq!(data_type, Some("YAML".to_string()));
        } else {
            panic!("Expected Serialization error");
        }
    }

    #[test]
    fn test_from_json_error() {
        let json_err = serde_json::from_str::<i32>("invalid json").unwrap_err();
        let err: SurprisalError = json_err.into();
        assert!(matches!(err, SurprisalError::Serialization { .. }));
    }

    #[test]
    fn test_error_display_formatting() {
        let err = SurprisalError::precondition("remove", "accumulator is empty");
        let display = format!("{}", err);
        assert!(display.contains("Precondition violated in 'remove'"));
        assert!(display.contains("accumulator is empty"));
    }
}
