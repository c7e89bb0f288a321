//! Error types for request validation and backend reporting.

use thiserror::Error;

/// Error codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// E001: Style name is not one of the known styles
    UnknownStyle,
    /// E002: Width or height is non-positive or too large
    InvalidDimensions,
    /// E003: Request document could not be parsed
    InvalidRequest,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownStyle => "E001",
            ErrorCode::InvalidDimensions => "E002",
            ErrorCode::InvalidRequest => "E003",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A configuration error with code, message, and optional field path.
///
/// Every validation failure is a configuration error: it is raised before
/// any pixel is computed and nothing is partially produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Request field that caused the error (e.g., "width").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error pointing at a request field.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors from loading a request document.
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
}

impl SpecError {
    /// Converts this error into a validation error with a stable code.
    pub fn into_validation_error(self) -> ValidationError {
        match self {
            SpecError::Validation(err) => err,
            other => ValidationError::new(ErrorCode::InvalidRequest, other.to_string()),
        }
    }
}

/// Trait implemented by backend error types for uniform reporting.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "WILDTEXT_001". These codes are stable
    /// and can be used for programmatic error handling.
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_strings() {
        assert_eq!(ErrorCode::UnknownStyle.code(), "E001");
        assert_eq!(ErrorCode::InvalidDimensions.code(), "E002");
        assert_eq!(ErrorCode::InvalidRequest.to_string(), "E003");
    }

    #[test]
    fn test_validation_error_display() {
        let err = ValidationError::new(ErrorCode::UnknownStyle, "unknown style: neon");
        assert_eq!(err.to_string(), "E001: unknown style: neon");

        let err = ValidationError::with_path(ErrorCode::InvalidDimensions, "must be positive", "width");
        assert_eq!(err.to_string(), "E002: must be positive (at width)");
    }

    #[test]
    fn test_spec_error_into_validation_error() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = SpecError::from(json_err).into_validation_error();
        assert_eq!(err.code, ErrorCode::InvalidRequest);
    }
}
