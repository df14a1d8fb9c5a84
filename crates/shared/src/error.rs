//! Application-wide error types.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error types.
#[derive(Debug, Error)]
pub enum AppError {
    /// Input was rejected by a validation rule.
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Report export failed.
    #[error("Export error: {0}")]
    Export(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the error code for this error.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
            Self::Export(_) => "EXPORT_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns true if the user can fix the problem by correcting input.
    #[must_use]
    pub const fn is_user_correctable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Configuration(_))
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Configuration(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(
            AppError::Validation(String::new()).error_code(),
            "VALIDATION_ERROR"
        );
        assert_eq!(
            AppError::Configuration(String::new()).error_code(),
            "CONFIGURATION_ERROR"
        );
        assert_eq!(AppError::Export(String::new()).error_code(), "EXPORT_ERROR");
        assert_eq!(
            AppError::Internal(String::new()).error_code(),
            "INTERNAL_ERROR"
        );
    }

    #[test]
    fn test_user_correctable() {
        assert!(AppError::Validation(String::new()).is_user_correctable());
        assert!(AppError::Configuration(String::new()).is_user_correctable());
        assert!(!AppError::Export(String::new()).is_user_correctable());
        assert!(!AppError::Internal(String::new()).is_user_correctable());
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Configuration("msg".into()).to_string(),
            "Configuration error: msg"
        );
        assert_eq!(AppError::Export("msg".into()).to_string(), "Export error: msg");
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_from_config_error() {
        let err: AppError = config::ConfigError::Message("bad value".into()).into();
        assert!(matches!(err, AppError::Configuration(ref msg) if msg == "bad value"));
    }
}
