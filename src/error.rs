//! Application-wide error types.
//!
//! This module defines the main error type hierarchy for the application,
//! allowing for type-safe error handling throughout the codebase.

pub use crate::api::ApiError;
pub use crate::config::ConfigError;
pub use crate::state::StateError;

/// Main application error type.
///
/// This is the top-level error type that encompasses all error types
/// in the application. It uses `thiserror` for automatic error derivation
/// and conversion.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dashboard API-related errors
    #[error("Dashboard API error: {0}")]
    Api(#[from] ApiError),

    /// State management errors
    #[error("State error: {0}")]
    State(#[from] StateError),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    #[allow(dead_code)]
    Terminal(String),

    /// Generic error with context
    #[error("{0}")]
    #[allow(dead_code)]
    Other(String),
}

/// Convenience type alias for Result with AppError
#[allow(dead_code)]
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_from_config_error() {
        let config_error = ConfigError::FilePathNotSet;
        let app_error: AppError = config_error.into();
        assert!(matches!(app_error, AppError::Config(_)));
        assert!(app_error.to_string().contains("Configuration error"));
    }

    #[test]
    fn test_app_error_from_api_error() {
        let api_error = ApiError::Status { status: 502 };
        let app_error: AppError = api_error.into();
        assert!(matches!(app_error, AppError::Api(_)));
        assert!(app_error.to_string().contains("Dashboard API error"));
    }

    #[test]
    fn test_app_error_from_state_error() {
        let state_error = StateError::NetworkSenderNotSet;
        let app_error: AppError = state_error.into();
        assert!(matches!(app_error, AppError::State(_)));
        assert!(app_error.to_string().contains("State error"));
    }

    #[test]
    fn test_app_error_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "File not found");
        let app_error: AppError = io_error.into();
        assert!(matches!(app_error, AppError::Io(_)));
        assert!(app_error.to_string().contains("I/O error"));
    }

    #[test]
    fn test_app_error_terminal() {
        let error = AppError::Terminal("Terminal error".to_string());
        assert!(error.to_string().contains("Terminal error"));
    }

    #[test]
    fn test_app_error_other() {
        let error = AppError::Other("Generic error".to_string());
        assert_eq!(error.to_string(), "Generic error");
    }
}
