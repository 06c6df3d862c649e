//! State management-specific error types.

/// Errors that can occur during state operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    /// Element not found in state
    #[error("Element not found: {id}")]
    #[allow(dead_code)]
    ElementNotFound { id: String },

    /// Network sender not set in state
    #[error("Network sender not set in state")]
    #[allow(dead_code)]
    NetworkSenderNotSet,

    /// State lock timeout
    #[error("State lock timeout")]
    #[allow(dead_code)]
    LockTimeout,

    /// Generic state error
    #[error("State error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_state_error_display() {
        let error = StateError::ElementNotFound {
            id: "abc123".to_string(),
        };
        assert!(error.to_string().contains("Element not found"));
        assert!(error.to_string().contains("abc123"));

        let error = StateError::NetworkSenderNotSet;
        assert!(error.to_string().contains("Network sender not set"));

        let error = StateError::LockTimeout;
        assert!(error.to_string().contains("State lock timeout"));

        let error = StateError::Other("Generic error".to_string());
        assert!(error.to_string().contains("State error"));
        assert!(error.to_string().contains("Generic error"));
    }
}
