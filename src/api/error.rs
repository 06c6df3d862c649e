//! Dashboard API-specific error types.

/// Errors that can occur while talking to the dashboard API.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    HttpRequest(#[from] reqwest::Error),

    /// Endpoint returned a non-success status
    #[error("API error (status {status})")]
    Status { status: u16 },

    /// Failed to decode the response body
    #[error("Failed to decode API response: {0}")]
    Decode(String),

    /// Generic API error
    #[error("API error: {0}")]
    #[allow(dead_code)]
    Other(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let error = ApiError::Status { status: 502 };
        assert!(error.to_string().contains("502"));

        let error = ApiError::Decode("missing field `success`".to_string());
        assert!(error.to_string().contains("decode"));
        assert!(error.to_string().contains("missing field `success`"));

        let error = ApiError::Other("Test error".to_string());
        assert!(error.to_string().contains("API error"));
        assert!(error.to_string().contains("Test error"));
    }
}
