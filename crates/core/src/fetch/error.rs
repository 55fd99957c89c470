use thiserror::Error;

/// Errors that can occur while fetching an upstream page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(String),
    #[error("Upstream returned status {status}")]
    Status { status: u16 },
    #[error("Failed to read response body: {0}")]
    Body(String),
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),
}

/// Result type for fetch operations.
pub type Result<T> = std::result::Result<T, FetchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_display() {
        let error = FetchError::Request("dns error".to_string());
        assert_eq!(error.to_string(), "Request failed: dns error");
    }

    #[test]
    fn test_status_display() {
        let error = FetchError::Status { status: 503 };
        assert_eq!(error.to_string(), "Upstream returned status 503");
    }

    #[test]
    fn test_body_display() {
        let error = FetchError::Body("connection reset".to_string());
        assert_eq!(
            error.to_string(),
            "Failed to read response body: connection reset"
        );
    }

    #[test]
    fn test_invalid_url_display() {
        let error = FetchError::InvalidUrl("mailto:x".to_string());
        assert_eq!(error.to_string(), "Invalid upstream URL: mailto:x");
    }
}
