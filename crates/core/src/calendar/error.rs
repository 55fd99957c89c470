use thiserror::Error;

/// Errors that can occur when validating a calendar identifier.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalendarIdError {
    #[error("Calendar id cannot be empty")]
    Empty,
    #[error("Calendar id must be numeric: {0}")]
    NotNumeric(String),
    #[error("Invalid calendar id: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur when decoding the props payload.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("Failed to decode calendar props: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidPayload(err.to_string())
    }
}
