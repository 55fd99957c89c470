use thiserror::Error;

/// Errors that can occur when extracting data from a calendar page.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The page has no `CalendarContainer` element carrying props.
    #[error("Calendar props not found in page")]
    PropNotFound,
    #[error("Invalid selector {selector}: {message}")]
    Selector { selector: String, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prop_not_found_display() {
        assert_eq!(
            ParseError::PropNotFound.to_string(),
            "Calendar props not found in page"
        );
    }

    #[test]
    fn test_selector_display() {
        let error = ParseError::Selector {
            selector: "div[".to_string(),
            message: "unexpected end".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid selector div[: unexpected end");
    }
}
