use thiserror::Error;

/// Errors that can occur when serializing a feed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FeedError {
    #[error("Failed to serialize feed: {0}")]
    Serialize(String),
}

impl From<rss::Error> for FeedError {
    fn from(err: rss::Error) -> Self {
        Self::Serialize(err.to_string())
    }
}
