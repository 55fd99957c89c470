//! RSS 2.0 feed assembly.

mod assemble;
mod error;

pub use assemble::{assemble_feed, to_rss, RSS_CONTENT_TYPE};
pub use error::FeedError;
