//! Extraction of the feed header and the props blob from a calendar page.

mod error;
mod parse;

pub use error::ParseError;
pub use parse::{parse_page, ParsedPage, CALENDAR_CONTAINER_CLASS, PROPS_ATTRIBUTE};
