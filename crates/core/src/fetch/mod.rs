mod error;
mod traits;
mod upstream;

pub use error::{FetchError, Result};
pub use traits::PageFetcher;
pub use upstream::{calendar_url, DEFAULT_UPSTREAM_BASE_URL};
