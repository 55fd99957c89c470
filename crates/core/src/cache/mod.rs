mod error;
mod keys;
mod traits;

pub use error::{CacheError, Result};
pub use keys::{page_key, DEFAULT_NAMESPACE};
pub use traits::Cache;
