use sha2::{Digest, Sha256};

/// Namespace mixed into every page cache key.
pub const DEFAULT_NAMESPACE: &str = "rssize";

/// Returns the cache key for a fetched upstream page.
///
/// The key is the hex-encoded SHA-256 of `namespace` followed by `url`, so it
/// always has 64 characters and never exposes the raw URL.
///
/// # Examples
///
/// ```
/// use rssize_core::cache::page_key;
///
/// let key = page_key("rssize", "https://adventar.org/calendars/42");
/// assert_eq!(key.len(), 64);
/// ```
pub fn page_key(namespace: &str, url: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(namespace.as_bytes());
    hasher.update(url.as_bytes());
    hex::encode(hasher.finalize())
}
