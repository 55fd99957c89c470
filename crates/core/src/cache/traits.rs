use std::time::Duration;

use async_trait::async_trait;

use super::Result;

/// Byte cache for upstream responses.
///
/// A `get` that returns `Ok(None)` is a miss. Callers populate the cache
/// themselves after a successful fetch.
#[async_trait]
pub trait Cache: Send + Sync {
    /// Gets a value from the cache by key.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Sets a value in the cache with an optional TTL.
    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()>;
}
