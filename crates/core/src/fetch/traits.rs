use async_trait::async_trait;

use super::Result;

/// Retrieves raw page bytes from the upstream host.
///
/// Implementations must fail on transport errors and on non-success HTTP
/// statuses. They must not retry.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Performs a GET on `url` and returns the full response body.
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
