//! Cache-or-fetch retrieval of upstream pages.

use std::time::Duration;

use rssize_core::cache::Cache;
use rssize_core::fetch::{PageFetcher, Result};

/// Returns the page body for `url`, consulting `cache` first when present.
///
/// A cache read error is logged and treated as a miss. After a successful
/// fetch the body is written back; a failed write is logged and ignored.
pub async fn load_page(
    cache: Option<&dyn Cache>,
    fetcher: &dyn PageFetcher,
    key: &str,
    url: &str,
    ttl: Duration,
) -> Result<Vec<u8>> {
    let Some(cache) = cache else {
        return fetcher.fetch(url).await;
    };

    match cache.get(key).await {
        Ok(Some(bytes)) => {
            tracing::debug!(url = %url, "Cache hit for page");
            return Ok(bytes);
        }
        Ok(None) => {
            tracing::debug!(url = %url, "Cache miss for page");
        }
        Err(e) => {
            tracing::warn!(url = %url, error = %e, "Cache read failed, fetching upstream");
        }
    }

    let bytes = fetcher.fetch(url).await?;

    if let Err(e) = cache.set(key, &bytes, Some(ttl)).await {
        tracing::warn!(url = %url, error = %e, "Failed to cache page");
    }

    Ok(bytes)
}
