//! HTTP implementation of `PageFetcher` backed by `reqwest`.

use std::time::Duration;

use async_trait::async_trait;

use rssize_core::fetch::{FetchError, PageFetcher, Result};

/// User agent sent with every upstream request.
pub const USER_AGENT: &str = concat!("rssize/", env!("CARGO_PKG_VERSION"));

/// Upper bound on one upstream request, connect to last body byte.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches upstream pages with a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    /// Builds a fetcher whose requests fail with `FetchError::Request` once
    /// `timeout` elapses.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Request(format!("failed to build HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| FetchError::Body(e.to_string()))?;

        Ok(body.to_vec())
    }
}
