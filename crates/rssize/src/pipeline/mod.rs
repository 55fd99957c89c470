//! Per-request feed generation.
//!
//! A request walks a fixed sequence of stages:
//!
//! ```text
//! cache lookup ─┬─ hit ──────────────────────┬─> parse -> decode -> reconcile -> assemble
//!               └─ miss -> fetch -> cache put ┘
//! ```
//!
//! Fetch, parse, decode and serialization failures abort the request with a
//! [`PipelineError`]. Cache and storage failures are logged and absorbed.
//! Caching and reconciliation are optional stages: a pipeline built without
//! a cache always fetches, and one built without a repository publishes
//! every entry under the request time.

mod error;
mod reconcile;
mod source;
#[cfg(test)]
pub(crate) mod testing;

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use url::Url;

use rssize_core::cache::{page_key, Cache, DEFAULT_NAMESPACE};
use rssize_core::calendar::{decode_payload, CalendarId, PageMetadata};
use rssize_core::feed::{assemble_feed, to_rss};
use rssize_core::fetch::{calendar_url, PageFetcher};
use rssize_core::page::parse_page;
use rssize_core::storage::FirstSeenRepository;

pub use error::PipelineError;

/// Default lifetime of a cached page.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(30 * 60);

/// Settings that do not depend on the selected backends.
#[derive(Debug, Clone)]
pub struct PipelineOptions {
    pub upstream_base: Url,
    pub cache_namespace: String,
    pub cache_ttl: Duration,
}

impl PipelineOptions {
    pub fn new(upstream_base: Url) -> Self {
        Self {
            upstream_base,
            cache_namespace: DEFAULT_NAMESPACE.to_string(),
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

/// Turns a calendar id into RSS bytes.
///
/// Backends are injected at construction so the same pipeline runs against
/// SQLite and Redis in production and against doubles in tests.
pub struct Pipeline {
    fetcher: Arc<dyn PageFetcher>,
    cache: Option<Arc<dyn Cache>>,
    repository: Option<Arc<dyn FirstSeenRepository>>,
    options: PipelineOptions,
}

impl Pipeline {
    /// Creates a pipeline with neither caching nor reconciliation.
    pub fn new(fetcher: Arc<dyn PageFetcher>, options: PipelineOptions) -> Self {
        Self {
            fetcher,
            cache: None,
            repository: None,
            options,
        }
    }

    /// Enables the cache stage.
    pub fn with_cache(mut self, cache: Arc<dyn Cache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Enables the reconcile stage.
    pub fn with_repository(mut self, repository: Arc<dyn FirstSeenRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Renders the RSS document for `calendar_id`.
    ///
    /// A single timestamp is taken at the start of the request and used both
    /// as the channel date and as the first-seen time of new entries.
    pub async fn render_feed(&self, calendar_id: &CalendarId) -> Result<Vec<u8>, PipelineError> {
        let now = Utc::now();

        let url = calendar_url(&self.options.upstream_base, calendar_id).map_err(|source| {
            PipelineError::Fetch {
                calendar_id: calendar_id.to_string(),
                url: self.options.upstream_base.to_string(),
                source,
            }
        })?;
        let key = page_key(&self.options.cache_namespace, &url);

        let page = source::load_page(
            self.cache.as_deref(),
            self.fetcher.as_ref(),
            &key,
            &url,
            self.options.cache_ttl,
        )
        .await
        .map_err(|source| PipelineError::Fetch {
            calendar_id: calendar_id.to_string(),
            url: url.clone(),
            source,
        })?;

        let parsed = parse_page(&page).map_err(|source| PipelineError::Parse {
            calendar_id: calendar_id.to_string(),
            source,
        })?;

        let payload = decode_payload(&parsed.props).map_err(|source| PipelineError::Decode {
            calendar_id: calendar_id.to_string(),
            source,
        })?;

        tracing::debug!(
            calendar_id = %calendar_id,
            year = payload.calendar.year,
            entries = payload.entries.len(),
            "Decoded calendar payload"
        );

        let (reconciled, _summary) = reconcile::reconcile_entries(
            self.repository.as_deref(),
            calendar_id,
            payload.entries,
            now,
        )
        .await;

        let metadata = PageMetadata {
            title: parsed.title,
            description: parsed.description,
            url,
        };
        let channel = assemble_feed(&metadata, &reconciled, now);

        to_rss(&channel).map_err(|source| PipelineError::Feed {
            calendar_id: calendar_id.to_string(),
            source,
        })
    }
}
