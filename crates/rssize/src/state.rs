//! Application state.
//!
//! The state holds the feed pipeline with its backends already injected.
//! Which backends are compiled in is decided by feature flags; the optional
//! stages are switched on or off by `Config`.

use std::sync::Arc;

use anyhow::Context;
use url::Url;

use rssize_core::cache::Cache;
use rssize_core::storage::FirstSeenRepository;

use crate::config::Config;
use crate::fetch::HttpPageFetcher;
use crate::pipeline::{Pipeline, PipelineOptions};

/// Shared application state.
///
/// This is cloned for each request handler.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    /// Digits-only calendar ids when true, slug ids otherwise.
    pub require_numeric_calendar_id: bool,
}

impl AppState {
    /// Wraps an already assembled pipeline.
    pub fn from_pipeline(pipeline: Pipeline, require_numeric_calendar_id: bool) -> Self {
        Self {
            pipeline: Arc::new(pipeline),
            require_numeric_calendar_id,
        }
    }

    /// Builds the state from configuration, connecting the selected backends.
    pub async fn new(config: &Config) -> Result<Self, anyhow::Error> {
        let upstream_base = Url::parse(&config.upstream_base_url)
            .with_context(|| format!("invalid UPSTREAM_BASE_URL {}", config.upstream_base_url))?;

        let options = PipelineOptions {
            cache_namespace: config.cache_namespace.clone(),
            cache_ttl: config.cache_ttl(),
            ..PipelineOptions::new(upstream_base)
        };

        let fetcher = Arc::new(HttpPageFetcher::new(config.fetch_timeout())?);
        let mut pipeline = Pipeline::new(fetcher, options);

        if config.cache_enabled {
            pipeline = pipeline.with_cache(create_cache(config).await?);
        } else {
            tracing::info!("Page cache disabled");
        }

        if config.reconcile_enabled {
            pipeline = pipeline.with_repository(create_repository(config).await?);
        } else {
            tracing::info!("First-seen reconciliation disabled");
        }

        Ok(Self::from_pipeline(
            pipeline,
            config.require_numeric_calendar_id,
        ))
    }
}

// ============================================================================
// Factory functions for the compiled-in backends
// ============================================================================

#[cfg(feature = "memory")]
async fn create_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    use crate::cache::MemoryCache;

    tracing::info!(max_entries = config.cache_max_entries, "Using in-memory page cache");
    Ok(Arc::new(MemoryCache::new(config.cache_max_entries)))
}

#[cfg(feature = "redis")]
async fn create_cache(config: &Config) -> Result<Arc<dyn Cache>, anyhow::Error> {
    use crate::cache::RedisCache;

    tracing::info!("Using Redis page cache");
    let cache = RedisCache::new(&config.redis_url)
        .await
        .context("failed to connect to Redis")?;
    Ok(Arc::new(cache))
}

#[cfg(feature = "inmemory")]
async fn create_repository(
    _config: &Config,
) -> Result<Arc<dyn FirstSeenRepository>, anyhow::Error> {
    use crate::storage::InMemoryRepository;

    tracing::info!("Using in-memory first-seen storage");
    Ok(Arc::new(InMemoryRepository::new()))
}

#[cfg(feature = "sqlite")]
async fn create_repository(
    config: &Config,
) -> Result<Arc<dyn FirstSeenRepository>, anyhow::Error> {
    use crate::storage::SqliteRepository;

    tracing::info!(path = %config.sqlite_path, "Using SQLite first-seen storage");
    let repository = SqliteRepository::new(&config.sqlite_path)
        .await
        .with_context(|| format!("failed to open SQLite database {}", config.sqlite_path))?;
    Ok(Arc::new(repository))
}
