use std::{env, time::Duration};

use rssize_core::{cache::DEFAULT_NAMESPACE, fetch::DEFAULT_UPSTREAM_BASE_URL};

use crate::fetch::DEFAULT_FETCH_TIMEOUT;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the calendar host (default: "https://adventar.org")
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds (default: 10)
    pub fetch_timeout_seconds: u64,
    /// Whether fetched pages are cached (default: true)
    pub cache_enabled: bool,
    /// Prefix hashed into every cache key (default: "rssize")
    pub cache_namespace: String,
    /// Cache TTL in seconds (default: 1800)
    pub cache_ttl_seconds: u64,
    /// Maximum number of cache entries (default: 1,000)
    /// Note: Only used when the `memory` feature is enabled.
    #[allow(dead_code)]
    pub cache_max_entries: usize,
    /// Whether first-seen timestamps are persisted (default: true)
    pub reconcile_enabled: bool,
    /// Reject calendar ids that are not all digits (default: true)
    pub require_numeric_calendar_id: bool,
    /// Path to SQLite database file (default: "rssize.db")
    /// Note: Only used when the `sqlite` feature is enabled.
    #[allow(dead_code)]
    pub sqlite_path: String,
    /// Redis connection URL (default: "redis://localhost:6379")
    /// Note: Only used when the `redis` feature is enabled.
    #[allow(dead_code)]
    pub redis_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `UPSTREAM_BASE_URL` - Calendar host (default: "https://adventar.org")
    /// - `FETCH_TIMEOUT_SECONDS` - Upstream request timeout (default: 10)
    /// - `CACHE_ENABLED` - Enable page caching (default: true)
    /// - `CACHE_NAMESPACE` - Cache key namespace (default: "rssize")
    /// - `CACHE_TTL_SECONDS` - Cache TTL in seconds (default: 1800)
    /// - `CACHE_MAX_ENTRIES` - Maximum cache entries (default: 1,000)
    /// - `RECONCILE_ENABLED` - Persist first-seen timestamps (default: true)
    /// - `REQUIRE_NUMERIC_CALENDAR_ID` - Digits-only calendar ids (default: true)
    /// - `SQLITE_PATH` - SQLite database path (default: "rssize.db")
    /// - `REDIS_URL` - Redis connection URL (default: "redis://localhost:6379")
    pub fn from_env() -> Self {
        Self {
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_UPSTREAM_BASE_URL.to_string()),
            fetch_timeout_seconds: env::var("FETCH_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_FETCH_TIMEOUT.as_secs()),
            cache_enabled: env_flag("CACHE_ENABLED", true),
            cache_namespace: env::var("CACHE_NAMESPACE")
                .unwrap_or_else(|_| DEFAULT_NAMESPACE.to_string()),
            cache_ttl_seconds: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1800),
            cache_max_entries: env::var("CACHE_MAX_ENTRIES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1_000),
            reconcile_enabled: env_flag("RECONCILE_ENABLED", true),
            require_numeric_calendar_id: env_flag("REQUIRE_NUMERIC_CALENDAR_ID", true),
            sqlite_path: env::var("SQLITE_PATH").unwrap_or_else(|_| "rssize.db".to_string()),
            redis_url: env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string()),
        }
    }

    /// Get the upstream request timeout as a Duration.
    pub fn fetch_timeout(&self) -> Duration {
        Duration::from_secs(self.fetch_timeout_seconds)
    }

    /// Get cache TTL as a Duration.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl_seconds)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Reads a boolean variable. Unset or unrecognized values use `default`.
fn env_flag(name: &str, default: bool) -> bool {
    env::var(name)
        .ok()
        .and_then(|v| parse_flag(&v))
        .unwrap_or(default)
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
