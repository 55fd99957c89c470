//! Hand-written trait doubles shared by pipeline and router tests.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rssize_core::cache::{Cache, CacheError, Result as CacheResult};
use rssize_core::fetch::{FetchError, PageFetcher, Result as FetchResult};
use rssize_core::storage::{EntryFirstSeen, FirstSeenRepository, RepositoryError, Result};

/// Cache backed by a HashMap. TTLs are recorded, not enforced.
#[derive(Default)]
pub struct MockCache {
    store: RwLock<HashMap<String, Vec<u8>>>,
    last_ttl: RwLock<Option<Duration>>,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn stored(&self, key: &str) -> Option<Vec<u8>> {
        self.store.read().await.get(key).cloned()
    }

    pub async fn last_ttl(&self) -> Option<Duration> {
        *self.last_ttl.read().await
    }

    pub async fn entry_count(&self) -> usize {
        self.store.read().await.len()
    }
}

#[async_trait]
impl Cache for MockCache {
    async fn get(&self, key: &str) -> CacheResult<Option<Vec<u8>>> {
        Ok(self.store.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> CacheResult<()> {
        self.store
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        *self.last_ttl.write().await = ttl;
        Ok(())
    }
}

/// Cache whose every operation fails.
pub struct FailingCache;

#[async_trait]
impl Cache for FailingCache {
    async fn get(&self, _key: &str) -> CacheResult<Option<Vec<u8>>> {
        Err(CacheError::ConnectionFailed("connection refused".to_string()))
    }

    async fn set(&self, _key: &str, _value: &[u8], _ttl: Option<Duration>) -> CacheResult<()> {
        Err(CacheError::OperationFailed("read only".to_string()))
    }
}

/// Fetcher returning a canned response and counting calls.
pub struct MockFetcher {
    response: FetchResult<Vec<u8>>,
    calls: AtomicUsize,
    urls: RwLock<Vec<String>>,
}

impl MockFetcher {
    pub fn new(body: impl Into<Vec<u8>>) -> Self {
        Self {
            response: Ok(body.into()),
            calls: AtomicUsize::new(0),
            urls: RwLock::new(Vec::new()),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            response: Err(error),
            calls: AtomicUsize::new(0),
            urls: RwLock::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub async fn urls(&self) -> Vec<String> {
        self.urls.read().await.clone()
    }
}

#[async_trait]
impl PageFetcher for MockFetcher {
    async fn fetch(&self, url: &str) -> FetchResult<Vec<u8>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.write().await.push(url.to_string());
        self.response.clone()
    }
}

/// Repository with call counters and injectable failures.
#[derive(Default)]
pub struct MockRepository {
    records: RwLock<HashMap<i64, EntryFirstSeen>>,
    lookup_failures: RwLock<HashMap<i64, RepositoryError>>,
    insert_failure: RwLock<Option<RepositoryError>>,
    lookup_calls: AtomicUsize,
    insert_calls: AtomicUsize,
}

impl MockRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn seed(&self, record: EntryFirstSeen) {
        self.records.write().await.insert(record.entry_id, record);
    }

    pub async fn fail_lookup_for(&self, entry_id: i64, error: RepositoryError) {
        self.lookup_failures.write().await.insert(entry_id, error);
    }

    pub async fn fail_inserts(&self, error: RepositoryError) {
        *self.insert_failure.write().await = Some(error);
    }

    pub async fn contains(&self, entry_id: i64) -> bool {
        self.records.read().await.contains_key(&entry_id)
    }

    pub async fn record_count(&self) -> usize {
        self.records.read().await.len()
    }

    pub fn lookup_calls(&self) -> usize {
        self.lookup_calls.load(Ordering::SeqCst)
    }

    pub fn insert_calls(&self) -> usize {
        self.insert_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl FirstSeenRepository for MockRepository {
    async fn get_first_seen(&self, entry_id: i64) -> Result<Option<EntryFirstSeen>> {
        self.lookup_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.lookup_failures.read().await.get(&entry_id) {
            return Err(error.clone());
        }
        Ok(self.records.read().await.get(&entry_id).copied())
    }

    async fn insert_if_absent(&self, record: EntryFirstSeen) -> Result<EntryFirstSeen> {
        self.insert_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.insert_failure.read().await.clone() {
            return Err(error);
        }
        let mut records = self.records.write().await;
        Ok(*records.entry(record.entry_id).or_insert(record))
    }
}

/// Builds a calendar page in the shape the upstream host serves.
pub fn calendar_page(props: &str) -> String {
    let escaped = props
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<title>Rust Advent Calendar 2023 - Adventar</title>
<meta name="description" content="Rust の Advent Calendar です">
</head>
<body>
<div data-react-class="CalendarContainer" data-react-props="{escaped}"></div>
</body>
</html>"#
    )
}

/// The single-entry payload used by most pipeline tests.
pub const ONE_ENTRY_PROPS: &str = r#"{"calendar":{"id":42,"year":2023},"entries":[{"id":1,"title":"Day 1","url":"https://example.com/1"}]}"#;
