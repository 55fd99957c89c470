//! In-memory repository implementation.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use rssize_core::storage::{EntryFirstSeen, FirstSeenRepository, Result};

/// In-memory first-seen store.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access.
/// Data is not persisted and will be lost when the repository is dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository {
    records: Arc<RwLock<HashMap<i64, EntryFirstSeen>>>,
}

impl Default for InMemoryRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryRepository {
    /// Creates a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    #[cfg(test)]
    async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    #[cfg(test)]
    async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl FirstSeenRepository for InMemoryRepository {
    async fn get_first_seen(&self, entry_id: i64) -> Result<Option<EntryFirstSeen>> {
        let records = self.records.read().await;
        Ok(records.get(&entry_id).copied())
    }

    async fn insert_if_absent(&self, record: EntryFirstSeen) -> Result<EntryFirstSeen> {
        let mut records = self.records.write().await;
        Ok(*records.entry(record.entry_id).or_insert(record))
    }
}
