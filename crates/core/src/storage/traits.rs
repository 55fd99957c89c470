use async_trait::async_trait;

use super::{EntryFirstSeen, Result};

/// Persistence for first-seen timestamps, keyed by entry id.
#[async_trait]
pub trait FirstSeenRepository: Send + Sync {
    /// Gets the record for an entry, or `None` if it was never seen.
    async fn get_first_seen(&self, entry_id: i64) -> Result<Option<EntryFirstSeen>>;

    /// Stores `record` unless one already exists for its entry id.
    ///
    /// Returns the record that is stored after the call: `record` itself if
    /// it was inserted, otherwise the pre-existing one. Must be atomic with
    /// respect to concurrent callers.
    async fn insert_if_absent(&self, record: EntryFirstSeen) -> Result<EntryFirstSeen>;
}
