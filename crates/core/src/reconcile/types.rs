use chrono::{DateTime, Utc};

use crate::calendar::CalendarEntry;

/// Where an entry's feed timestamp came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FirstSeenOrigin {
    /// A record already existed.
    Existing,
    /// A record was inserted during this request (or a concurrent one).
    Created,
    /// Inserting failed; `now` is used without being persisted.
    Fallback,
    /// Reconciliation is disabled; `now` is used and storage is not touched.
    Untracked,
}

impl FirstSeenOrigin {
    pub fn as_str(&self) -> &'static str {
        match self {
            FirstSeenOrigin::Existing => "existing",
            FirstSeenOrigin::Created => "created",
            FirstSeenOrigin::Fallback => "fallback",
            FirstSeenOrigin::Untracked => "untracked",
        }
    }
}

/// Why an entry produced no feed item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The entry has no article URL yet.
    EmptyUrl,
    /// Looking up its first-seen record failed.
    StorageError,
}

impl SkipReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            SkipReason::EmptyUrl => "empty_url",
            SkipReason::StorageError => "storage_error",
        }
    }
}

/// An entry paired with the timestamp to publish it under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconciledEntry {
    pub entry: CalendarEntry,
    pub first_seen: DateTime<Utc>,
    pub origin: FirstSeenOrigin,
}

/// Per-request counts of reconciliation outcomes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReconcileSummary {
    pub existing: usize,
    pub created: usize,
    pub fallback: usize,
    pub untracked: usize,
    pub skipped_empty_url: usize,
    pub skipped_storage_error: usize,
}

impl ReconcileSummary {
    pub fn record_origin(&mut self, origin: FirstSeenOrigin) {
        match origin {
            FirstSeenOrigin::Existing => self.existing += 1,
            FirstSeenOrigin::Created => self.created += 1,
            FirstSeenOrigin::Fallback => self.fallback += 1,
            FirstSeenOrigin::Untracked => self.untracked += 1,
        }
    }

    pub fn record_skip(&mut self, reason: SkipReason) {
        match reason {
            SkipReason::EmptyUrl => self.skipped_empty_url += 1,
            SkipReason::StorageError => self.skipped_storage_error += 1,
        }
    }

    /// Number of entries that will appear in the feed.
    pub fn published(&self) -> usize {
        self.existing + self.created + self.fallback + self.untracked
    }

    pub fn skipped(&self) -> usize {
        self.skipped_empty_url + self.skipped_storage_error
    }
}
