use chrono::{DateTime, Utc};

use crate::calendar::CalendarEntry;
use crate::storage::{EntryFirstSeen, RepositoryError};

use super::{FirstSeenOrigin, ReconciledEntry};

/// What to do with an entry after looking up its first-seen record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupDecision {
    /// Publish with the stored timestamp.
    UseExisting(DateTime<Utc>),
    /// No record yet; insert one.
    Create,
    /// The lookup failed; leave the entry out of the feed.
    Skip(RepositoryError),
}

/// Interprets the result of `FirstSeenRepository::get_first_seen`.
///
/// A `NotFound` error is treated like `Ok(None)`; any other error skips the
/// entry.
pub fn resolve_lookup(
    lookup: Result<Option<EntryFirstSeen>, RepositoryError>,
) -> LookupDecision {
    match lookup {
        Ok(Some(record)) => LookupDecision::UseExisting(record.first_seen),
        Ok(None) | Err(RepositoryError::NotFound { .. }) => LookupDecision::Create,
        Err(err) => LookupDecision::Skip(err),
    }
}

/// Interprets the result of `FirstSeenRepository::insert_if_absent`.
///
/// On success the stored timestamp is used, which differs from `now` only
/// when a concurrent request inserted first. On failure `now` is used
/// without being persisted.
pub fn resolve_insert(
    inserted: &Result<EntryFirstSeen, RepositoryError>,
    now: DateTime<Utc>,
) -> (DateTime<Utc>, FirstSeenOrigin) {
    match inserted {
        Ok(record) => (record.first_seen, FirstSeenOrigin::Created),
        Err(_) => (now, FirstSeenOrigin::Fallback),
    }
}

/// Pairs an entry with `now` when reconciliation is disabled.
pub fn untracked(entry: CalendarEntry, now: DateTime<Utc>) -> ReconciledEntry {
    ReconciledEntry {
        entry,
        first_seen: now,
        origin: FirstSeenOrigin::Untracked,
    }
}
