//! First-seen reconciliation against the repository.

use chrono::{DateTime, Utc};

use rssize_core::calendar::{CalendarEntry, CalendarId};
use rssize_core::reconcile::{
    resolve_insert, resolve_lookup, untracked, FirstSeenOrigin, LookupDecision, ReconcileSummary,
    ReconciledEntry, SkipReason,
};
use rssize_core::storage::{EntryFirstSeen, FirstSeenRepository};

/// Resolves a publication timestamp for every entry that has a URL.
///
/// Entries are processed sequentially, in source order. A storage failure
/// only drops the affected entry. With no repository every entry is
/// published under `now`.
pub async fn reconcile_entries(
    repository: Option<&dyn FirstSeenRepository>,
    calendar_id: &CalendarId,
    entries: Vec<CalendarEntry>,
    now: DateTime<Utc>,
) -> (Vec<ReconciledEntry>, ReconcileSummary) {
    let mut summary = ReconcileSummary::default();
    let mut reconciled = Vec::with_capacity(entries.len());

    for entry in entries {
        if !entry.has_url() {
            tracing::debug!(
                calendar_id = %calendar_id,
                entry_id = entry.id,
                reason = SkipReason::EmptyUrl.as_str(),
                "Entry omitted from feed"
            );
            summary.record_skip(SkipReason::EmptyUrl);
            continue;
        }

        let Some(repository) = repository else {
            let item = untracked(entry, now);
            summary.record_origin(item.origin);
            reconciled.push(item);
            continue;
        };

        match reconcile_one(repository, calendar_id, entry, now).await {
            Some(item) => {
                summary.record_origin(item.origin);
                reconciled.push(item);
            }
            None => summary.record_skip(SkipReason::StorageError),
        }
    }

    tracing::info!(
        calendar_id = %calendar_id,
        existing = summary.existing,
        created = summary.created,
        fallback = summary.fallback,
        untracked = summary.untracked,
        skipped_empty_url = summary.skipped_empty_url,
        skipped_storage_error = summary.skipped_storage_error,
        "Reconciled calendar entries"
    );

    (reconciled, summary)
}

async fn reconcile_one(
    repository: &dyn FirstSeenRepository,
    calendar_id: &CalendarId,
    entry: CalendarEntry,
    now: DateTime<Utc>,
) -> Option<ReconciledEntry> {
    let lookup = repository.get_first_seen(entry.id).await;

    let (first_seen, origin) = match resolve_lookup(lookup) {
        LookupDecision::UseExisting(first_seen) => (first_seen, FirstSeenOrigin::Existing),
        LookupDecision::Skip(e) => {
            tracing::warn!(
                calendar_id = %calendar_id,
                entry_id = entry.id,
                reason = SkipReason::StorageError.as_str(),
                error = %e,
                "Entry omitted from feed"
            );
            return None;
        }
        LookupDecision::Create => {
            let inserted = repository
                .insert_if_absent(EntryFirstSeen::new(entry.id, now))
                .await;
            if let Err(e) = &inserted {
                tracing::warn!(
                    calendar_id = %calendar_id,
                    entry_id = entry.id,
                    error = %e,
                    "Failed to record first-seen time, using current time"
                );
            }
            resolve_insert(&inserted, now)
        }
    };

    Some(ReconciledEntry {
        entry,
        first_seen,
        origin,
    })
}
