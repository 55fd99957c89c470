//! Pure decisions for first-seen reconciliation.
//!
//! The server crate performs the repository calls; this module decides what
//! each result means for the entry (use the stored timestamp, create one,
//! fall back to `now`, or skip the entry) and keeps the per-request tally.

mod decision;
mod types;

pub use decision::{resolve_insert, resolve_lookup, untracked, LookupDecision};
pub use types::{FirstSeenOrigin, ReconcileSummary, ReconciledEntry, SkipReason};
