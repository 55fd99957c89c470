use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The instant an entry was first observed by this service.
///
/// Records are write-once: the first insert for an `entry_id` wins and is
/// never updated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryFirstSeen {
    pub entry_id: i64,
    pub first_seen: DateTime<Utc>,
}

impl EntryFirstSeen {
    pub fn new(entry_id: i64, first_seen: DateTime<Utc>) -> Self {
        Self {
            entry_id,
            first_seen,
        }
    }
}
