//! Row conversions between SQLite and domain types.

use chrono::{DateTime, Utc};
use rusqlite::Row;

use rssize_core::storage::EntryFirstSeen;

/// Formats a timestamp for storage. RFC 3339 keeps it sortable as text.
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339()
}

/// Parses a stored RFC 3339 timestamp.
pub fn parse_datetime(s: &str) -> Result<DateTime<Utc>, rusqlite::Error> {
    DateTime::parse_from_rfc3339(s)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| {
            rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(e))
        })
}

/// Converts a row from `SELECT_FIRST_SEEN` into an `EntryFirstSeen`.
pub fn row_to_first_seen(row: &Row) -> Result<EntryFirstSeen, rusqlite::Error> {
    let entry_id: i64 = row.get(0)?;
    let first_seen: String = row.get(1)?;

    Ok(EntryFirstSeen::new(entry_id, parse_datetime(&first_seen)?))
}
