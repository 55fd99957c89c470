//! SQLite schema definitions and SQL query constants.
//!
//! This module contains all SQL statements used by the SQLite repository,
//! following the Functional Core pattern - pure data, no I/O.

/// SQL statement to create all tables.
pub const CREATE_TABLES: &str = r#"
-- First time each calendar entry was observed
CREATE TABLE IF NOT EXISTS entry_first_seen (
    entry_id INTEGER PRIMARY KEY,
    first_seen TEXT NOT NULL
);
"#;

pub const SELECT_FIRST_SEEN: &str = r#"
SELECT entry_id, first_seen
FROM entry_first_seen
WHERE entry_id = ?1
"#;

/// Inserts a record unless one already exists. Never overwrites.
pub const INSERT_FIRST_SEEN_IF_ABSENT: &str = r#"
INSERT INTO entry_first_seen (entry_id, first_seen)
VALUES (?1, ?2)
ON CONFLICT(entry_id) DO NOTHING
"#;
