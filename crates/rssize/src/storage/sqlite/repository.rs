//! SQLite repository implementation.
//!
//! Implements `FirstSeenRepository` from `rssize_core::storage` using SQLite.

use async_trait::async_trait;
use tokio_rusqlite::Connection;

use rssize_core::storage::{EntryFirstSeen, FirstSeenRepository, RepositoryError, Result};

use super::conversions::{format_datetime, row_to_first_seen};
use super::error::map_tokio_rusqlite_error;
use super::schema;

/// Helper to wrap rusqlite errors for tokio_rusqlite closures.
fn wrap_err(e: rusqlite::Error) -> tokio_rusqlite::Error {
    tokio_rusqlite::Error::Rusqlite(e)
}

/// SQLite-based first-seen store.
pub struct SqliteRepository {
    conn: Connection,
}

impl SqliteRepository {
    /// Creates a new repository with a file-based database.
    ///
    /// The database file will be created if it doesn't exist.
    /// Schema tables are created automatically.
    pub async fn new(path: &str) -> Result<Self> {
        let conn = Connection::open(path)
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    /// Creates a new repository with an in-memory database.
    pub async fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .await
            .map_err(|e| RepositoryError::ConnectionFailed(e.to_string()))?;

        Self::init_schema(&conn).await?;

        Ok(Self { conn })
    }

    async fn init_schema(conn: &Connection) -> Result<()> {
        conn.call(|conn| {
            conn.execute_batch(schema::CREATE_TABLES)
                .map_err(wrap_err)?;
            Ok(())
        })
        .await
        .map_err(|e| RepositoryError::QueryFailed(e.to_string()))
    }
}

#[async_trait]
impl FirstSeenRepository for SqliteRepository {
    async fn get_first_seen(&self, entry_id: i64) -> Result<Option<EntryFirstSeen>> {
        self.conn
            .call(move |conn| {
                let mut stmt = conn.prepare(schema::SELECT_FIRST_SEEN).map_err(wrap_err)?;
                match stmt.query_row([entry_id], row_to_first_seen) {
                    Ok(record) => Ok(Some(record)),
                    Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
                    Err(e) => Err(wrap_err(e)),
                }
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entry_id))
    }

    async fn insert_if_absent(&self, record: EntryFirstSeen) -> Result<EntryFirstSeen> {
        let entry_id = record.entry_id;
        let first_seen = format_datetime(&record.first_seen);

        self.conn
            .call(move |conn| {
                let tx = conn.transaction().map_err(wrap_err)?;
                tx.execute(
                    schema::INSERT_FIRST_SEEN_IF_ABSENT,
                    rusqlite::params![entry_id, first_seen],
                )
                .map_err(wrap_err)?;
                let stored = tx
                    .query_row(schema::SELECT_FIRST_SEEN, [entry_id], row_to_first_seen)
                    .map_err(wrap_err)?;
                tx.commit().map_err(wrap_err)?;
                Ok(stored)
            })
            .await
            .map_err(|e| map_tokio_rusqlite_error(e, entry_id))
    }
}
