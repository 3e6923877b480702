use std::path::Path;

use chrono::NaiveDateTime;
use gatekeeper_types::{AttemptRecord, NewAttempt, TIMESTAMP_FORMAT};
use rusqlite::{Connection, OptionalExtension, Row, params};
use tracing::debug;

use super::HistoryStore;
use crate::error::StoreError;

const SELECT_COLUMNS: &str = "SELECT id, code, entry_time, status, category, reason FROM history";

/// SQLite-backed history.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE IF NOT EXISTS history (
///     id INTEGER PRIMARY KEY AUTOINCREMENT,
///     code TEXT NOT NULL,
///     entry_time TEXT NOT NULL,   -- 'YYYY-MM-DD HH:MM:SS', local time
///     status TEXT NOT NULL,       -- 'OK' | 'NG'
///     category TEXT NOT NULL,
///     reason TEXT NOT NULL
/// );
/// ```
///
/// Each append is a single autocommitted INSERT, so a failed write leaves no
/// partial row.
pub struct SqliteHistory {
    conn: Connection,
}

impl std::fmt::Debug for SqliteHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SqliteHistory")
            .field("conn", &"<sqlite>")
            .finish()
    }
}

impl SqliteHistory {
    /// Open (creating if needed) the history database at `path` and ensure the
    /// schema exists.
    ///
    /// Uses WAL journaling with `synchronous=FULL` so an acknowledged append
    /// survives a crash.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path)?;
        let mode: String =
            conn.pragma_update_and_check(None, "journal_mode", "WAL", |row| row.get(0))?;
        debug!(%mode, "history journal mode");
        conn.pragma_update(None, "synchronous", "FULL")?;
        debug!(path = %path.display(), "opened history store");
        let store = Self { conn };
        store.init()?;
        Ok(store)
    }

    /// A private in-memory database with the schema applied.
    pub fn open_in_memory() -> Result<Self, StoreError> {
        let store = Self {
            conn: Connection::open_in_memory()?,
        };
        store.init()?;
        Ok(store)
    }
}

impl HistoryStore for SqliteHistory {
    fn init(&self) -> Result<(), StoreError> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS history (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                code TEXT NOT NULL,
                entry_time TEXT NOT NULL,
                status TEXT NOT NULL,
                category TEXT NOT NULL,
                reason TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS history_latest_ok
                ON history (code, status, entry_time);",
        )?;
        Ok(())
    }

    fn append(&self, attempt: NewAttempt) -> Result<AttemptRecord, StoreError> {
        self.conn.execute(
            "INSERT INTO history (code, entry_time, status, category, reason)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                attempt.code,
                attempt.timestamp.format(TIMESTAMP_FORMAT).to_string(),
                attempt.status.as_str(),
                attempt.category.as_str(),
                attempt.reason,
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!(id, code = %attempt.code, category = %attempt.category, "appended attempt");
        Ok(attempt.into_record(id))
    }

    fn find_latest_ok(&self, code: &str) -> Result<Option<AttemptRecord>, StoreError> {
        let row = self
            .conn
            .query_row(
                &format!(
                    "{SELECT_COLUMNS} WHERE code = ?1 AND status = 'OK'
                     ORDER BY entry_time DESC, id DESC LIMIT 1"
                ),
                params![code],
                HistoryRow::from_row,
            )
            .optional()?;
        row.map(HistoryRow::decode).transpose()
    }

    fn count(&self) -> Result<u64, StoreError> {
        let count: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM history", [], |row| row.get(0))?;
        Ok(count as u64)
    }

    fn records(&self) -> Result<Vec<AttemptRecord>, StoreError> {
        let mut stmt = self.conn.prepare(&format!("{SELECT_COLUMNS} ORDER BY id"))?;
        let rows = stmt
            .query_map([], HistoryRow::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        rows.into_iter().map(HistoryRow::decode).collect()
    }
}

/// A row as stored, before label and timestamp decoding.
struct HistoryRow {
    id: i64,
    code: String,
    entry_time: String,
    status: String,
    category: String,
    reason: String,
}

impl HistoryRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            code: row.get(1)?,
            entry_time: row.get(2)?,
            status: row.get(3)?,
            category: row.get(4)?,
            reason: row.get(5)?,
        })
    }

    fn decode(self) -> Result<AttemptRecord, StoreError> {
        let id = self.id;
        let timestamp = NaiveDateTime::parse_from_str(&self.entry_time, TIMESTAMP_FORMAT)
            .map_err(|e| StoreError::corrupt(id, format!("entry_time '{}': {e}", self.entry_time)))?;
        let status = self.status.parse().map_err(|e| StoreError::corrupt(id, e))?;
        let category = self.category.parse().map_err(|e| StoreError::corrupt(id, e))?;
        Ok(AttemptRecord {
            id,
            code: self.code,
            timestamp,
            status,
            category,
            reason: self.reason,
        })
    }
}
