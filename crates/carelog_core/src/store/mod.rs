//! Persistent collection backing store.
//!
//! # Responsibility
//! - Define the string-keyed blob store contract and its SQLite
//!   implementation.
//! - Decode persisted blobs into collection record lists, distinguishing
//!   absent from malformed state.
//!
//! # Invariants
//! - One collection is one blob; each write replaces the whole blob
//!   atomically.
//! - Reading a missing key is not an error; callers treat absence as an
//!   empty collection.
//! - A malformed blob is reported as such, never silently rewritten here —
//!   repair policy belongs to the seeder.

use crate::db::DbError;
use crate::model::now_epoch_ms;
use log::warn;
use rusqlite::{params, Connection, OptionalExtension};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod cache;

pub use cache::CollectionCache;

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-layer error for blob persistence and connection readiness.
#[derive(Debug)]
pub enum StoreError {
    Db(DbError),
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    MissingRequiredColumn {
        table: &'static str,
        column: &'static str,
    },
    Serialize(serde_json::Error),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection not migrated: schema version {actual_version}, expected {expected_version}"
            ),
            Self::MissingRequiredTable(table) => {
                write!(f, "required table `{table}` is missing")
            }
            Self::MissingRequiredColumn { table, column } => {
                write!(f, "required column `{table}.{column}` is missing")
            }
            Self::Serialize(err) => write!(f, "collection blob encoding failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::Serialize(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Backing-store contract: one serialized collection blob per string key.
pub trait CollectionStore {
    /// Reads the blob stored under `key`, or `None` when absent.
    fn read_blob(&self, key: &str) -> StoreResult<Option<String>>;
    /// Replaces the blob stored under `key` in one atomic write.
    fn write_blob(&self, key: &str, blob: &str) -> StoreResult<()>;
}

/// SQLite-backed collection store over the `collections` table.
pub struct SqliteCollectionStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCollectionStore<'conn> {
    /// Constructs a store from a migrated/ready connection.
    pub fn try_new(conn: &'conn Connection) -> StoreResult<Self> {
        ensure_connection_ready(conn)?;
        Ok(Self { conn })
    }
}

impl CollectionStore for SqliteCollectionStore<'_> {
    fn read_blob(&self, key: &str) -> StoreResult<Option<String>> {
        let blob = self
            .conn
            .query_row(
                "SELECT blob FROM collections WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(blob)
    }

    fn write_blob(&self, key: &str, blob: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT INTO collections (key, blob, updated_at)
             VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET
                blob = excluded.blob,
                updated_at = excluded.updated_at;",
            params![key, blob, now_epoch_ms()],
        )?;
        Ok(())
    }
}

/// Decoded state of one persisted collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CollectionState {
    /// No blob stored under the key.
    Absent,
    /// A blob exists but does not parse as a record list.
    Malformed,
    /// Parsed record list.
    Loaded(Vec<Value>),
}

/// Reads and decodes one collection.
///
/// A malformed blob is logged and reported as `Malformed`; it is left on
/// disk untouched so an explicit repair can still inspect or replace it.
pub fn load_collection_state(
    store: &dyn CollectionStore,
    key: &str,
) -> StoreResult<CollectionState> {
    let Some(blob) = store.read_blob(key)? else {
        return Ok(CollectionState::Absent);
    };

    match serde_json::from_str::<Value>(&blob) {
        Ok(Value::Array(records)) => Ok(CollectionState::Loaded(records)),
        Ok(_) => {
            warn!("event=collection_read module=store status=malformed key={key} reason=not_an_array");
            Ok(CollectionState::Malformed)
        }
        Err(err) => {
            warn!("event=collection_read module=store status=malformed key={key} reason=parse_error error={err}");
            Ok(CollectionState::Malformed)
        }
    }
}

/// Serializes and writes one collection as a single blob.
pub fn persist_collection(
    store: &dyn CollectionStore,
    key: &str,
    records: &[Value],
) -> StoreResult<()> {
    let blob = serde_json::to_string(records).map_err(StoreError::Serialize)?;
    store.write_blob(key, &blob)
}

fn ensure_connection_ready(conn: &Connection) -> StoreResult<()> {
    let expected_version = crate::db::migrations::latest_version();
    let actual_version: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    if actual_version < expected_version {
        return Err(StoreError::UninitializedConnection {
            expected_version,
            actual_version,
        });
    }

    if !table_exists(conn, "collections")? {
        return Err(StoreError::MissingRequiredTable("collections"));
    }
    for column in ["key", "blob", "updated_at"] {
        if !table_has_column(conn, "collections", column)? {
            return Err(StoreError::MissingRequiredColumn {
                table: "collections",
                column,
            });
        }
    }

    Ok(())
}

fn table_exists(conn: &Connection, table: &str) -> StoreResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}

fn table_has_column(conn: &Connection, table: &str, column: &str) -> StoreResult<bool> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({table});"))?;
    let mut rows = stmt.query([])?;
    while let Some(row) = rows.next()? {
        let current: String = row.get(1)?;
        if current == column {
            return Ok(true);
        }
    }
    Ok(false)
}
