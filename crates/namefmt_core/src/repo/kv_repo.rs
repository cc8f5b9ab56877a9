//! Key-value store contract and SQLite implementation.
//!
//! # Responsibility
//! - Persist single string slots (the name list lives under [`NAMES_KEY`]).
//! - Collapse every medium failure into a read or write outcome the caller
//!   can inspect.
//!
//! # Invariants
//! - `set` is last-write-wins; a failed `set` leaves the previous value intact.
//! - `get` never reports a value that was not durably committed.
//! - Keys must be non-empty after trimming.

use crate::db::DbError;
use log::{debug, error, warn};
use rusqlite::{params, Connection, OptionalExtension};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Well-known slot holding the serialized name list.
pub const NAMES_KEY: &str = "names";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store failure taxonomy.
#[derive(Debug)]
pub enum StoreError {
    /// Key is empty or whitespace-only.
    InvalidKey(String),
    /// The medium could not be read (corrupt, locked past the busy timeout,
    /// permission denied, not initialized).
    Unavailable(DbError),
    /// The write could not be durably committed.
    WriteFailed(DbError),
}

impl StoreError {
    /// Stable machine-readable code used in log events.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidKey(_) => "invalid_key",
            Self::Unavailable(_) => "storage_unavailable",
            Self::WriteFailed(_) => "storage_write_failed",
        }
    }
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidKey(key) => write!(f, "invalid store key: `{key}`"),
            Self::Unavailable(err) => write!(f, "storage unavailable: {err}"),
            Self::WriteFailed(err) => write!(f, "storage write failed: {err}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidKey(_) => None,
            Self::Unavailable(err) | Self::WriteFailed(err) => Some(err),
        }
    }
}

/// String-keyed durable store.
pub trait KvStore {
    /// Returns the stored value, or `None` when the key was never set.
    fn get(&self, key: &str) -> StoreResult<Option<String>>;
    /// Stores `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StoreResult<()>;
}

impl<S: KvStore + ?Sized> KvStore for &S {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        (**self).set(key, value)
    }
}

/// SQLite-backed store over the `kv_entries` table.
pub struct SqliteKvStore<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteKvStore<'conn> {
    /// Wraps a connection returned by `open_db` / `open_db_in_memory`.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl KvStore for SqliteKvStore<'_> {
    fn get(&self, key: &str) -> StoreResult<Option<String>> {
        let key = validate_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM kv_entries WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()
            .map_err(|err| {
                warn!(
                    "event=store_get module=repo status=error error_code=storage_unavailable error={}",
                    err
                );
                StoreError::Unavailable(err.into())
            })?;

        debug!(
            "event=store_get module=repo status=ok present={} value_len={}",
            value.is_some(),
            value.as_ref().map_or(0, String::len)
        );
        Ok(value)
    }

    fn set(&self, key: &str, value: &str) -> StoreResult<()> {
        let key = validate_key(key)?;
        self.conn
            .execute(
                "INSERT INTO kv_entries (key, value)
                 VALUES (?1, ?2)
                 ON CONFLICT(key) DO UPDATE SET
                    value = excluded.value,
                    updated_at = (strftime('%s', 'now') * 1000);",
                params![key, value],
            )
            .map_err(|err| {
                error!(
                    "event=store_set module=repo status=error error_code=storage_write_failed error={}",
                    err
                );
                StoreError::WriteFailed(err.into())
            })?;

        debug!(
            "event=store_set module=repo status=ok value_len={}",
            value.len()
        );
        Ok(())
    }
}

fn validate_key(key: &str) -> StoreResult<&str> {
    if key.trim().is_empty() {
        return Err(StoreError::InvalidKey(key.to_string()));
    }
    Ok(key)
}
