//! Durable key-value substrate for the serialized store snapshot.
//!
//! # Responsibility
//! - Define the read/write contract the store persists through.
//! - Provide SQLite-backed and in-memory implementations.
//!
//! # Invariants
//! - `write` replaces the whole value stored under a key.
//! - `read` of a key never written returns `Ok(None)`.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryStateStorage;
pub use sqlite::SqliteStateStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Errors raised by storage substrates.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Connection was not opened through `db::open_db*`.
    UninitializedConnection {
        expected_version: u32,
        actual_version: u32,
    },
    MissingRequiredTable(&'static str),
    /// Substrate refused the operation (quota, read-only medium, ...).
    Unavailable(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::UninitializedConnection {
                expected_version,
                actual_version,
            } => write!(
                f,
                "connection is not initialized: expected schema version {expected_version}, found {actual_version}"
            ),
            Self::MissingRequiredTable(table) => write!(f, "missing required table `{table}`"),
            Self::Unavailable(message) => write!(f, "storage unavailable: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Key-value contract used by `PropertyStore` to persist snapshots.
pub trait StateStorage {
    /// Returns the value stored under `key`, if any.
    fn read(&self, key: &str) -> StorageResult<Option<String>>;
    /// Replaces the value stored under `key`.
    fn write(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: StateStorage + ?Sized> StateStorage for &T {
    fn read(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).read(key)
    }

    fn write(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).write(key, value)
    }
}
