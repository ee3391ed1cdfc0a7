//! Local persistence for the annotation overlay.
//!
//! # Responsibility
//! - Define the narrow key-value contract the annotation store writes through.
//! - Provide SQLite-backed and in-memory key-value implementations.
//! - Own the annotation map lifecycle (load once, replace on every mutation).
//!
//! # Invariants
//! - Storage backends deal in opaque string blobs; only the annotation store
//!   knows the serialized shape.
//! - Every annotation mutation performs exactly one `set` call.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod annotation_store;
pub mod memory_kv;
pub mod sqlite_kv;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a key-value backend.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    /// Backend refused the write (quota, read-only medium, injected failure).
    WriteRejected(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::WriteRejected(message) => write!(f, "storage write rejected: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::WriteRejected(_) => None,
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

/// Synchronous string key-value storage.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        (**self).set(key, value)
    }
}
