//! Durable key-value storage for learner state
//!
//! Every manager persists exactly one JSON record under a fixed key. The
//! [`KeyValueStore`] trait is the only thing managers know about storage, so
//! the same manager code runs against an in-memory map, a directory of JSON
//! files, or a SQLite database.

mod file;
mod memory;
mod sqlite;

pub use file::{FileStore, write_atomic};
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Key holding today's [`crate::daily::DailyChallenge`]
pub const DAILY_KEY: &str = "snabbalexin_daily";
/// Key holding the cross-day [`crate::daily::StreakRecord`]
pub const STREAK_KEY: &str = "snabbalexin_streak";
/// Key holding the array of [`crate::mistakes::MistakeEntry`]
pub const MISTAKES_KEY: &str = "snabbalexin_mistakes";
/// Key holding the [`crate::progress::UserProgress`] record
pub const PROGRESS_KEY: &str = "snabbalexin_progress";

/// Errors raised by storage backends
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Failed to serialize record: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Invalid storage key: {0:?}")]
    InvalidKey(String),
}

/// String-valued key-value storage with whole-record replace semantics
pub trait KeyValueStore: Send + Sync {
    /// Read the value stored under `key`, `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Replace the value stored under `key`
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`; deleting a missing key is not an error
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Why a record could not be loaded
#[derive(Debug)]
pub enum LoadError {
    /// Backend failure while reading
    Storage(StorageError),
    /// The stored blob is not valid JSON for the record type
    Parse(serde_json::Error),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "{}", e),
            Self::Parse(e) => write!(f, "malformed record: {}", e),
        }
    }
}

/// Read and decode the JSON record under `key`.
///
/// `Ok(None)` means the key was never written.
pub fn load_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, LoadError> {
    let Some(raw) = store.get(key).map_err(LoadError::Storage)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw).map(Some).map_err(LoadError::Parse)
}

/// Like [`load_json`] for struct records, which must be stored as a JSON
/// object. Any other top-level value is a [`LoadError::Parse`].
pub fn load_record<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, LoadError> {
    let Some(value) = load_json::<serde_json::Value>(store, key)? else {
        return Ok(None);
    };
    if !value.is_object() {
        let msg = format!("expected an object under {}", key);
        return Err(LoadError::Parse(<serde_json::Error as serde::de::Error>::custom(msg)));
    }
    serde_json::from_value(value).map(Some).map_err(LoadError::Parse)
}

/// Encode `value` as JSON and write it under `key`
pub fn save_json<T: Serialize + ?Sized>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string(value)?;
    store.set(key, &raw)
}

/// Keys are used as file names by [`FileStore`], so they are restricted to
/// a portable character set.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-' || c == '.')
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
