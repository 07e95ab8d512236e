//! Ecosystem Storage
//!
//! Durable key-value storage for persisted UI state.
//!
//! - [`Storage`]: the backend trait (raw string values keyed by namespace)
//! - [`MemoryStorage`]: in-process backend for tests and ephemeral sessions
//! - [`FileStorage`]: one JSON document per key inside a directory
//! - [`Versioned`]: the `{"state": ..., "version": N}` envelope every record
//!   is written in, so an incompatible shape is never loaded silently
//!
//! ```rust
//! use ecosystem_storage::{load_versioned, save_versioned, MemoryStorage};
//!
//! let storage = MemoryStorage::new();
//! save_versioned(&storage, "prefs", 1, &vec![1, 2, 3]).unwrap();
//! let loaded: Option<Vec<i32>> = load_versioned(&storage, "prefs", 1).unwrap();
//! assert_eq!(loaded, Some(vec![1, 2, 3]));
//!
//! // A different schema version is treated as absent
//! let stale: Option<Vec<i32>> = load_versioned(&storage, "prefs", 2).unwrap();
//! assert_eq!(stale, None);
//! ```

mod error;
mod file;
mod memory;
mod versioned;

pub use error::{Result, StorageError};
pub use file::FileStorage;
pub use memory::MemoryStorage;
pub use versioned::{load_versioned, save_versioned, Versioned};

/// A durable key-value backend
///
/// Values are opaque strings; typed access goes through [`load_versioned`]
/// and [`save_versioned`].
pub trait Storage: Send + Sync {
    /// Read the raw value for `key`
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write the raw value for `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Delete `key`. Returns true if a value was present.
    fn remove(&self, key: &str) -> Result<bool>;

    /// Check if a key exists
    fn contains(&self, key: &str) -> Result<bool> {
        Ok(self.get(key)?.is_some())
    }
}

/// Keys may only use `[A-Za-z0-9._-]` so every backend can map them to a file name.
pub(crate) fn validate_key(key: &str) -> Result<()> {
    let valid = !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'-' | b'_' | b'.'))
        && !key.starts_with('.');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
