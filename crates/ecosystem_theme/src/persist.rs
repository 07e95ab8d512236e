//! Best-effort write-through persistence for the stores
//!
//! Failures are logged and swallowed. The in-memory state stays
//! authoritative and the next load falls back to defaults.

use ecosystem_storage::{load_versioned, save_versioned, MemoryStorage, Storage};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;

/// Storage key of the theme selection
pub const THEME_STORAGE_KEY: &str = "ecosystem-theme";
pub const THEME_STORAGE_VERSION: u32 = 0;

/// Storage key of the customizer state
pub const CUSTOMIZER_STORAGE_KEY: &str = "ecosystem-customizer";
/// Bump whenever the persisted customizer shape changes
pub const CUSTOMIZER_STORAGE_VERSION: u32 = 4;

/// One versioned record in a [`Storage`] backend
#[derive(Clone)]
pub struct Persistence {
    storage: Arc<dyn Storage>,
    key: &'static str,
    version: u32,
}

impl Persistence {
    pub fn new(storage: Arc<dyn Storage>, key: &'static str, version: u32) -> Self {
        Self {
            storage,
            key,
            version,
        }
    }

    /// Backed by a fresh [`MemoryStorage`]
    pub fn in_memory(key: &'static str, version: u32) -> Self {
        Self::new(Arc::new(MemoryStorage::new()), key, version)
    }

    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Load the record, or `None` if it is absent, stale or unreadable
    pub fn load<T: DeserializeOwned>(&self) -> Option<T> {
        match load_versioned(self.storage.as_ref(), self.key, self.version) {
            Ok(state) => state,
            Err(e) => {
                tracing::warn!("Persistence::load - discarding {:?}: {}", self.key, e);
                None
            }
        }
    }

    pub fn save<T: Serialize>(&self, state: &T) {
        if let Err(e) = save_versioned(self.storage.as_ref(), self.key, self.version, state) {
            tracing::warn!("Persistence::save - failed to write {:?}: {}", self.key, e);
        }
    }
}

impl std::fmt::Debug for Persistence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Persistence")
            .field("key", &self.key)
            .field("version", &self.version)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ecosystem_storage::{Result as StorageResult, StorageError};

    struct FailingStorage;

    impl Storage for FailingStorage {
        fn get(&self, _key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::InvalidKey("offline".into()))
        }

        fn set(&self, _key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::InvalidKey("offline".into()))
        }

        fn remove(&self, _key: &str) -> StorageResult<bool> {
            Ok(false)
        }
    }

    #[test]
    fn test_failures_are_swallowed() {
        let persistence = Persistence::new(Arc::new(FailingStorage), "ecosystem-theme", 0);
        persistence.save(&1u32);
        assert_eq!(persistence.load::<u32>(), None);
    }

    #[test]
    fn test_corrupt_record_loads_as_none() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("ecosystem-theme", "not json").unwrap();
        let persistence = Persistence::new(storage, "ecosystem-theme", 0);
        assert_eq!(persistence.load::<u32>(), None);
    }

    #[test]
    fn test_round_trip() {
        let persistence = Persistence::in_memory("k", 2);
        persistence.save(&vec![1, 2, 3]);
        assert_eq!(persistence.load::<Vec<i32>>(), Some(vec![1, 2, 3]));
    }
}
