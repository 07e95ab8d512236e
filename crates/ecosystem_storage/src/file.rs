//! Directory-backed storage: one `<key>.json` file per key

use crate::{validate_key, Result, Storage};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Storage that keeps each key in its own file under `dir`
///
/// The directory is created lazily on the first write. Writes go to a
/// temporary sibling first and are renamed into place, so a crash mid-write
/// leaves the previous value intact.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The backing directory
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        validate_key(key)?;
        match fs::read_to_string(self.path_for(key)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        validate_key(key)?;
        fs::create_dir_all(&self.dir)?;

        let path = self.path_for(key);
        let tmp = self.dir.join(format!(".{key}.json.tmp"));
        fs::write(&tmp, value)?;
        fs::rename(&tmp, &path)?;

        tracing::trace!("FileStorage::set - wrote {}", path.display());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<bool> {
        validate_key(key)?;
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(false),
            Err(err) => Err(err.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_dir_reads_as_empty() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().join("not-yet"));
        assert_eq!(storage.get("ecosystem-theme").unwrap(), None);
        assert!(!storage.remove("ecosystem-theme").unwrap());
    }

    #[test]
    fn test_write_creates_dir_and_file() {
        let tmp = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(tmp.path().join("state"));

        storage.set("ecosystem-theme", "{}").unwrap();
        assert!(tmp.path().join("state/ecosystem-theme.json").is_file());
        assert_eq!(storage.get("ecosystem-theme").unwrap().as_deref(), Some("{}"));

        assert!(storage.remove("ecosystem-theme").unwrap());
        assert_eq!(storage.get("ecosystem-theme").unwrap(), None);
    }
}
