//! String key-value stores for persisted blobs.
//!
//! [`MemoryStore`] keeps everything in a map and is what tests use.
//! [`FileStore`] keeps the whole map in one bincode file, rewritten with the
//! write-rename pattern on every change so a crash mid-write leaves the
//! previous file intact.

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// A string-keyed store of string blobs.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Errors raised by a store backend.
#[derive(Debug)]
pub enum StoreError {
    Io(io::Error),
    Bincode(Box<bincode::ErrorKind>),
    Unavailable(String),
}

impl From<io::Error> for StoreError {
    fn from(e: io::Error) -> Self {
        StoreError::Io(e)
    }
}

impl From<Box<bincode::ErrorKind>> for StoreError {
    fn from(e: Box<bincode::ErrorKind>) -> Self {
        StoreError::Bincode(e)
    }
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StoreError::Io(e) => write!(f, "IO error: {}", e),
            StoreError::Bincode(e) => write!(f, "Store file corrupt: {}", e),
            StoreError::Unavailable(why) => write!(f, "Storage unavailable: {}", why),
        }
    }
}

impl std::error::Error for StoreError {}

#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    entries: BTreeMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// All keys in one bincode-encoded file.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open a store file. A missing file is an empty store; an unreadable or
    /// corrupt one is an error.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read(&path) {
            Ok(bytes) => bincode::deserialize(&bytes)?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => return Err(e.into()),
        };
        log::debug!("opened store {} ({} keys)", path.display(), entries.len());
        Ok(Self { path, entries })
    }

    /// Like [`FileStore::open`], but a corrupt file is moved aside to
    /// `{path}.corrupt` and the store starts empty. Returns the backup path
    /// when that happened.
    pub fn open_or_recover(
        path: impl Into<PathBuf>,
    ) -> Result<(Self, Option<PathBuf>), StoreError> {
        let path = path.into();
        match Self::open(&path) {
            Ok(store) => Ok((store, None)),
            Err(StoreError::Bincode(e)) => {
                let mut backup = path.as_os_str().to_owned();
                backup.push(".corrupt");
                let backup = PathBuf::from(backup);
                fs::rename(&path, &backup)?;
                log::warn!(
                    "store {} is corrupt ({}); moved to {}",
                    path.display(),
                    e,
                    backup.display()
                );
                let store = Self {
                    path,
                    entries: BTreeMap::new(),
                };
                Ok((store, Some(backup)))
            }
            Err(e) => Err(e),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let bytes = bincode::serialize(&self.entries)?;
        atomic_write(&self.path, &bytes)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let previous = self.entries.insert(key.to_string(), value.to_string());
        if let Err(e) = self.persist() {
            // Keep memory in step with disk
            match previous {
                Some(old) => self.entries.insert(key.to_string(), old),
                None => self.entries.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        if let Some(old) = self.entries.remove(key) {
            if let Err(e) = self.persist() {
                self.entries.insert(key.to_string(), old);
                return Err(e);
            }
        }
        Ok(())
    }
}

/// Write `data` to `{path}.tmp`, sync it, then rename over `path`.
fn atomic_write(path: &Path, data: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");

    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("a").unwrap(), None);
        store.set("a", "1").unwrap();
        store.set("a", "2").unwrap();
        assert_eq!(store.get("a").unwrap().as_deref(), Some("2"));
        store.remove("a").unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("calc.store");

        let mut store = FileStore::open(&path).unwrap();
        store.set("calculator_selection", "{\"version\":1}").unwrap();
        store.set("calculator_theme", "light").unwrap();
        store.remove("calculator_theme").unwrap();
        drop(store);

        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(
            reopened.get("calculator_selection").unwrap().as_deref(),
            Some("{\"version\":1}")
        );
        assert_eq!(reopened.get("calculator_theme").unwrap(), None);

        let mut tmp = path.as_os_str().to_owned();
        tmp.push(".tmp");
        assert!(!Path::new(&tmp).exists());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::open(dir.path().join("absent.store")).unwrap();
        assert_eq!(store.get("anything").unwrap(), None);
    }

    #[test]
    fn test_file_store_corrupt_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.store");
        fs::write(&path, [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]).unwrap();
        assert!(matches!(FileStore::open(&path), Err(StoreError::Bincode(_))));
    }

    #[test]
    fn test_recover_moves_corrupt_file_aside() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.store");
        fs::write(&path, [0xff; 9]).unwrap();

        let (mut store, backup) = FileStore::open_or_recover(&path).unwrap();
        let backup = backup.unwrap();
        assert_eq!(backup, dir.path().join("bad.store.corrupt"));
        assert_eq!(fs::read(&backup).unwrap(), vec![0xff; 9]);
        assert_eq!(store.get("calculator_selection").unwrap(), None);

        store.set("calculator_theme", "light").unwrap();
        let (reopened, backup) = FileStore::open_or_recover(&path).unwrap();
        assert!(backup.is_none());
        assert_eq!(reopened.get("calculator_theme").unwrap().as_deref(), Some("light"));
    }
}
