//! File-backed storage backend.
//!
//! Each key is stored as `<data_dir>/<key>.json`. Writes go to a uniquely
//! named temporary file in the same directory which is then persisted over
//! the target, so a crash mid-write never leaves a truncated value behind
//! and concurrent writers never share a temporary file.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use shopfront_core::TabId;
use tokio::sync::broadcast;

use super::{EVENT_CAPACITY, Storage, StorageError, StorageEvent, notify};

/// Key-value storage persisted as one JSON file per key.
#[derive(Debug)]
pub struct FileStorage {
    dir: PathBuf,
    events: broadcast::Sender<StorageEvent>,
}

impl FileStorage {
    /// Create a storage rooted at `dir`.
    ///
    /// The directory is created lazily on first write.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            dir: dir.into(),
            events,
        }
    }

    /// Directory holding the value files.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match std::fs::read_to_string(&path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str, origin: TabId) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        let temp = tempfile::NamedTempFile::new_in(&self.dir)?;
        std::fs::write(temp.path(), value)?;
        temp.persist(&path).map_err(|e| e.error)?;

        tracing::trace!(key, path = %path.display(), "Wrote storage file");
        notify(&self.events, key, origin);
        Ok(())
    }

    fn remove(&self, key: &str, origin: TabId) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        match std::fs::remove_file(&path) {
            Ok(()) => {}
            Err(e) if e.kind() == ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
        notify(&self.events, key, origin);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.events.subscribe()
    }
}
