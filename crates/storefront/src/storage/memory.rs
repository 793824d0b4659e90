//! In-memory storage backend.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use shopfront_core::TabId;
use tokio::sync::broadcast;

use super::{EVENT_CAPACITY, Storage, StorageError, StorageEvent, notify};

/// In-process key-value storage.
///
/// Cloning yields another handle to the same map and event channel, which is
/// how several tabs of one origin share state.
#[derive(Debug, Clone)]
pub struct MemoryStorage {
    inner: Arc<MemoryInner>,
}

#[derive(Debug)]
struct MemoryInner {
    values: RwLock<HashMap<String, String>>,
    events: broadcast::Sender<StorageEvent>,
}

impl MemoryStorage {
    /// Create an empty storage.
    #[must_use]
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            inner: Arc::new(MemoryInner {
                values: RwLock::new(HashMap::new()),
                events,
            }),
        }
    }
}

impl Default for MemoryStorage {
    fn default() -> Self {
        Self::new()
    }
}

impl Storage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let values = self
            .inner
            .values
            .read()
            .map_err(|_| StorageError::Poisoned)?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str, origin: TabId) -> Result<(), StorageError> {
        {
            let mut values = self
                .inner
                .values
                .write()
                .map_err(|_| StorageError::Poisoned)?;
            values.insert(key.to_string(), value.to_string());
        }
        notify(&self.inner.events, key, origin);
        Ok(())
    }

    fn remove(&self, key: &str, origin: TabId) -> Result<(), StorageError> {
        {
            let mut values = self
                .inner
                .values
                .write()
                .map_err(|_| StorageError::Poisoned)?;
            values.remove(key);
        }
        notify(&self.inner.events, key, origin);
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<StorageEvent> {
        self.inner.events.subscribe()
    }
}
