//! Key-value persistence backends.
//!
//! The [`Storage`] trait is the origin-scoped key-value store the cart and
//! wishlist live in. Backends are shared between tabs: every write raises a
//! [`StorageEvent`] on the backend's channel, tagged with the writing tab so
//! other tabs can refresh and the writer can ignore its own echo.
//!
//! # Backends
//!
//! - [`MemoryStorage`] - in-process map, cloned handles share data and events
//! - [`FileStorage`] - one `<key>.json` file per key under a data directory

mod file;
mod memory;

use std::fmt::Debug;

use shopfront_core::TabId;
use thiserror::Error;
use tokio::sync::broadcast;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Capacity of a backend's storage-event channel.
pub(crate) const EVENT_CAPACITY: usize = 64;

/// Errors from storage backends.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Key contains characters the backend cannot store.
    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    /// A value could not be serialized for storage.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backend lock was poisoned by a panicking writer.
    #[error("storage lock poisoned")]
    Poisoned,
}

/// Notification that a key was changed by some tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageEvent {
    /// Key that was written or removed.
    pub key: String,
    /// Tab that performed the write.
    pub origin: TabId,
}

/// Origin-scoped string key-value storage.
///
/// Values are opaque strings; callers own the encoding. All methods take
/// `&self` so implementations use interior mutability.
pub trait Storage: Send + Sync + Debug {
    /// Retrieve a value by key.
    ///
    /// Returns `Ok(None)` if the key does not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Insert or overwrite a value, then notify subscribers.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn set(&self, key: &str, value: &str, origin: TabId) -> Result<(), StorageError>;

    /// Remove a value, then notify subscribers.
    ///
    /// Returns `Ok(())` even if the key did not exist.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the backend cannot be written.
    fn remove(&self, key: &str, origin: TabId) -> Result<(), StorageError>;

    /// Subscribe to change events from every tab sharing this backend.
    fn subscribe(&self) -> broadcast::Receiver<StorageEvent>;
}

/// Send an event, ignoring the no-subscriber case.
pub(crate) fn notify(events: &broadcast::Sender<StorageEvent>, key: &str, origin: TabId) {
    let _ = events.send(StorageEvent {
        key: key.to_string(),
        origin,
    });
}
