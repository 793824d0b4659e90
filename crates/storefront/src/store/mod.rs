//! Shared cart and wishlist store.
//!
//! [`ShopStore`] is one tab's handle on the persisted lists. Storage is the
//! single source of truth: every read goes to the backend, every mutation is
//! a read-modify-write of the whole list followed by a same-tab signal.
//!
//! # Guarantees
//!
//! - Reads never fail. A missing key or a value that is not a JSON array
//!   reads as empty. Entries that do not parse, or whose price is out of
//!   range, are skipped. Both cases log a warning.
//! - Mutators hold the tab's write lock for the whole read-modify-write, so
//!   calls from one tab never interleave.
//! - Mutators keep the lists free of duplicate product ids.
//!
//! Tabs sharing a backend are not coordinated with each other. Two tabs
//! adding the same product at the same moment can both see it absent and
//! both append it.

mod keys;
mod notify;
mod outcome;

use std::sync::{Arc, Mutex, MutexGuard};

use serde::Serialize;
use serde::de::DeserializeOwned;
use shopfront_core::{Order, Product, ProductId, TabId};
use tokio::sync::broadcast;
use tracing::instrument;

use crate::storage::{Storage, StorageError};

pub use keys::ListKey;
pub use notify::{Refresh, StoreSignal, Subscription};
pub use outcome::Outcome;

/// Capacity of the same-tab signal channel.
const SIGNAL_CAPACITY: usize = 32;

/// One tab's handle on the shared store.
///
/// Cheaply cloneable; clones belong to the same tab and share its signal
/// channel. Use [`ShopStore::open_tab`] for an independent tab over the same
/// storage.
#[derive(Clone)]
pub struct ShopStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    tab: TabId,
    storage: Arc<dyn Storage>,
    signals: broadcast::Sender<StoreSignal>,
    write_lock: Mutex<()>,
}

impl std::fmt::Debug for ShopStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopStore")
            .field("tab", &self.inner.tab)
            .field("storage", &self.inner.storage)
            .finish_non_exhaustive()
    }
}

impl ShopStore {
    /// Create a store for a new tab over `storage`.
    #[must_use]
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        let (signals, _) = broadcast::channel(SIGNAL_CAPACITY);
        let tab = TabId::new_v4();
        tracing::debug!(%tab, "Opened store tab");
        Self {
            inner: Arc::new(StoreInner {
                tab,
                storage,
                signals,
                write_lock: Mutex::new(()),
            }),
        }
    }

    /// Open another tab over the same storage.
    ///
    /// The new tab has its own signal channel; it learns about this tab's
    /// writes through storage events only.
    #[must_use]
    pub fn open_tab(&self) -> Self {
        Self::new(Arc::clone(&self.inner.storage))
    }

    /// This handle's tab.
    #[must_use]
    pub fn tab(&self) -> TabId {
        self.inner.tab
    }

    /// Subscribe to changes visible to this tab.
    ///
    /// Subscribe before the initial read so no change falls in between.
    #[must_use]
    pub fn subscribe(&self) -> Subscription {
        Subscription::new(
            self.inner.tab,
            self.inner.signals.subscribe(),
            self.inner.storage.subscribe(),
        )
    }

    // =========================================================================
    // Persisted Store Accessor
    // =========================================================================

    /// Read a product list. Absent or malformed values read as empty, and
    /// unreadable entries are dropped from the result.
    ///
    /// `ListKey::Orders` holds orders, not products, so it always reads as
    /// empty here; use [`ShopStore::orders`].
    #[must_use]
    pub fn read_list(&self, key: ListKey) -> Vec<Product> {
        if key == ListKey::Orders {
            return Vec::new();
        }
        self.read_json::<Product>(key)
            .into_iter()
            .filter(|product| {
                let valid = product.has_valid_price();
                if !valid {
                    tracing::warn!(
                        %key,
                        product_id = %product.id,
                        price = %product.price,
                        "Skipping stored entry with out-of-range price"
                    );
                }
                valid
            })
            .collect()
    }

    /// Overwrite a product list with `list`.
    ///
    /// Whole-list replacement: no merge with what is stored. Does not fire a
    /// same-tab signal; the mutators do that.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the list cannot be serialized or written.
    pub fn write_list(&self, key: ListKey, list: &[Product]) -> Result<(), StorageError> {
        self.write_json(key, list)
    }

    /// Read the order history. Absent or malformed values read as empty.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        self.read_json(ListKey::Orders)
    }

    fn read_json<T: DeserializeOwned>(&self, key: ListKey) -> Vec<T> {
        let raw = match self.inner.storage.get(key.as_str()) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Vec::new(),
            Err(e) => {
                tracing::warn!(%key, error = %e, "Failed to read stored list");
                return Vec::new();
            }
        };

        let entries: Vec<serde_json::Value> = match serde_json::from_str(&raw) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::warn!(%key, error = %e, "Stored list is malformed, treating as empty");
                return Vec::new();
            }
        };

        entries
            .into_iter()
            .enumerate()
            .filter_map(|(index, entry)| match serde_json::from_value(entry) {
                Ok(item) => Some(item),
                Err(e) => {
                    tracing::warn!(%key, index, error = %e, "Skipping unreadable stored entry");
                    None
                }
            })
            .collect()
    }

    fn write_json<T: Serialize>(&self, key: ListKey, list: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(list)?;
        self.inner
            .storage
            .set(key.as_str(), &raw, self.inner.tab)
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Add a copy of `product` to the cart.
    ///
    /// No-op if a cart entry with the same id exists.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn add_to_cart(&self, product: &Product) -> Outcome {
        let _guard = self.lock();
        let mut cart = self.read_list(ListKey::Cart);
        if contains(&cart, &product.id) {
            tracing::debug!("Already in cart");
            return Outcome::Unchanged;
        }
        cart.push(product.clone());
        self.commit(ListKey::Cart, &cart, Outcome::Added)
    }

    /// Remove every cart entry with `product_id`.
    ///
    /// The remainder is persisted even if nothing matched.
    #[instrument(skip(self))]
    pub fn remove_from_cart(&self, product_id: &ProductId) -> Outcome {
        self.remove_from(ListKey::Cart, product_id)
    }

    /// Toggle `product`'s wishlist membership.
    ///
    /// Returns `Added` or `Removed`, or `NotSaved` with the membership
    /// unchanged.
    #[instrument(skip(self, product), fields(product_id = %product.id))]
    pub fn toggle_wishlist(&self, product: &Product) -> Outcome {
        let _guard = self.lock();
        let mut wishlist = self.read_list(ListKey::Wishlist);

        if contains(&wishlist, &product.id) {
            let next = without(wishlist, &product.id);
            self.commit(ListKey::Wishlist, &next, Outcome::Removed)
        } else {
            wishlist.push(product.clone());
            self.commit(ListKey::Wishlist, &wishlist, Outcome::Added)
        }
    }

    /// Remove every wishlist entry with `product_id`.
    ///
    /// The remainder is persisted even if nothing matched.
    #[instrument(skip(self))]
    pub fn remove_from_wishlist(&self, product_id: &ProductId) -> Outcome {
        self.remove_from(ListKey::Wishlist, product_id)
    }

    /// Delete a product list from storage. It reads as empty afterwards.
    ///
    /// Order history is read-only and is left in place.
    #[instrument(skip(self))]
    pub fn clear(&self, key: ListKey) -> Outcome {
        if key == ListKey::Orders {
            return Outcome::Unchanged;
        }
        let _guard = self.lock();
        if let Err(e) = self.inner.storage.remove(key.as_str(), self.inner.tab) {
            tracing::warn!(%key, error = %e, "Failed to clear list");
            return Outcome::NotSaved;
        }
        self.signal(key, 0);
        Outcome::Removed
    }

    // =========================================================================
    // Queries
    // =========================================================================

    /// Returns true if the cart holds `product_id`.
    #[must_use]
    pub fn in_cart(&self, product_id: &ProductId) -> bool {
        contains(&self.read_list(ListKey::Cart), product_id)
    }

    /// Returns true if the wishlist holds `product_id`.
    #[must_use]
    pub fn in_wishlist(&self, product_id: &ProductId) -> bool {
        contains(&self.read_list(ListKey::Wishlist), product_id)
    }

    /// Number of entries under `key`.
    #[must_use]
    pub fn count(&self, key: ListKey) -> usize {
        match key {
            ListKey::Orders => self.orders().len(),
            ListKey::Cart | ListKey::Wishlist => self.read_list(key).len(),
        }
    }

    // =========================================================================
    // Helpers
    // =========================================================================

    fn lock(&self) -> MutexGuard<'_, ()> {
        // The guarded data is `()`, so a poisoned lock carries no broken state.
        self.inner
            .write_lock
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }

    fn remove_from(&self, key: ListKey, product_id: &ProductId) -> Outcome {
        let _guard = self.lock();
        let list = self.read_list(key);
        let before = list.len();
        let list = without(list, product_id);
        let outcome = if list.len() < before {
            Outcome::Removed
        } else {
            Outcome::Unchanged
        };
        self.commit(key, &list, outcome)
    }

    /// Persist `list` and fire the list's signal. Write failures are logged
    /// and reported as `NotSaved`; they never reach the UI.
    fn commit(&self, key: ListKey, list: &[Product], outcome: Outcome) -> Outcome {
        if let Err(e) = self.write_list(key, list) {
            tracing::warn!(%key, error = %e, "Failed to persist list");
            return Outcome::NotSaved;
        }
        self.signal(key, list.len());
        outcome
    }

    fn signal(&self, key: ListKey, len: usize) {
        let signal = match key {
            ListKey::Cart => StoreSignal::CartUpdated,
            ListKey::Wishlist => StoreSignal::WishlistUpdated,
            ListKey::Orders => return,
        };
        tracing::debug!(%key, len, signal = signal.name(), "List updated");
        // No receivers just means no component is mounted.
        let _ = self.inner.signals.send(signal);
    }
}

fn contains(list: &[Product], product_id: &ProductId) -> bool {
    list.iter().any(|entry| &entry.id == product_id)
}

fn without(mut list: Vec<Product>, product_id: &ProductId) -> Vec<Product> {
    list.retain(|entry| &entry.id != product_id);
    list
}
