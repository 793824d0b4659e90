//! Integration tests for Shopfront.
//!
//! The tests in `tests/` drive several mounted views against one shared
//! storage backend, the way separate components and browser tabs share
//! one origin's storage.
//!
//! # Test Categories
//!
//! - `cart_sync` - Badge, product view, and cart page staying consistent
//! - `cross_tab` - Tabs sharing a backend through storage events
//! - `persistence` - File-backed storage and fail-closed reads

use std::path::Path;
use std::sync::Arc;

use shopfront_core::{Product, ProductId};
use shopfront_storefront::catalog::Catalog;
use shopfront_storefront::config::ShopConfig;
use shopfront_storefront::state::AppState;
use shopfront_storefront::storage::{FileStorage, MemoryStorage, Storage};
use shopfront_storefront::store::ShopStore;

/// Look up a built-in catalog product.
///
/// # Panics
///
/// Panics if `id` is not in the built-in catalog.
#[must_use]
#[allow(clippy::expect_used)]
pub fn product(id: &str) -> &'static Product {
    Catalog::builtin()
        .get(&ProductId::new(id))
        .expect("product in built-in catalog")
}

/// A fresh in-memory backend and one tab over it.
#[must_use]
pub fn memory_store() -> (Arc<MemoryStorage>, ShopStore) {
    let storage = Arc::new(MemoryStorage::new());
    let store = ShopStore::new(Arc::clone(&storage) as Arc<dyn Storage>);
    (storage, store)
}

/// App state over a fresh in-memory backend.
#[must_use]
pub fn memory_state() -> AppState {
    AppState::new(ShopConfig::default(), Arc::new(MemoryStorage::new()))
}

/// App state over file storage rooted at `dir`.
#[must_use]
pub fn file_state(dir: &Path) -> AppState {
    let config = ShopConfig {
        data_dir: dir.to_path_buf(),
        ..ShopConfig::default()
    };
    let storage = Arc::new(FileStorage::new(dir));
    AppState::new(config, storage)
}

/// Ids of `products`, in order.
#[must_use]
pub fn ids(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.id.to_string()).collect()
}
