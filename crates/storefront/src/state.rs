//! Application state shared across page views.

use std::sync::Arc;

use shopfront_core::CurrencyCode;

use crate::catalog::Catalog;
use crate::config::ShopConfig;
use crate::storage::{FileStorage, Storage};
use crate::store::ShopStore;
use crate::views::{CartPage, NavBadge, ProductView, ProfilePage};

/// Application state for one tab.
///
/// This struct is cheaply cloneable via `Arc` and gives page views access to
/// the configuration, the catalog, and the tab's store.
#[derive(Clone, Debug)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

#[derive(Debug)]
struct AppStateInner {
    config: ShopConfig,
    catalog: &'static Catalog,
    store: ShopStore,
}

impl AppState {
    /// Create application state over an explicit storage backend.
    #[must_use]
    pub fn new(config: ShopConfig, storage: Arc<dyn Storage>) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog: Catalog::builtin(),
                store: ShopStore::new(storage),
            }),
        }
    }

    /// Create application state over file storage in `config.data_dir`.
    #[must_use]
    pub fn with_file_storage(config: ShopConfig) -> Self {
        let storage = FileStorage::new(config.data_dir.clone());
        tracing::debug!(dir = %storage.dir().display(), "Using file storage");
        Self::new(config, Arc::new(storage))
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.inner.config
    }

    /// Get the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &'static Catalog {
        self.inner.catalog
    }

    /// Get this tab's store handle.
    #[must_use]
    pub fn store(&self) -> &ShopStore {
        &self.inner.store
    }

    /// Display currency.
    #[must_use]
    pub fn currency(&self) -> CurrencyCode {
        self.inner.config.currency
    }

    // =========================================================================
    // Page views
    // =========================================================================

    /// Mount the navigation badge.
    #[must_use]
    pub fn nav_badge(&self) -> NavBadge {
        NavBadge::mount(self.store())
    }

    /// Mount the cart page.
    #[must_use]
    pub fn cart_page(&self) -> CartPage {
        CartPage::mount(
            self.store(),
            self.inner.config.currency,
            self.inner.config.shipping_fee,
        )
    }

    /// Mount the profile page.
    #[must_use]
    pub fn profile_page(&self) -> ProfilePage {
        ProfilePage::mount(self.store())
    }

    /// Mount a product card or detail view for a catalog product.
    #[must_use]
    pub fn product_view(&self, product_id: &shopfront_core::ProductId) -> Option<ProductView> {
        self.catalog()
            .get(product_id)
            .map(|product| ProductView::mount(self.store(), product.clone()))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;
    use shopfront_core::ProductId;

    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_views_share_the_store() {
        let config = ShopConfig {
            shipping_fee: Decimal::from(75),
            ..ShopConfig::default()
        };
        let state = AppState::new(config, Arc::new(MemoryStorage::new()));
        let mut badge = state.nav_badge();

        let mut view = state.product_view(&ProductId::new("product-1")).unwrap();
        view.add_to_cart();

        assert!(badge.refresh());
        assert_eq!(badge.counts().cart, 1);
        assert_eq!(state.cart_page().summary().shipping.amount, Decimal::from(75));
        assert!(state.product_view(&ProductId::new("nope")).is_none());
    }

    #[test]
    fn test_file_storage_persists_across_states() {
        let dir = tempfile::tempdir().unwrap();
        let config = ShopConfig {
            data_dir: dir.path().to_path_buf(),
            ..ShopConfig::default()
        };

        let first = AppState::with_file_storage(config.clone());
        first.product_view(&ProductId::new("product-2")).unwrap().like();
        drop(first);

        let second = AppState::with_file_storage(config);
        assert_eq!(second.profile_page().wishlist().len(), 1);
    }
}
