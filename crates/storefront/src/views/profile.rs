//! Profile page: wishlist and order history.

use shopfront_core::{Order, Product, ProductId};

use crate::store::{ListKey, Outcome, ShopStore, Subscription};

/// Mounted profile page.
#[derive(Debug)]
pub struct ProfilePage {
    store: ShopStore,
    subscription: Subscription,
    wishlist: Vec<Product>,
    orders: Vec<Order>,
}

impl ProfilePage {
    /// Mount the page and load the wishlist and orders.
    #[must_use]
    pub fn mount(store: &ShopStore) -> Self {
        let subscription = store.subscribe();
        Self {
            store: store.clone(),
            subscription,
            wishlist: store.read_list(ListKey::Wishlist),
            orders: store.orders(),
        }
    }

    #[must_use]
    pub fn wishlist(&self) -> &[Product] {
        &self.wishlist
    }

    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    /// Remove a wishlist entry and persist the remainder.
    pub fn remove_from_wishlist(&mut self, product_id: &ProductId) -> Outcome {
        let outcome = self.store.remove_from_wishlist(product_id);
        self.wishlist = self.store.read_list(ListKey::Wishlist);
        outcome
    }

    /// Apply pending notifications. Returns true if anything was re-read.
    pub fn refresh(&mut self) -> bool {
        let mut refreshed = false;
        while let Some(refresh) = self.subscription.try_changed() {
            if refresh.covers(ListKey::Wishlist) {
                self.wishlist = self.store.read_list(ListKey::Wishlist);
                refreshed = true;
            }
            if refresh.covers(ListKey::Orders) {
                self.orders = self.store.orders();
                refreshed = true;
            }
        }
        refreshed
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopfront_core::{OrderStatus, TabId};

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::{MemoryStorage, Storage};

    fn product(id: &str) -> &'static Product {
        Catalog::builtin().get(&ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_empty_profile() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        let page = ProfilePage::mount(&store);
        assert!(page.wishlist().is_empty());
        assert!(page.orders().is_empty());
    }

    #[test]
    fn test_loads_orders_and_wishlist() {
        let storage = MemoryStorage::new();
        storage
            .set(
                "orders",
                r#"[{"id": "A1", "date": "2024-05-01T08:00:00Z", "total": 1049, "status": "shipped"}]"#,
                TabId::new_v4(),
            )
            .unwrap();
        let store = ShopStore::new(Arc::new(storage));
        store.toggle_wishlist(product("product-1"));

        let page = ProfilePage::mount(&store);

        assert_eq!(page.wishlist().len(), 1);
        assert_eq!(page.orders().len(), 1);
        assert_eq!(page.orders()[0].status, OrderStatus::Shipped);
    }

    #[test]
    fn test_remove_from_wishlist() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        store.toggle_wishlist(product("product-1"));
        store.toggle_wishlist(product("product-2"));
        let mut page = ProfilePage::mount(&store);

        assert_eq!(
            page.remove_from_wishlist(&ProductId::new("product-1")),
            Outcome::Removed
        );
        assert_eq!(
            page.remove_from_wishlist(&ProductId::new("product-1")),
            Outcome::Unchanged
        );

        assert_eq!(page.wishlist().len(), 1);
        assert!(!store.in_wishlist(&ProductId::new("product-1")));
    }

    #[test]
    fn test_refresh_after_like_elsewhere() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        let mut page = ProfilePage::mount(&store);

        store.toggle_wishlist(product("product-3"));

        assert!(page.refresh());
        assert_eq!(page.wishlist().len(), 1);
    }
}
