//! Navigation badge showing cart and wishlist counts.

use crate::store::{ListKey, Refresh, ShopStore, Subscription};

/// Counts displayed by the badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BadgeCounts {
    pub cart: usize,
    pub wishlist: usize,
}

/// Mounted navigation badge.
///
/// Never mutates the lists; it only re-reads them when a same-tab signal or
/// another tab's storage event says they changed.
#[derive(Debug)]
pub struct NavBadge {
    store: ShopStore,
    subscription: Subscription,
    counts: BadgeCounts,
}

impl NavBadge {
    /// Mount the badge: subscribe, then read the current counts.
    #[must_use]
    pub fn mount(store: &ShopStore) -> Self {
        let subscription = store.subscribe();
        let mut badge = Self {
            store: store.clone(),
            subscription,
            counts: BadgeCounts::default(),
        };
        badge.apply(Refresh::All);
        badge
    }

    /// Counts as of the last refresh.
    #[must_use]
    pub const fn counts(&self) -> BadgeCounts {
        self.counts
    }

    /// Apply every pending notification without waiting.
    ///
    /// Returns true if any count was re-read.
    pub fn refresh(&mut self) -> bool {
        let mut refreshed = false;
        while let Some(refresh) = self.subscription.try_changed() {
            self.apply(refresh);
            refreshed = true;
        }
        refreshed
    }

    /// Wait for the next change and return the updated counts.
    ///
    /// The badge holds its own store handle, which keeps both change
    /// channels open, so this waits until a change arrives. `None` is only
    /// passed through from [`Subscription::changed`] for a closed channel.
    pub async fn next_change(&mut self) -> Option<BadgeCounts> {
        let refresh = self.subscription.changed().await?;
        self.apply(refresh);
        Some(self.counts)
    }

    fn apply(&mut self, refresh: Refresh) {
        if refresh.covers(ListKey::Cart) {
            self.counts.cart = self.store.count(ListKey::Cart);
        }
        if refresh.covers(ListKey::Wishlist) {
            self.counts.wishlist = self.store.count(ListKey::Wishlist);
        }
        tracing::trace!(cart = self.counts.cart, wishlist = self.counts.wishlist, "Badge refreshed");
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopfront_core::ProductId;

    use super::*;
    use crate::catalog::Catalog;
    use crate::storage::MemoryStorage;

    fn product(id: &str) -> &'static shopfront_core::Product {
        Catalog::builtin().get(&ProductId::new(id)).unwrap()
    }

    #[test]
    fn test_mount_reads_current_counts() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        store.add_to_cart(product("product-1"));
        store.toggle_wishlist(product("product-2"));
        store.toggle_wishlist(product("product-3"));

        let badge = NavBadge::mount(&store);

        assert_eq!(badge.counts(), BadgeCounts { cart: 1, wishlist: 2 });
    }

    #[test]
    fn test_refresh_after_same_tab_mutation() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        let mut badge = NavBadge::mount(&store);
        assert!(!badge.refresh());

        store.add_to_cart(product("product-1"));
        store.add_to_cart(product("product-4"));
        store.toggle_wishlist(product("product-4"));

        assert!(badge.refresh());
        assert_eq!(badge.counts(), BadgeCounts { cart: 2, wishlist: 1 });
    }

    #[test]
    fn test_refresh_after_other_tab_mutation() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        let other = store.open_tab();
        let mut badge = NavBadge::mount(&store);

        other.add_to_cart(product("product-2"));

        assert!(badge.refresh());
        assert_eq!(badge.counts().cart, 1);
    }

    #[tokio::test]
    async fn test_next_change() {
        let store = ShopStore::new(Arc::new(MemoryStorage::new()));
        let mut badge = NavBadge::mount(&store);

        store.toggle_wishlist(product("product-1"));

        assert_eq!(
            badge.next_change().await,
            Some(BadgeCounts { cart: 0, wishlist: 1 })
        );
    }
}
