//! Tabs sharing one storage backend.

use std::time::Duration;

use shopfront_core::ProductId;
use shopfront_integration_tests::{ids, memory_store, product};
use shopfront_storefront::store::{ListKey, Outcome, Refresh};
use shopfront_storefront::views::NavBadge;

#[test]
fn test_other_tab_write_reaches_badge() {
    let (_, tab_a) = memory_store();
    let tab_b = tab_a.open_tab();
    let mut badge = NavBadge::mount(&tab_b);

    tab_a.add_to_cart(product("product-1"));
    tab_a.toggle_wishlist(product("product-2"));

    assert!(badge.refresh());
    assert_eq!(badge.counts().cart, 1);
    assert_eq!(badge.counts().wishlist, 1);
}

#[test]
fn test_tab_sees_only_storage_event_for_other_tab_write() {
    let (_, tab_a) = memory_store();
    let tab_b = tab_a.open_tab();
    let mut sub_a = tab_a.subscribe();
    let mut sub_b = tab_b.subscribe();

    tab_b.add_to_cart(product("product-3"));

    // Tab A gets the storage event, tab B gets only its own signal.
    assert_eq!(sub_a.try_changed(), Some(Refresh::List(ListKey::Cart)));
    assert_eq!(sub_a.try_changed(), None);
    assert_eq!(sub_b.try_changed(), Some(Refresh::List(ListKey::Cart)));
    assert_eq!(sub_b.try_changed(), None);
}

#[test]
fn test_dropped_subscription_does_not_block_writes() {
    let (_, tab_a) = memory_store();
    let tab_b = tab_a.open_tab();
    drop(NavBadge::mount(&tab_b));

    for id in ["product-1", "product-2", "product-3", "product-4"] {
        assert_eq!(tab_a.add_to_cart(product(id)), Outcome::Added);
    }
    assert_eq!(tab_b.count(ListKey::Cart), 4);
}

/// Tabs are not coordinated: a write computed from a stale snapshot
/// replaces whatever another tab stored in between.
#[test]
fn test_stale_snapshot_overwrites_other_tab() {
    let (_, tab_a) = memory_store();
    let tab_b = tab_a.open_tab();

    let mut snapshot = tab_a.read_list(ListKey::Cart);
    tab_b.add_to_cart(product("product-2"));

    snapshot.push(product("product-1").clone());
    tab_a.write_list(ListKey::Cart, &snapshot).unwrap();

    assert_eq!(ids(&tab_b.read_list(ListKey::Cart)), ["product-1"]);
}

/// A stale snapshot can also reintroduce an entry another tab removed,
/// and two tabs appending to the same stale snapshot can leave a duplicate
/// id behind. Mutators never add a second copy once one is stored.
#[test]
fn test_duplicate_from_race_is_not_compounded() {
    let (_, tab_a) = memory_store();
    let tab_b = tab_a.open_tab();
    tab_a.add_to_cart(product("product-1"));

    let mut snapshot = tab_b.read_list(ListKey::Cart);
    snapshot.push(product("product-1").clone());
    tab_b.write_list(ListKey::Cart, &snapshot).unwrap();
    assert_eq!(tab_a.count(ListKey::Cart), 2);

    assert_eq!(tab_a.add_to_cart(product("product-1")), Outcome::Unchanged);
    assert_eq!(tab_a.count(ListKey::Cart), 2);

    assert_eq!(
        tab_a.remove_from_cart(&ProductId::new("product-1")),
        Outcome::Removed
    );
    assert_eq!(tab_a.count(ListKey::Cart), 0);
}

#[tokio::test]
async fn test_badge_wakes_on_other_tab_write() {
    let (_, tab_a) = memory_store();
    let tab_b = tab_a.open_tab();
    let mut badge = NavBadge::mount(&tab_b);

    let waiter = tokio::spawn(async move { badge.next_change().await });
    tokio::task::yield_now().await;
    tab_a.toggle_wishlist(product("product-4"));

    let counts = tokio::time::timeout(Duration::from_secs(5), waiter)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(counts.wishlist, 1);
    assert_eq!(counts.cart, 0);
}
