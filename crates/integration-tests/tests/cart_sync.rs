//! Components in one tab staying consistent through the shared store.

use std::time::Duration;

use shopfront_core::ProductId;
use shopfront_integration_tests::{ids, memory_state, product};
use shopfront_storefront::store::{ListKey, Outcome};
use shopfront_storefront::views::BadgeCounts;

#[test]
fn test_product_view_add_updates_badge_and_cart_page() {
    let state = memory_state();
    let mut badge = state.nav_badge();
    let mut view = state.product_view(&ProductId::new("product-1")).unwrap();

    assert_eq!(view.add_to_cart(), Outcome::Added);
    assert!(view.is_in_cart());

    assert!(badge.refresh());
    assert_eq!(badge.counts(), BadgeCounts { cart: 1, wishlist: 0 });

    let page = state.cart_page();
    assert_eq!(ids(page.items()), ["product-1"]);
    assert_eq!(page.summary().total.display(), "₹1049.00");
}

#[test]
fn test_fresh_badge_reflects_earlier_add() {
    let state = memory_state();
    state.store().add_to_cart(product("product-2"));
    state.store().add_to_cart(product("product-3"));

    let badge = state.nav_badge();
    assert_eq!(badge.counts().cart, 2);
}

#[test]
fn test_double_add_from_two_views_keeps_one_entry() {
    let state = memory_state();
    let mut card = state.product_view(&ProductId::new("product-4")).unwrap();
    let mut detail = state.product_view(&ProductId::new("product-4")).unwrap();

    assert_eq!(card.add_to_cart(), Outcome::Added);
    // The detail view was mounted before the add and still shows it absent.
    assert!(!detail.is_in_cart());
    assert_eq!(detail.add_to_cart(), Outcome::Unchanged);
    assert!(detail.is_in_cart());

    assert_eq!(state.store().count(ListKey::Cart), 1);
}

#[test]
fn test_concurrent_adds_in_one_tab_do_not_duplicate() {
    let state = memory_state();
    let store = state.store();

    std::thread::scope(|s| {
        for _ in 0..8 {
            s.spawn(|| store.add_to_cart(product("product-1")));
        }
    });

    assert_eq!(store.count(ListKey::Cart), 1);
}

#[test]
fn test_cart_page_removal_reaches_product_view_and_badge() {
    let state = memory_state();
    state.store().add_to_cart(product("product-1"));
    state.store().add_to_cart(product("product-2"));

    let mut badge = state.nav_badge();
    let mut page = state.cart_page();
    page.increment(&ProductId::new("product-2"));
    page.remove_item(&ProductId::new("product-1"));

    assert!(badge.refresh());
    assert_eq!(badge.counts().cart, 1);
    assert_eq!(page.summary().subtotal.display(), "₹998.00");

    let view = state.product_view(&ProductId::new("product-1")).unwrap();
    assert!(!view.is_in_cart());
}

#[test]
fn test_wishlist_toggle_reaches_badge_and_profile() {
    let state = memory_state();
    let mut badge = state.nav_badge();
    let mut profile = state.profile_page();
    let mut view = state.product_view(&ProductId::new("product-3")).unwrap();

    assert_eq!(view.like(), Outcome::Added);
    assert!(badge.refresh());
    assert_eq!(badge.counts().wishlist, 1);
    assert!(profile.refresh());
    assert_eq!(ids(profile.wishlist()), ["product-3"]);

    profile.remove_from_wishlist(&ProductId::new("product-3"));
    view.sync();
    assert!(!view.is_liked());
    assert!(badge.refresh());
    assert_eq!(badge.counts().wishlist, 0);
}

#[test]
fn test_cart_and_wishlist_are_independent() {
    let state = memory_state();
    let mut view = state.product_view(&ProductId::new("product-2")).unwrap();

    view.add_to_cart();
    view.like();
    view.like();

    assert!(state.store().in_cart(&ProductId::new("product-2")));
    assert!(!state.store().in_wishlist(&ProductId::new("product-2")));
}

#[tokio::test]
async fn test_badge_wakes_on_same_tab_signal() {
    let state = memory_state();
    let mut badge = state.nav_badge();
    let store = state.store().clone();

    let waiter = tokio::spawn(async move { badge.next_change().await });
    tokio::task::yield_now().await;
    store.add_to_cart(product("product-1"));

    let counts = tokio::time::timeout(Duration::from_secs(5), waiter)
        .await
        .unwrap()
        .unwrap()
        .unwrap();
    assert_eq!(counts.cart, 1);
}
