//! Wishlist and profile commands.

use shopfront_core::ProductId;
use shopfront_storefront::Result;
use shopfront_storefront::state::AppState;
use shopfront_storefront::store::{ListKey, Outcome};
use shopfront_storefront::views::ProfilePage;

use super::{output, product_view, saved};

/// Show wishlist entries.
pub fn wishlist(state: &AppState) {
    print_wishlist(state, &state.profile_page());
}

/// Toggle a product's wishlist membership.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product is not in the catalog, or
/// `AppError::NotSaved` if the wishlist could not be written.
pub fn toggle(state: &AppState, id: &str) -> Result<()> {
    let mut view = product_view(state, id)?;
    if saved(view.like(), ListKey::Wishlist)? == Outcome::Added {
        output::line(&format!("Added {} to wishlist", view.product().name));
    } else {
        output::line(&format!("Removed {} from wishlist", view.product().name));
    }
    Ok(())
}

/// Remove a product from the wishlist. Removing an absent product is a no-op.
///
/// # Errors
///
/// Returns `AppError::NotSaved` if the wishlist could not be written.
pub fn remove(state: &AppState, id: &str) -> Result<()> {
    let mut page = state.profile_page();
    let id = ProductId::new(id);

    if saved(page.remove_from_wishlist(&id), ListKey::Wishlist)? == Outcome::Removed {
        output::line(&format!("Removed {id} from wishlist"));
    } else {
        output::line(&format!("{id} was not in your wishlist"));
    }
    Ok(())
}

/// Empty the wishlist.
///
/// # Errors
///
/// Returns `AppError::NotSaved` if the wishlist could not be cleared.
pub fn clear(state: &AppState) -> Result<()> {
    saved(state.store().clear(ListKey::Wishlist), ListKey::Wishlist)?;
    output::line("Wishlist cleared");
    Ok(())
}

/// Show the wishlist and order history.
pub fn show(state: &AppState) {
    let page = state.profile_page();

    output::line("My Profile");
    output::blank();
    output::line("Wishlist");
    print_wishlist(state, &page);

    output::blank();
    output::line("Order History");
    if page.orders().is_empty() {
        output::line("You haven't placed any orders yet");
        return;
    }
    for order in page.orders() {
        let date = order
            .placed_on()
            .map_or_else(|| order.date.clone(), |d| d.to_string());
        let total = shopfront_core::Price::new(order.total, state.currency());
        output::line(&format!(
            "Order #{}  Date: {date}  Total: {}  Status: {}",
            order.id,
            total.display(),
            order.status
        ));
    }
}

fn print_wishlist(state: &AppState, page: &ProfilePage) {
    if page.wishlist().is_empty() {
        output::line("Your wishlist is empty");
        return;
    }
    for product in page.wishlist() {
        output::line(&output::product_row(product, state.currency()));
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopfront_storefront::AppError;
    use shopfront_storefront::config::ShopConfig;
    use shopfront_storefront::storage::MemoryStorage;

    use super::*;

    #[test]
    fn test_toggle_and_remove() {
        let state = AppState::new(ShopConfig::default(), Arc::new(MemoryStorage::new()));

        toggle(&state, "product-3").unwrap();
        assert_eq!(state.profile_page().wishlist().len(), 1);

        remove(&state, "product-3").unwrap();
        assert!(state.profile_page().wishlist().is_empty());

        toggle(&state, "product-1").unwrap();
        toggle(&state, "product-2").unwrap();
        clear(&state).unwrap();
        assert!(state.profile_page().wishlist().is_empty());

        assert!(matches!(
            toggle(&state, "missing"),
            Err(AppError::NotFound(_))
        ));
    }
}
