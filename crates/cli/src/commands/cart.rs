//! Cart commands.

use shopfront_core::ProductId;
use shopfront_storefront::state::AppState;
use shopfront_storefront::store::{ListKey, Outcome};
use shopfront_storefront::{AppError, Result};

use super::{output, product_view, saved};

/// Parse an `id=quantity` override.
///
/// # Errors
///
/// Returns a message if the value is not `id=quantity` with a positive
/// integer quantity.
pub fn parse_quantity(raw: &str) -> std::result::Result<(String, i32), String> {
    let (id, quantity) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected id=quantity, got {raw:?}"))?;
    let quantity: i32 = quantity
        .trim()
        .parse()
        .map_err(|e| format!("invalid quantity in {raw:?}: {e}"))?;
    if id.trim().is_empty() || quantity < 1 {
        return Err(format!("expected id=quantity with quantity >= 1, got {raw:?}"));
    }
    Ok((id.trim().to_string(), quantity))
}

/// Show the cart with optional quantity overrides.
///
/// Quantities are not saved; every run starts each line at 1.
pub fn show(state: &AppState, quantities: &[(String, i32)]) {
    let mut page = state.cart_page();
    if page.is_empty() {
        output::line("Your cart is empty");
        return;
    }

    for (id, quantity) in quantities {
        let id = ProductId::new(id.as_str());
        if page.change_quantity(&id, quantity - 1).is_none() {
            tracing::warn!(product_id = %id, "Quantity given for product not in cart");
        }
    }

    output::line("Shopping Cart");
    for line in page.lines() {
        output::line(&format!(
            "{:<12} {:<24} {:>10} x {:<3} {:>10}",
            line.product.id,
            line.product.name,
            line.unit_price.display(),
            line.quantity,
            line.line_total.display()
        ));
    }

    let summary = page.summary();
    output::blank();
    output::line(&format!("Subtotal  {:>12}", summary.subtotal.display()));
    output::line(&format!("Shipping  {:>12}", summary.shipping.display()));
    output::line(&format!("Total     {:>12}", summary.total.display()));
}

/// Add a product to the cart.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product is not in the catalog, or
/// `AppError::NotSaved` if the cart could not be written.
pub fn add(state: &AppState, id: &str) -> Result<()> {
    let mut badge = state.nav_badge();
    let mut view = product_view(state, id)?;

    if saved(view.add_to_cart(), ListKey::Cart)? == Outcome::Added {
        output::line(&format!("Added {} to cart", view.product().name));
    } else {
        output::line(&format!("{} is already in your cart", view.product().name));
    }

    badge.refresh();
    output::line(&output::badge(badge.counts()));
    Ok(())
}

/// Remove a product from the cart. Removing an absent product is a no-op.
///
/// # Errors
///
/// Returns `AppError::NotSaved` if the cart could not be written.
pub fn remove(state: &AppState, id: &str) -> Result<()> {
    let mut page = state.cart_page();
    let id = ProductId::new(id);

    if saved(page.remove_item(&id), ListKey::Cart)? == Outcome::Removed {
        output::line(&format!("Removed {id} from cart"));
    } else {
        output::line(&format!("{id} was not in your cart"));
    }
    Ok(())
}

/// Empty the cart.
///
/// # Errors
///
/// Returns `AppError::NotSaved` if the cart could not be cleared.
pub fn clear(state: &AppState) -> Result<()> {
    saved(state.store().clear(ListKey::Cart), ListKey::Cart)?;
    output::line("Cart cleared");
    Ok(())
}

/// Proceed to checkout.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an empty cart, otherwise
/// `AppError::Unavailable`.
pub fn checkout(state: &AppState) -> Result<()> {
    let page = state.cart_page();
    if page.is_empty() {
        return Err(AppError::BadRequest("Your cart is empty".to_string()));
    }
    page.checkout()
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use shopfront_storefront::config::ShopConfig;
    use shopfront_storefront::storage::MemoryStorage;

    use super::*;

    fn state() -> AppState {
        AppState::new(ShopConfig::default(), Arc::new(MemoryStorage::new()))
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(
            parse_quantity("product-1=3"),
            Ok(("product-1".to_string(), 3))
        );
        assert_eq!(
            parse_quantity(" product-2 = 1 "),
            Ok(("product-2".to_string(), 1))
        );
        assert!(parse_quantity("product-1").is_err());
        assert!(parse_quantity("product-1=0").is_err());
        assert!(parse_quantity("product-1=two").is_err());
        assert!(parse_quantity("=2").is_err());
    }

    #[test]
    fn test_add_and_remove() {
        let state = state();
        add(&state, "product-1").unwrap();
        add(&state, "product-1").unwrap();
        assert_eq!(state.cart_page().items().len(), 1);

        remove(&state, "product-1").unwrap();
        remove(&state, "product-1").unwrap();
        assert!(state.cart_page().is_empty());
    }

    #[test]
    fn test_clear() {
        let state = state();
        add(&state, "product-1").unwrap();
        add(&state, "product-3").unwrap();

        clear(&state).unwrap();
        assert!(state.cart_page().is_empty());
    }

    #[test]
    fn test_unwritable_storage_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("data");
        std::fs::write(&blocker, "not a directory").unwrap();
        let config = ShopConfig {
            data_dir: blocker,
            ..ShopConfig::default()
        };
        let state = AppState::with_file_storage(config);

        assert!(matches!(add(&state, "product-1"), Err(AppError::NotSaved(_))));
    }

    #[test]
    fn test_add_unknown_product() {
        let state = state();
        assert!(matches!(add(&state, "product-9"), Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_checkout() {
        let state = state();
        assert!(matches!(checkout(&state), Err(AppError::BadRequest(_))));

        add(&state, "product-2").unwrap();
        assert!(matches!(checkout(&state), Err(AppError::Unavailable(_))));
    }
}
