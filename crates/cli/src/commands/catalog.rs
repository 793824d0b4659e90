//! Catalog browsing commands.

use shopfront_storefront::catalog::CATEGORIES;
use shopfront_storefront::search;
use shopfront_storefront::state::AppState;
use shopfront_storefront::{AppError, Result};

use super::{output, product_view};

/// List one page of the catalog.
///
/// # Errors
///
/// Returns `AppError::BadRequest` for an unknown category or page 0.
pub fn list(state: &AppState, category: &str, page: usize) -> Result<()> {
    let Some(category) = CATEGORIES
        .iter()
        .find(|c| c.eq_ignore_ascii_case(category))
    else {
        return Err(AppError::BadRequest(format!(
            "Unknown category {category:?}; choose one of {}",
            CATEGORIES.join(", ")
        )));
    };
    if page == 0 {
        return Err(AppError::BadRequest("Pages start at 1".to_string()));
    }

    let listing = state
        .catalog()
        .page(category, page, state.config().page_size);

    output::line(&format!(
        "{category}: {} products (page {page} of {})",
        listing.total_items,
        listing.total_pages.max(1)
    ));
    if listing.items.is_empty() {
        output::line("No products on this page");
    }
    for product in listing.items {
        output::line(&output::product_row(product, state.currency()));
    }
    Ok(())
}

/// Search the catalog.
pub fn search(state: &AppState, query: &str) {
    let results = search::search(state.catalog(), query);

    if results.show_suggestions() && !results.suggestions.is_empty() {
        let names: Vec<&str> = results
            .suggestions
            .iter()
            .map(|p| p.name.as_str())
            .collect();
        output::line(&format!("Suggestions: {}", names.join(", ")));
    }

    output::line(&format!("{} Results Found", results.results.len()));
    for product in results.results {
        output::line(&output::product_row(product, state.currency()));
    }
}

/// Show one product's details.
///
/// # Errors
///
/// Returns `AppError::NotFound` if the product is not in the catalog.
pub fn show(state: &AppState, id: &str) -> Result<()> {
    let view = product_view(state, id)?;
    let product = view.product();

    output::line(&product.name);
    output::line(&output::product_row(product, state.currency()));
    output::line(&product.description);
    output::line(&format!("Tags: {}", product.tags.join(", ")));
    output::line(&format!(
        "In cart: {}  Liked: {}",
        if view.is_in_cart() { "yes" } else { "no" },
        if view.is_liked() { "yes" } else { "no" }
    ));
    output::blank();
    for (index, image) in view.images().iter().enumerate() {
        output::line(&format!("  [{}] {image}", index + 1));
    }
    Ok(())
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
    fn test_list_accepts_any_case_category() {
        let state = state();
        assert!(list(&state, "home decor", 1).is_ok());
        assert!(list(&state, "All", 5).is_ok());
    }

    #[test]
    fn test_list_rejects_bad_input() {
        let state = state();
        assert!(matches!(list(&state, "Toys", 1), Err(AppError::BadRequest(_))));
        assert!(matches!(list(&state, "All", 0), Err(AppError::BadRequest(_))));
    }

    #[test]
    fn test_show_unknown_product() {
        let state = state();
        assert!(show(&state, "product-1").is_ok());
        assert!(matches!(show(&state, "nope"), Err(AppError::NotFound(_))));
    }
}
