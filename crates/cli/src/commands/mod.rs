//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod output;
pub mod profile;

use shopfront_core::ProductId;
use shopfront_storefront::state::AppState;
use shopfront_storefront::store::{ListKey, Outcome};
use shopfront_storefront::views::ProductView;
use shopfront_storefront::{AppError, Result};

/// Mount a product view for a catalog id.
fn product_view(state: &AppState, id: &str) -> Result<ProductView> {
    state
        .product_view(&ProductId::new(id))
        .ok_or_else(|| AppError::NotFound(format!("Product {id}")))
}

/// Turn a failed write into an error naming the list.
fn saved(outcome: Outcome, key: ListKey) -> Result<Outcome> {
    if outcome.is_saved() {
        Ok(outcome)
    } else {
        Err(AppError::NotSaved(key.to_string()))
    }
}
