//! Product card and product detail state.
//!
//! Both surfaces show the same state: whether the product is liked
//! (wishlisted) or already in the cart, plus the image carousel position for
//! the detail view.

use shopfront_core::Product;
use tracing::instrument;

use crate::store::{Outcome, ShopStore};

/// Mounted product card or detail view.
#[derive(Debug)]
pub struct ProductView {
    store: ShopStore,
    product: Product,
    is_liked: bool,
    is_in_cart: bool,
    image_index: usize,
}

impl ProductView {
    /// Mount a view for `product`, reading its wishlist and cart membership.
    #[must_use]
    pub fn mount(store: &ShopStore, product: Product) -> Self {
        let mut view = Self {
            store: store.clone(),
            product,
            is_liked: false,
            is_in_cart: false,
            image_index: 0,
        };
        view.sync();
        view
    }

    /// The product shown.
    #[must_use]
    pub const fn product(&self) -> &Product {
        &self.product
    }

    #[must_use]
    pub const fn is_liked(&self) -> bool {
        self.is_liked
    }

    #[must_use]
    pub const fn is_in_cart(&self) -> bool {
        self.is_in_cart
    }

    /// Re-read membership from storage.
    pub fn sync(&mut self) {
        self.is_liked = self.store.in_wishlist(&self.product.id);
        self.is_in_cart = self.store.in_cart(&self.product.id);
    }

    /// Toggle the product's wishlist membership.
    ///
    /// Returns `Added` or `Removed`; on `NotSaved` the liked state is
    /// unchanged.
    #[instrument(skip(self), fields(product_id = %self.product.id))]
    pub fn like(&mut self) -> Outcome {
        let outcome = self.store.toggle_wishlist(&self.product);
        match outcome {
            Outcome::Added => self.is_liked = true,
            Outcome::Removed => self.is_liked = false,
            Outcome::Unchanged | Outcome::NotSaved => {}
        }
        outcome
    }

    /// Add the product to the cart unless it is already there.
    #[instrument(skip(self), fields(product_id = %self.product.id))]
    pub fn add_to_cart(&mut self) -> Outcome {
        if self.is_in_cart {
            return Outcome::Unchanged;
        }
        let outcome = self.store.add_to_cart(&self.product);
        self.is_in_cart = self.store.in_cart(&self.product.id);
        outcome
    }

    // =========================================================================
    // Image carousel
    // =========================================================================

    /// Carousel images; falls back to the primary image when the product
    /// has no additional images.
    #[must_use]
    pub fn images(&self) -> Vec<&str> {
        if self.product.images.is_empty() {
            vec![self.product.image.as_str()]
        } else {
            self.product.images.iter().map(String::as_str).collect()
        }
    }

    /// Image currently shown.
    #[must_use]
    pub fn current_image(&self) -> &str {
        self.product
            .images
            .get(self.image_index)
            .map_or(self.product.image.as_str(), String::as_str)
    }

    #[must_use]
    pub const fn image_index(&self) -> usize {
        self.image_index
    }

    /// Show the image at `index`. Out-of-range indexes are ignored.
    ///
    /// Returns true if the selection changed.
    pub fn select_image(&mut self, index: usize) -> bool {
        if index >= self.images().len() || index == self.image_index {
            return false;
        }
        self.image_index = index;
        true
    }

    /// Advance to the next image, wrapping to the first.
    pub fn next_image(&mut self) {
        let count = self.images().len();
        self.image_index = (self.image_index + 1) % count;
    }

    /// Go back to the previous image, wrapping to the last.
    pub fn previous_image(&mut self) {
        let count = self.images().len();
        self.image_index = (self.image_index + count - 1) % count;
    }
}
