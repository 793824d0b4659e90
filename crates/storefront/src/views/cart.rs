//! Cart page state and price aggregation.
//!
//! Quantities live only in the mounted page. They are not part of the
//! persisted cart entry, so every load starts each line at 1.

use std::collections::HashMap;

use rust_decimal::Decimal;
use shopfront_core::{CurrencyCode, Price, Product, ProductId};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::store::{ListKey, Outcome, ShopStore, Subscription};

/// Order summary totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CartSummary {
    pub subtotal: Price,
    /// Flat fee when the subtotal is positive, otherwise zero.
    pub shipping: Price,
    pub total: Price,
    /// Sum of line quantities.
    pub item_count: u32,
}

/// Aggregate `(unit price, quantity)` lines into a summary.
///
/// Amounts saturate at the largest representable decimal instead of
/// overflowing.
#[must_use]
pub fn summarize(
    lines: impl IntoIterator<Item = (Decimal, u32)>,
    shipping_fee: Decimal,
    currency: CurrencyCode,
) -> CartSummary {
    let (subtotal, item_count) = lines.into_iter().fold(
        (Decimal::ZERO, 0_u32),
        |(subtotal, count), (price, quantity)| {
            let line = price
                .checked_mul(Decimal::from(quantity))
                .unwrap_or(Decimal::MAX);
            (
                subtotal.checked_add(line).unwrap_or(Decimal::MAX),
                count.saturating_add(quantity),
            )
        },
    );

    let shipping = if subtotal > Decimal::ZERO {
        shipping_fee
    } else {
        Decimal::ZERO
    };

    CartSummary {
        subtotal: Price::new(subtotal, currency),
        shipping: Price::new(shipping, currency),
        total: Price::new(
            subtotal.checked_add(shipping).unwrap_or(Decimal::MAX),
            currency,
        ),
        item_count,
    }
}

/// One rendered cart line.
#[derive(Debug, Clone, PartialEq)]
pub struct CartLine<'a> {
    pub product: &'a Product,
    pub quantity: u32,
    pub unit_price: Price,
    pub line_total: Price,
}

/// Mounted cart page.
#[derive(Debug)]
pub struct CartPage {
    store: ShopStore,
    subscription: Subscription,
    currency: CurrencyCode,
    shipping_fee: Decimal,
    items: Vec<Product>,
    quantities: HashMap<ProductId, u32>,
}

impl CartPage {
    /// Mount the cart page and load the cart with every quantity at 1.
    #[must_use]
    pub fn mount(store: &ShopStore, currency: CurrencyCode, shipping_fee: Decimal) -> Self {
        let subscription = store.subscribe();
        let mut page = Self {
            store: store.clone(),
            subscription,
            currency,
            shipping_fee,
            items: Vec::new(),
            quantities: HashMap::new(),
        };
        page.sync();
        page
    }

    /// Returns true if the cart has no entries (the empty-cart state).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Cart entries in cart order.
    #[must_use]
    pub fn items(&self) -> &[Product] {
        &self.items
    }

    /// Quantity shown for `product_id`, if it is in the cart.
    #[must_use]
    pub fn quantity(&self, product_id: &ProductId) -> Option<u32> {
        self.items
            .iter()
            .any(|p| &p.id == product_id)
            .then(|| self.quantities.get(product_id).copied().unwrap_or(1))
    }

    /// Lines with quantities and line totals.
    #[must_use]
    pub fn lines(&self) -> Vec<CartLine<'_>> {
        self.items
            .iter()
            .map(|product| {
                let quantity = self.quantities.get(&product.id).copied().unwrap_or(1);
                let unit_price = product.unit_price(self.currency);
                CartLine {
                    product,
                    quantity,
                    unit_price,
                    line_total: unit_price.times(quantity),
                }
            })
            .collect()
    }

    /// Subtotal, shipping, and total for the current lines.
    #[must_use]
    pub fn summary(&self) -> CartSummary {
        summarize(
            self.lines()
                .into_iter()
                .map(|line| (line.unit_price.amount, line.quantity)),
            self.shipping_fee,
            self.currency,
        )
    }

    /// Change a line's quantity by `delta`, never going below 1.
    ///
    /// Returns the new quantity, or `None` if the product is not in the cart.
    pub fn change_quantity(&mut self, product_id: &ProductId, delta: i32) -> Option<u32> {
        let current = self.quantity(product_id)?;
        let next = (i64::from(current) + i64::from(delta)).max(1);
        let next = u32::try_from(next).unwrap_or(u32::MAX);
        self.quantities.insert(product_id.clone(), next);
        Some(next)
    }

    /// Increase a line's quantity by one.
    pub fn increment(&mut self, product_id: &ProductId) -> Option<u32> {
        self.change_quantity(product_id, 1)
    }

    /// Decrease a line's quantity by one, stopping at 1.
    pub fn decrement(&mut self, product_id: &ProductId) -> Option<u32> {
        self.change_quantity(product_id, -1)
    }

    /// Remove a line from the persisted cart and from this page.
    #[instrument(skip(self))]
    pub fn remove_item(&mut self, product_id: &ProductId) -> Outcome {
        let outcome = self.store.remove_from_cart(product_id);
        self.quantities.remove(product_id);
        self.sync();
        outcome
    }

    /// Apply pending notifications, re-reading the cart if it changed.
    ///
    /// Returns true if the cart was re-read.
    pub fn refresh(&mut self) -> bool {
        let mut cart_changed = false;
        while let Some(refresh) = self.subscription.try_changed() {
            cart_changed |= refresh.covers(ListKey::Cart);
        }
        if cart_changed {
            self.sync();
        }
        cart_changed
    }

    /// Proceed to checkout.
    ///
    /// # Errors
    ///
    /// Always returns `AppError::Unavailable`: there is no payment or order
    /// backend.
    pub fn checkout(&self) -> Result<()> {
        tracing::info!(
            items = self.items.len(),
            total = %self.summary().total,
            "Checkout requested"
        );
        Err(AppError::Unavailable(
            "Checkout is not available yet".to_string(),
        ))
    }

    /// Re-read the cart. Quantities survive for entries still present; new
    /// entries start at 1.
    fn sync(&mut self) {
        self.items = self.store.read_list(ListKey::Cart);
        let previous = std::mem::take(&mut self.quantities);
        self.quantities = self
            .items
            .iter()
            .map(|p| (p.id.clone(), previous.get(&p.id).copied().unwrap_or(1)))
            .collect();
    }
}
