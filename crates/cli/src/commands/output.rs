//! Terminal output helpers.

#![allow(clippy::print_stdout, clippy::print_stderr)]

use shopfront_core::{CurrencyCode, Product};
use shopfront_storefront::views::BadgeCounts;

/// Print a line to stdout.
pub fn line(text: &str) {
    println!("{text}");
}

/// Print a blank line.
pub fn blank() {
    println!();
}

/// Print an error message to stderr.
pub fn error(message: &str) {
    eprintln!("error: {message}");
}

/// One-line product summary.
#[must_use]
pub fn product_row(product: &Product, currency: CurrencyCode) -> String {
    format!(
        "{:<12} {:<24} {:>10}  {} ({:.1}★, {} reviews)",
        product.id,
        product.name,
        product.unit_price(currency).display(),
        product.category,
        product.rating,
        product.reviews
    )
}

/// Navigation badge line.
#[must_use]
pub fn badge(counts: BadgeCounts) -> String {
    format!("Cart: {}  Wishlist: {}", counts.cart, counts.wishlist)
}
