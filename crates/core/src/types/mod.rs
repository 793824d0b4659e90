//! Core types for Shopfront.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod order;
pub mod price;
pub mod product;
pub mod status;

pub use id::*;
pub use order::Order;
pub use price::{CurrencyCode, Price, UnknownCurrency};
pub use product::{MAX_UNIT_PRICE, Product};
pub use status::*;
