//! Shopfront Core - Shared types library.
//!
//! This crate provides common types used across all Shopfront components:
//! - `storefront` - Catalog, cart/wishlist store, and page view state
//! - `cli` - Command-line shop front end over file-backed storage
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no storage access, no
//! notification channels. This keeps it lightweight and allows it to be used
//! anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype IDs, prices, products, orders, and statuses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
