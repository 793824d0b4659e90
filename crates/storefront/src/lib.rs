//! Shopfront Storefront library.
//!
//! Catalog browsing, search, and the shared cart/wishlist store with the
//! page views that read it. There is no server: state lives in a key-value
//! [`storage`] backend and views stay consistent through [`store`] signals.
//!
//! # Modules
//!
//! - [`catalog`] - Compiled-in product table, category filter, pagination
//! - [`search`] - Substring search and name suggestions
//! - [`storage`] - Key-value backends (memory, files) with change events
//! - [`store`] - Cart/wishlist accessor, mutators, and subscriptions
//! - [`views`] - Badge, product, cart, and profile view state
//! - [`state`] - Per-tab application state

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod search;
pub mod state;
pub mod storage;
pub mod store;
pub mod views;

pub use error::{AppError, Result};
