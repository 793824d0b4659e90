//! Page and component view state.
//!
//! Each view is the state a UI component keeps while mounted. None of them
//! own cart or wishlist data: they hold a [`ShopStore`](crate::store::ShopStore)
//! handle, read from it on mount, and re-read when notified. Dropping a view
//! unmounts it and releases its subscription.

pub mod badge;
pub mod cart;
pub mod product;
pub mod profile;

pub use badge::{BadgeCounts, NavBadge};
pub use cart::{CartLine, CartPage, CartSummary, summarize};
pub use product::ProductView;
pub use profile::ProfilePage;
