//! Order history entry.
//!
//! Orders are only ever read; nothing in Shopfront creates them.

use chrono::{DateTime, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::id::OrderId;
use super::product::Product;
use super::status::OrderStatus;

/// A past order as stored under the `orders` key.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    pub id: OrderId,
    /// Placement date as written by whatever created the order, usually an
    /// RFC 3339 timestamp.
    pub date: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub status: OrderStatus,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub items: Vec<Product>,
}

impl Order {
    /// The calendar day the order was placed, if `date` is parseable.
    ///
    /// Accepts RFC 3339 timestamps and bare `YYYY-MM-DD` dates.
    #[must_use]
    pub fn placed_on(&self) -> Option<NaiveDate> {
        DateTime::parse_from_rfc3339(&self.date)
            .map(|dt| dt.date_naive())
            .ok()
            .or_else(|| NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok())
    }
}
