//! Placed orders.

use core::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::cart::CartItem;
use super::price::Price;
use super::shipping::ShippingInfo;

/// Human-readable order number, e.g. `DV-000042-7QXK`.
///
/// Made of a short store prefix, a zero-padded per-process sequence and a
/// random uppercase suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderNumber(String);

impl OrderNumber {
    /// Build an order number from its parts.
    ///
    /// ```
    /// use dhanvantari_core::OrderNumber;
    ///
    /// let number = OrderNumber::compose("DV", 42, "7QXK");
    /// assert_eq!(number.as_str(), "DV-000042-7QXK");
    /// ```
    #[must_use]
    pub fn compose(prefix: &str, sequence: u64, suffix: &str) -> Self {
        Self(format!("{prefix}-{sequence:06}-{suffix}"))
    }

    /// Wrap an existing order number string.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the order number as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An immutable record of a completed purchase.
///
/// Fields are private: once created an order is never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    order_number: OrderNumber,
    items: Vec<CartItem>,
    total: Price,
    shipping: Option<ShippingInfo>,
    created_at: DateTime<Utc>,
}

impl Order {
    /// Create a new order record.
    #[must_use]
    pub const fn new(
        order_number: OrderNumber,
        items: Vec<CartItem>,
        total: Price,
        shipping: Option<ShippingInfo>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            order_number,
            items,
            total,
            shipping,
            created_at,
        }
    }

    #[must_use]
    pub const fn order_number(&self) -> &OrderNumber {
        &self.order_number
    }

    /// Snapshot of the cart at checkout time.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub const fn total(&self) -> Price {
        self.total
    }

    /// Shipping details entered during checkout, if recorded.
    #[must_use]
    pub const fn shipping(&self) -> Option<&ShippingInfo> {
        self.shipping.as_ref()
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}
