//! Cart line items.

use serde::{Deserialize, Serialize};

use super::id::ProductId;
use super::price::{Price, PriceError};

/// A product in the cart with its quantity.
///
/// Ephemeral: held by the cart store until checkout snapshots it into an
/// [`Order`](super::Order).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    /// Catalog product identifier.
    pub product_id: ProductId,
    /// Display name at the time the item was added.
    pub name: String,
    /// Price of a single unit.
    pub unit_price: Price,
    /// Number of units (always at least 1 while in a cart).
    pub quantity: u32,
}

impl CartItem {
    /// Create a new cart item.
    #[must_use]
    pub fn new(
        product_id: impl Into<ProductId>,
        name: impl Into<String>,
        unit_price: Price,
        quantity: u32,
    ) -> Self {
        Self {
            product_id: product_id.into(),
            name: name.into(),
            unit_price,
            quantity,
        }
    }

    /// Unit price multiplied by quantity.
    ///
    /// # Errors
    ///
    /// Returns [`PriceError::Overflow`] if the product does not fit.
    pub fn line_total(&self) -> Result<Price, PriceError> {
        self.unit_price.times(self.quantity)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::CurrencyCode;

    #[test]
    fn test_line_total() {
        let item = CartItem::new(
            "tulsi-kit",
            "Tulsi Kit",
            Price::from_minor_units(34_900, CurrencyCode::INR),
            2,
        );
        assert_eq!(
            item.line_total().unwrap(),
            Price::from_minor_units(69_800, CurrencyCode::INR)
        );
    }
}
