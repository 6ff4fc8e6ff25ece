//! Shopping cart held until checkout commits it to an order.

use std::sync::RwLock;

use dhanvantari_core::{CartItem, CurrencyCode, Price, PriceError, ProductId};
use thiserror::Error;
use tracing::debug;

use super::{read, write};

/// Errors from cart operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The item is priced in a different currency than the cart.
    #[error("cart is priced in {expected}, item is priced in {found}")]
    CurrencyMismatch {
        expected: CurrencyCode,
        found: CurrencyCode,
    },
    /// Items must be added with a quantity of at least one.
    #[error("quantity must be at least 1")]
    ZeroQuantity,
    /// The product is not in the cart.
    #[error("product not in cart: {0}")]
    NotInCart(ProductId),
    /// Total computation failed.
    #[error(transparent)]
    Price(#[from] PriceError),
}

/// The shopping cart.
#[derive(Debug)]
pub struct CartStore {
    currency: CurrencyCode,
    items: RwLock<Vec<CartItem>>,
}

impl CartStore {
    /// Create an empty cart priced in `currency`.
    #[must_use]
    pub const fn new(currency: CurrencyCode) -> Self {
        Self {
            currency,
            items: RwLock::new(Vec::new()),
        }
    }

    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Add an item. Adding a product already in the cart increases its
    /// quantity instead of creating a second line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::ZeroQuantity`] for a zero quantity and
    /// [`CartError::CurrencyMismatch`] if the price currency differs.
    pub fn add(&self, item: CartItem) -> Result<(), CartError> {
        if item.quantity == 0 {
            return Err(CartError::ZeroQuantity);
        }
        if item.unit_price.currency_code != self.currency {
            return Err(CartError::CurrencyMismatch {
                expected: self.currency,
                found: item.unit_price.currency_code,
            });
        }

        let mut items = write(&self.items);
        if let Some(existing) = items.iter_mut().find(|i| i.product_id == item.product_id) {
            existing.quantity = existing.quantity.saturating_add(item.quantity);
            debug!(product_id = %item.product_id, quantity = existing.quantity, "cart quantity increased");
        } else {
            debug!(product_id = %item.product_id, quantity = item.quantity, "added to cart");
            items.push(item);
        }
        Ok(())
    }

    /// Set the quantity of a line. A quantity of zero removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::NotInCart`] if the product is not in the cart.
    pub fn set_quantity(&self, product_id: &ProductId, quantity: u32) -> Result<(), CartError> {
        if quantity == 0 {
            return if self.remove(product_id) {
                Ok(())
            } else {
                Err(CartError::NotInCart(product_id.clone()))
            };
        }
        let mut items = write(&self.items);
        let line = items
            .iter_mut()
            .find(|i| &i.product_id == product_id)
            .ok_or_else(|| CartError::NotInCart(product_id.clone()))?;
        line.quantity = quantity;
        Ok(())
    }

    /// Remove a line. Returns `false` if the product was not in the cart.
    pub fn remove(&self, product_id: &ProductId) -> bool {
        let mut items = write(&self.items);
        let before = items.len();
        items.retain(|i| &i.product_id != product_id);
        items.len() != before
    }

    /// Snapshot of the cart lines in the order they were added.
    #[must_use]
    pub fn items(&self) -> Vec<CartItem> {
        read(&self.items).clone()
    }

    /// Sum of all line totals.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Price`] on arithmetic overflow.
    pub fn total(&self) -> Result<Price, CartError> {
        self.snapshot().map(|(_, total)| total)
    }

    /// Lines and total taken under one lock, for handing to checkout.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::Price`] on arithmetic overflow.
    pub fn snapshot(&self) -> Result<(Vec<CartItem>, Price), CartError> {
        let items = read(&self.items).clone();
        let lines = items
            .iter()
            .map(CartItem::line_total)
            .collect::<Result<Vec<_>, _>>()?;
        let total = Price::sum(self.currency, lines)?;
        Ok((items, total))
    }

    /// Total number of units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        read(&self.items).iter().map(|i| i.quantity).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        read(&self.items).is_empty()
    }

    /// Empty the cart, e.g. after an order is placed.
    pub fn clear(&self) {
        write(&self.items).clear();
        debug!("cart cleared");
    }
}
