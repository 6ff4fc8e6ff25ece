//! Append-only order history.

use std::sync::RwLock;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::Utc;
use dhanvantari_core::{CartItem, Order, OrderNumber, Price, ShippingInfo};
use rand::Rng;
use tracing::info;

use super::{read, write};

/// Characters used for the random order number suffix.
///
/// Ambiguous glyphs (0/O, 1/I) are left out so numbers can be read aloud.
const SUFFIX_CHARSET: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ23456789";
const SUFFIX_LENGTH: usize = 4;

/// Placed orders for the lifetime of the process.
///
/// Orders are appended most-recent-last and never updated or deleted.
#[derive(Debug)]
pub struct OrderStore {
    prefix: String,
    sequence: AtomicU64,
    orders: RwLock<Vec<Order>>,
}

impl OrderStore {
    /// Create an empty store whose order numbers start with `prefix`.
    #[must_use]
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            sequence: AtomicU64::new(0),
            orders: RwLock::new(Vec::new()),
        }
    }

    /// Record a new order and return it.
    pub fn add_order(&self, items: Vec<CartItem>, total: Price) -> Order {
        self.append(items, total, None)
    }

    /// Record a new order together with the shipping details it ships to.
    pub fn add_order_with_shipping(
        &self,
        items: Vec<CartItem>,
        total: Price,
        shipping: ShippingInfo,
    ) -> Order {
        self.append(items, total, Some(shipping))
    }

    fn append(&self, items: Vec<CartItem>, total: Price, shipping: Option<ShippingInfo>) -> Order {
        let order = Order::new(self.next_order_number(), items, total, shipping, Utc::now());

        write(&self.orders).push(order.clone());

        info!(
            order_number = %order.order_number(),
            total = %order.total(),
            items = order.items().len(),
            "order placed"
        );
        order
    }

    /// Snapshot of the order history, oldest first.
    #[must_use]
    pub fn orders(&self) -> Vec<Order> {
        read(&self.orders).clone()
    }

    /// Look up an order by number.
    #[must_use]
    pub fn get(&self, order_number: &OrderNumber) -> Option<Order> {
        read(&self.orders)
            .iter()
            .find(|o| o.order_number() == order_number)
            .cloned()
    }

    /// The most recently placed order.
    #[must_use]
    pub fn latest(&self) -> Option<Order> {
        read(&self.orders).last().cloned()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        read(&self.orders).len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Generate the next order number.
    ///
    /// The sequence makes numbers unique within the process; the suffix keeps
    /// them from being guessable from one another.
    fn next_order_number(&self) -> OrderNumber {
        let sequence = self.sequence.fetch_add(1, Ordering::Relaxed) + 1;
        OrderNumber::compose(&self.prefix, sequence, &random_suffix())
    }
}

fn random_suffix() -> String {
    let mut rng = rand::rng();
    (0..SUFFIX_LENGTH)
        .filter_map(|_| {
            let idx = rng.random_range(0..SUFFIX_CHARSET.len());
            SUFFIX_CHARSET.get(idx).copied().map(char::from)
        })
        .collect()
}
