//! Integration tests for Dhanvantari Vatika.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p dhanvantari-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `checkout_flow` - Cart to confirmed order through the checkout session
//! - `saved_collections` - Wishlist and saved herbs/articles/remedies
//! - `catalog_filter` - Category and search filtering over the seeded catalog
//!
//! This crate holds the shared fixtures: a [`TestContext`] wired like the
//! real application and a scriptable [`FakePayments`] capability.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use dhanvantari_core::{CartItem, ShippingInfo};
use dhanvantari_storefront::checkout::{
    BillingDetails, PaymentCapability, PaymentError, PaymentInstrument, PaymentMethod,
};
use dhanvantari_storefront::config::StorefrontConfig;
use dhanvantari_storefront::state::AppState;
use uuid::Uuid;

/// How a [`FakePayments`] capability answers.
#[derive(Debug, Clone)]
pub enum FakeOutcome {
    Approve,
    Decline(String),
    Fail(String),
}

/// Payment capability with a fixed answer that counts its calls.
#[derive(Debug)]
pub struct FakePayments {
    outcome: FakeOutcome,
    calls: AtomicUsize,
}

impl FakePayments {
    #[must_use]
    pub const fn new(outcome: FakeOutcome) -> Self {
        Self {
            outcome,
            calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub const fn approving() -> Self {
        Self::new(FakeOutcome::Approve)
    }

    /// Number of times the capability was invoked.
    #[must_use]
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    /// The result this fake would return for `billing`.
    #[must_use]
    pub fn answer(&self, billing: &BillingDetails) -> Result<PaymentMethod, PaymentError> {
        match &self.outcome {
            FakeOutcome::Approve => Ok(PaymentMethod {
                id: format!("pm_fake_{}", Uuid::new_v4().simple()),
                billing: billing.clone(),
            }),
            FakeOutcome::Decline(reason) => Err(PaymentError::Declined(reason.clone())),
            FakeOutcome::Fail(reason) => Err(PaymentError::Provider(reason.clone())),
        }
    }
}

impl PaymentCapability for FakePayments {
    async fn create_payment_method(
        &self,
        billing: &BillingDetails,
        _instrument: &PaymentInstrument,
    ) -> Result<PaymentMethod, PaymentError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.answer(billing)
    }
}

/// Application state configured for tests: no delays, default prefix.
pub struct TestContext {
    pub state: AppState,
}

impl TestContext {
    #[must_use]
    pub fn new() -> Self {
        let mut config = StorefrontConfig::default();
        config.payment.simulated_delay = Duration::ZERO;
        config.search_delay = Duration::ZERO;
        Self {
            state: AppState::new(config),
        }
    }

    /// Put one unit of each product id into the cart.
    ///
    /// # Panics
    ///
    /// Panics if a product id is not in the seeded catalog.
    #[allow(clippy::unwrap_used)]
    pub fn fill_cart(&self, product_ids: &[&str]) {
        for id in product_ids {
            let product = self.state.catalog().product(id).unwrap();
            self.state
                .cart()
                .add(CartItem::new(
                    product.id.clone(),
                    product.name.clone(),
                    product.price,
                    1,
                ))
                .unwrap();
        }
    }
}

impl Default for TestContext {
    fn default() -> Self {
        Self::new()
    }
}

/// A shipping form that passes validation.
#[must_use]
pub fn valid_shipping() -> ShippingInfo {
    ShippingInfo {
        name: "Anjali Sharma".to_string(),
        email: "anjali.sharma@example.com".to_string(),
        phone: "+91 98765 43210".to_string(),
        address: "123 Park Street".to_string(),
        city: "Mumbai".to_string(),
        state: "Maharashtra".to_string(),
        zip_code: "400001".to_string(),
    }
}
