//! Multi-step checkout state machine.
//!
//! A [`CheckoutSession`] walks `Shipping -> Payment -> Confirmation`. It
//! snapshots the cart when opened, collects shipping details, hands billing
//! details and the card instrument to a [`PaymentCapability`], and records the
//! resulting order in the [`OrderStore`].
//!
//! The payment call is the only asynchronous step. UI event loops that cannot
//! hold `&mut CheckoutSession` across an await use the split
//! [`begin_payment`](CheckoutSession::begin_payment) /
//! [`complete_payment`](CheckoutSession::complete_payment) pair; results for a
//! session that was closed in the meantime come back as
//! [`PaymentOutcome::Stale`] and are dropped.

mod payment;

use core::fmt;

use dhanvantari_core::{
    CartItem, CheckoutStep, Order, OrderNumber, Price, ShippingError, ShippingField, ShippingInfo,
};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::error::add_breadcrumb;
use crate::stores::{CartError, CartStore, OrderStore};

pub use payment::{
    BillingDetails, CardDetails, DECLINED_CARD_SUFFIX, PROVIDER_ERROR_CARD_SUFFIX,
    PaymentCapability, PaymentError, PaymentInstrument, PaymentMethod, SimulatedPaymentProvider,
};

/// Errors from checkout actions.
///
/// None of these leave the session or any store partially updated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CheckoutError {
    /// Shipping details failed validation.
    #[error("shipping validation failed: {0}")]
    Validation(#[from] ShippingError),
    /// The card entry is not complete.
    #[error("card details are incomplete")]
    IncompleteInstrument,
    /// The provider declined the card.
    #[error("payment declined: {0}")]
    PaymentDeclined(String),
    /// The provider failed for a reason other than a decline.
    #[error("payment provider error: {0}")]
    Provider(String),
    /// A payment is already in flight.
    #[error("a payment is already being processed")]
    AlreadyProcessing,
    /// The action is not valid from the current step.
    #[error("cannot {action} from the {from} step")]
    InvalidTransition {
        from: CheckoutStep,
        action: &'static str,
    },
    /// Checkout was opened with nothing to buy.
    #[error("cart is empty")]
    EmptyCart,
    /// The session has not been opened, or was closed.
    #[error("checkout is not open")]
    NotOpen,
    /// The payment finished after the session was closed.
    #[error("checkout was closed before the payment completed")]
    SessionClosed,
    /// Reading the cart failed.
    #[error(transparent)]
    Cart(#[from] CartError),
}

impl CheckoutError {
    /// Title and message for the user-visible alert.
    ///
    /// Provider failures get a generic message; the underlying detail only
    /// goes to logs and Sentry.
    #[must_use]
    pub fn alert(&self) -> (&'static str, String) {
        match self {
            Self::Validation(err) => (err.title(), err.message().to_string()),
            Self::IncompleteInstrument => (
                "Invalid Card",
                "Please enter a valid card number, expiration date, and CVC.".to_string(),
            ),
            Self::PaymentDeclined(message) => ("Payment Error", message.clone()),
            Self::Provider(_) | Self::Cart(_) => (
                "Payment Error",
                "There was an error processing your payment. Please try again.".to_string(),
            ),
            Self::AlreadyProcessing => (
                "Processing",
                "Your payment is still being processed.".to_string(),
            ),
            Self::InvalidTransition { .. } | Self::NotOpen | Self::SessionClosed => (
                "Checkout",
                "This checkout is no longer active. Please start again.".to_string(),
            ),
            Self::EmptyCart => ("Empty Cart", "Add something to your cart first.".to_string()),
        }
    }
}

/// Everything needed to run one payment attempt outside the session borrow.
#[derive(Debug, Clone)]
pub struct PaymentTicket {
    generation: u64,
    billing: BillingDetails,
    instrument: PaymentInstrument,
}

impl PaymentTicket {
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn billing(&self) -> &BillingDetails {
        &self.billing
    }

    #[must_use]
    pub const fn instrument(&self) -> &PaymentInstrument {
        &self.instrument
    }
}

/// Result of applying a payment result to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaymentOutcome {
    /// The order was recorded and the session moved to Confirmation.
    Placed(Order),
    /// The session moved on before the result arrived; nothing was recorded.
    Stale,
}

type OrderPlacedCallback = Box<dyn FnMut(&Order) + Send>;

#[derive(Debug, Clone)]
struct CartSnapshot {
    items: Vec<CartItem>,
    total: Price,
}

/// State of one checkout modal.
#[derive(Default)]
pub struct CheckoutSession {
    step: CheckoutStep,
    shipping: ShippingInfo,
    card: Option<CardDetails>,
    processing: bool,
    order_number: Option<OrderNumber>,
    snapshot: Option<CartSnapshot>,
    generation: u64,
    on_order_placed: Option<OrderPlacedCallback>,
}

impl fmt::Debug for CheckoutSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CheckoutSession")
            .field("step", &self.step)
            .field("shipping", &self.shipping)
            .field("card", &self.card)
            .field("processing", &self.processing)
            .field("order_number", &self.order_number)
            .field("snapshot", &self.snapshot)
            .field("generation", &self.generation)
            .field("on_order_placed", &self.on_order_placed.is_some())
            .finish()
    }
}

impl CheckoutSession {
    /// A closed session. Call [`open`](Self::open) to start checking out.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a callback fired once per placed order, after the session
    /// has moved to Confirmation.
    pub fn set_on_order_placed(&mut self, callback: impl FnMut(&Order) + Send + 'static) {
        self.on_order_placed = Some(Box::new(callback));
    }

    /// Start a fresh session at Shipping for the given cart contents.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::EmptyCart`] if `items` is empty and
    /// [`CheckoutError::AlreadyProcessing`] while a payment is in flight.
    pub fn open(&mut self, items: Vec<CartItem>, total: Price) -> Result<(), CheckoutError> {
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        if items.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }
        self.reset();
        debug!(items = items.len(), total = %total, "checkout opened");
        add_breadcrumb("checkout", "Opened checkout", None);
        self.snapshot = Some(CartSnapshot { items, total });
        Ok(())
    }

    /// Open the session with a snapshot of `cart`.
    ///
    /// # Errors
    ///
    /// As [`open`](Self::open), plus [`CheckoutError::Cart`] if the cart
    /// total cannot be computed.
    pub fn open_with_cart(&mut self, cart: &CartStore) -> Result<(), CheckoutError> {
        let (items, total) = cart.snapshot()?;
        self.open(items, total)
    }

    /// Close the modal. Resets to Shipping with empty details.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::AlreadyProcessing`] while a payment is in
    /// flight; use [`cancel_in_flight`](Self::cancel_in_flight) to force it.
    pub fn close(&mut self) -> Result<(), CheckoutError> {
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        self.reset();
        debug!(generation = self.generation, "checkout closed");
        Ok(())
    }

    /// Abandon an in-flight payment and close the session.
    ///
    /// The pending result, when it arrives, is reported as
    /// [`PaymentOutcome::Stale`].
    pub fn cancel_in_flight(&mut self) {
        if self.processing {
            warn!(generation = self.generation, "abandoning in-flight payment");
            add_breadcrumb("checkout", "Cancelled in-flight payment", None);
        }
        self.reset();
    }

    fn reset(&mut self) {
        self.step = CheckoutStep::Shipping;
        self.shipping = ShippingInfo::default();
        self.card = None;
        self.processing = false;
        self.order_number = None;
        self.snapshot = None;
        self.generation = self.generation.wrapping_add(1);
    }

    // =========================================================================
    // Shipping
    // =========================================================================

    /// Update one shipping field.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] outside the Shipping step.
    pub fn set_field(
        &mut self,
        field: ShippingField,
        value: impl Into<String>,
    ) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Shipping, "edit shipping details")?;
        self.shipping.set(field, value);
        Ok(())
    }

    /// Replace all shipping fields at once.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] outside the Shipping step.
    pub fn set_shipping(&mut self, shipping: ShippingInfo) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Shipping, "edit shipping details")?;
        self.shipping = shipping;
        Ok(())
    }

    /// Validate shipping details and move to Payment.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::Validation`] if a field is missing or the
    /// email is malformed; the session stays at Shipping.
    pub fn continue_to_payment(&mut self) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Shipping, "continue to payment")?;
        if let Err(err) = self.shipping.validate() {
            warn!(error = %err, "shipping validation failed");
            return Err(err.into());
        }
        self.step = CheckoutStep::Payment;
        debug!("checkout moved to payment");
        add_breadcrumb("checkout", "Continued to payment", None);
        Ok(())
    }

    /// Go back from Payment to Shipping, keeping the entered details.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::AlreadyProcessing`] while a payment is in
    /// flight and [`CheckoutError::InvalidTransition`] outside Payment.
    pub fn back_to_shipping(&mut self) -> Result<(), CheckoutError> {
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        self.require_step(CheckoutStep::Payment, "go back to shipping")?;
        self.step = CheckoutStep::Shipping;
        debug!("checkout moved back to shipping");
        Ok(())
    }

    // =========================================================================
    // Payment
    // =========================================================================

    /// Record what the card entry widget currently reports.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::InvalidTransition`] outside the Payment step.
    pub fn set_card_details(&mut self, card: CardDetails) -> Result<(), CheckoutError> {
        self.require_step(CheckoutStep::Payment, "enter card details")?;
        self.card = Some(card);
        Ok(())
    }

    /// Start a payment attempt and mark the session as processing.
    ///
    /// # Errors
    ///
    /// - [`CheckoutError::AlreadyProcessing`] if an attempt is in flight
    /// - [`CheckoutError::InvalidTransition`] outside the Payment step
    /// - [`CheckoutError::IncompleteInstrument`] if the card entry is not
    ///   complete; processing is not set
    pub fn begin_payment(&mut self) -> Result<PaymentTicket, CheckoutError> {
        if self.processing {
            return Err(CheckoutError::AlreadyProcessing);
        }
        self.require_step(CheckoutStep::Payment, "submit payment")?;

        let Some(instrument) = self
            .card
            .as_ref()
            .and_then(CardDetails::usable_instrument)
            .cloned()
        else {
            warn!("payment attempted with incomplete card details");
            return Err(CheckoutError::IncompleteInstrument);
        };
        let email = self.shipping.validate()?;

        self.processing = true;
        add_breadcrumb("checkout", "Submitted payment", None);
        info!(generation = self.generation, "payment started");

        Ok(PaymentTicket {
            generation: self.generation,
            billing: BillingDetails {
                name: self.shipping.name.trim().to_string(),
                email,
            },
            instrument,
        })
    }

    /// Apply the result of the attempt started by `ticket`.
    ///
    /// # Errors
    ///
    /// Returns [`CheckoutError::PaymentDeclined`] or
    /// [`CheckoutError::Provider`] when the payment failed. Processing is
    /// cleared and the session stays at Payment.
    pub fn complete_payment(
        &mut self,
        ticket: PaymentTicket,
        result: Result<PaymentMethod, PaymentError>,
        orders: &OrderStore,
    ) -> Result<PaymentOutcome, CheckoutError> {
        if ticket.generation != self.generation || !self.processing {
            debug!(
                ticket_generation = ticket.generation,
                generation = self.generation,
                "discarding stale payment result"
            );
            return Ok(PaymentOutcome::Stale);
        }
        self.processing = false;

        match result {
            Ok(method) => {
                let Some(snapshot) = self.snapshot.clone() else {
                    return Err(CheckoutError::NotOpen);
                };
                let order = orders.add_order_with_shipping(
                    snapshot.items,
                    snapshot.total,
                    self.shipping.clone(),
                );
                self.order_number = Some(order.order_number().clone());
                self.step = CheckoutStep::Confirmation;
                info!(
                    order_number = %order.order_number(),
                    payment_method_id = %method.id,
                    "checkout confirmed"
                );
                add_breadcrumb(
                    "checkout",
                    "Order placed",
                    Some(&[("order_number", order.order_number().as_str())]),
                );
                if let Some(callback) = self.on_order_placed.as_mut() {
                    callback(&order);
                }
                Ok(PaymentOutcome::Placed(order))
            }
            Err(PaymentError::Declined(message)) => {
                warn!(reason = %message, "payment declined");
                Err(CheckoutError::PaymentDeclined(message))
            }
            Err(err @ PaymentError::Provider(_)) => {
                let event_id = sentry::capture_error(&err);
                tracing::error!(error = %err, sentry_event_id = %event_id, "payment provider error");
                Err(CheckoutError::Provider(err.to_string()))
            }
        }
    }

    /// Run a full payment attempt against `capability`.
    ///
    /// # Errors
    ///
    /// Any error from [`begin_payment`](Self::begin_payment) or
    /// [`complete_payment`](Self::complete_payment).
    pub async fn submit_payment<P: PaymentCapability>(
        &mut self,
        capability: &P,
        orders: &OrderStore,
    ) -> Result<Order, CheckoutError> {
        let ticket = self.begin_payment()?;
        let result = capability
            .create_payment_method(ticket.billing(), ticket.instrument())
            .await;
        match self.complete_payment(ticket, result, orders)? {
            PaymentOutcome::Placed(order) => Ok(order),
            PaymentOutcome::Stale => Err(CheckoutError::SessionClosed),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub const fn step(&self) -> CheckoutStep {
        self.step
    }

    #[must_use]
    pub const fn shipping(&self) -> &ShippingInfo {
        &self.shipping
    }

    #[must_use]
    pub const fn is_processing(&self) -> bool {
        self.processing
    }

    /// Whether the modal is showing (opened and not yet closed).
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.snapshot.is_some()
    }

    /// Number of the order placed by this session, once confirmed.
    #[must_use]
    pub const fn order_number(&self) -> Option<&OrderNumber> {
        self.order_number.as_ref()
    }

    /// Cart total captured when the session was opened.
    #[must_use]
    pub fn total(&self) -> Option<Price> {
        self.snapshot.as_ref().map(|s| s.total)
    }

    /// Cart lines captured when the session was opened.
    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        self.snapshot.as_ref().map_or(&[], |s| s.items.as_slice())
    }

    /// Counter bumped every time the session is reset.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    fn require_step(&self, step: CheckoutStep, action: &'static str) -> Result<(), CheckoutError> {
        if self.snapshot.is_none() {
            return Err(CheckoutError::NotOpen);
        }
        if self.step == step {
            Ok(())
        } else {
            Err(CheckoutError::InvalidTransition {
                from: self.step,
                action,
            })
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use dhanvantari_core::CurrencyCode;

    use super::*;

    fn inr(minor: i64) -> Price {
        Price::from_minor_units(minor, CurrencyCode::INR)
    }

    fn items() -> Vec<CartItem> {
        vec![
            CartItem::new("ashwagandha-kit", "Ashwagandha Kit", inr(59_900), 1),
            CartItem::new("tulsi-kit", "Tulsi Kit", inr(34_900), 2),
        ]
    }

    fn shipping() -> ShippingInfo {
        ShippingInfo {
            name: "Anjali Sharma".to_string(),
            email: "anjali@example.com".to_string(),
            phone: "9876543210".to_string(),
            address: "123 Park Street".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            zip_code: "400001".to_string(),
        }
    }

    fn good_card() -> CardDetails {
        CardDetails::complete(PaymentInstrument::new("4242424242424242"))
    }

    fn at_payment() -> CheckoutSession {
        let mut session = CheckoutSession::new();
        session.open(items(), inr(129_700)).unwrap();
        session.set_shipping(shipping()).unwrap();
        session.continue_to_payment().unwrap();
        session
    }

    fn provider() -> SimulatedPaymentProvider {
        SimulatedPaymentProvider::new(Duration::ZERO)
    }

    #[test]
    fn test_new_session_is_closed() {
        let mut session = CheckoutSession::new();
        assert!(!session.is_open());
        assert_eq!(session.step(), CheckoutStep::Shipping);
        assert_eq!(session.continue_to_payment(), Err(CheckoutError::NotOpen));
    }

    #[test]
    fn test_open_rejects_empty_cart() {
        let mut session = CheckoutSession::new();
        assert_eq!(
            session.open(Vec::new(), inr(0)),
            Err(CheckoutError::EmptyCart)
        );
        assert!(!session.is_open());
    }

    #[test]
    fn test_missing_field_blocks_payment() {
        let mut session = CheckoutSession::new();
        session.open(items(), inr(129_700)).unwrap();
        let mut info = shipping();
        info.city = "   ".to_string();
        session.set_shipping(info.clone()).unwrap();

        let err = session.continue_to_payment().unwrap_err();
        assert_eq!(err.alert().0, "Missing Information");
        assert_eq!(session.step(), CheckoutStep::Shipping);
        assert_eq!(session.shipping(), &info);
    }

    #[test]
    fn test_invalid_email_blocks_payment() {
        let mut session = CheckoutSession::new();
        session.open(items(), inr(129_700)).unwrap();
        session.set_shipping(shipping()).unwrap();
        session.set_field(ShippingField::Email, "anjali@example").unwrap();

        let err = session.continue_to_payment().unwrap_err();
        assert_eq!(
            err.alert(),
            ("Invalid Email", "Please enter a valid email address".to_string())
        );
        assert_eq!(session.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_back_to_shipping_preserves_details() {
        let mut session = at_payment();
        session.back_to_shipping().unwrap();
        assert_eq!(session.step(), CheckoutStep::Shipping);
        assert_eq!(session.shipping(), &shipping());
    }

    #[test]
    fn test_shipping_is_read_only_at_payment() {
        let mut session = at_payment();
        assert_eq!(
            session.set_field(ShippingField::Name, "Someone Else"),
            Err(CheckoutError::InvalidTransition {
                from: CheckoutStep::Payment,
                action: "edit shipping details",
            })
        );
    }

    #[test]
    fn test_incomplete_card_never_sets_processing() {
        let mut session = at_payment();
        session.set_card_details(CardDetails::incomplete()).unwrap();

        let err = session.begin_payment().unwrap_err();
        assert_eq!(err, CheckoutError::IncompleteInstrument);
        assert_eq!(err.alert().0, "Invalid Card");
        assert!(!session.is_processing());
        assert_eq!(session.step(), CheckoutStep::Payment);
    }

    #[tokio::test]
    async fn test_successful_payment_places_one_order() {
        let orders = OrderStore::new("DV");
        let placed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&placed);

        let mut session = at_payment();
        session.set_on_order_placed(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        session.set_card_details(good_card()).unwrap();

        let order = session.submit_payment(&provider(), &orders).await.unwrap();

        assert_eq!(orders.len(), 1);
        assert_eq!(order.total(), inr(129_700));
        assert_eq!(order.shipping(), Some(&shipping()));
        assert_eq!(session.step(), CheckoutStep::Confirmation);
        assert_eq!(session.order_number(), Some(order.order_number()));
        assert!(!session.is_processing());
        assert_eq!(placed.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_declined_payment_stays_at_payment() {
        let orders = OrderStore::new("DV");
        let mut session = at_payment();
        session
            .set_card_details(CardDetails::complete(PaymentInstrument::new(
                "4000 0000 0000 0002",
            )))
            .unwrap();

        let err = session.submit_payment(&provider(), &orders).await.unwrap_err();
        assert_eq!(
            err,
            CheckoutError::PaymentDeclined("Your card was declined.".to_string())
        );
        assert_eq!(err.alert().1, "Your card was declined.");
        assert!(orders.is_empty());
        assert!(!session.is_processing());
        assert_eq!(session.step(), CheckoutStep::Payment);
    }

    #[tokio::test]
    async fn test_provider_error_uses_generic_alert() {
        let orders = OrderStore::new("DV");
        let mut session = at_payment();
        session
            .set_card_details(CardDetails::complete(PaymentInstrument::new(
                "4000000000000119",
            )))
            .unwrap();

        let err = session.submit_payment(&provider(), &orders).await.unwrap_err();
        assert!(matches!(err, CheckoutError::Provider(_)));
        let (title, message) = err.alert();
        assert_eq!(title, "Payment Error");
        assert!(!message.contains("timeout"));
        assert!(orders.is_empty());
        assert_eq!(session.step(), CheckoutStep::Payment);
    }

    #[test]
    fn test_second_begin_is_rejected_while_processing() {
        let mut session = at_payment();
        session.set_card_details(good_card()).unwrap();
        session.begin_payment().unwrap();

        assert_eq!(
            session.begin_payment().unwrap_err(),
            CheckoutError::AlreadyProcessing
        );
        assert_eq!(session.close(), Err(CheckoutError::AlreadyProcessing));
        assert_eq!(
            session.back_to_shipping(),
            Err(CheckoutError::AlreadyProcessing)
        );
    }

    #[test]
    fn test_result_after_cancel_is_stale() {
        let orders = OrderStore::new("DV");
        let mut session = at_payment();
        session.set_card_details(good_card()).unwrap();
        let ticket = session.begin_payment().unwrap();

        session.cancel_in_flight();
        assert!(!session.is_processing());

        let method = PaymentMethod {
            id: "pm_test".to_string(),
            billing: ticket.billing().clone(),
        };
        let outcome = session
            .complete_payment(ticket, Ok(method), &orders)
            .unwrap();
        assert_eq!(outcome, PaymentOutcome::Stale);
        assert!(orders.is_empty());
        assert_eq!(session.step(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_close_and_reopen_starts_fresh() {
        let mut session = CheckoutSession::new();
        session.open(items(), inr(129_700)).unwrap();
        session.set_field(ShippingField::Name, "Anjali").unwrap();
        session.close().unwrap();
        assert!(!session.is_open());

        session.open(items(), inr(129_700)).unwrap();
        assert_eq!(session.step(), CheckoutStep::Shipping);
        assert!(session.shipping().is_blank());
    }

    #[tokio::test]
    async fn test_close_from_confirmation() {
        let orders = OrderStore::new("DV");
        let mut session = at_payment();
        session.set_card_details(good_card()).unwrap();
        session.submit_payment(&provider(), &orders).await.unwrap();

        session.close().unwrap();
        assert_eq!(session.step(), CheckoutStep::Shipping);
        assert!(session.order_number().is_none());
        assert_eq!(orders.len(), 1);
    }

    #[test]
    fn test_open_with_cart_snapshots_total() {
        let cart = CartStore::new(CurrencyCode::INR);
        for item in items() {
            cart.add(item).unwrap();
        }
        let mut session = CheckoutSession::new();
        session.open_with_cart(&cart).unwrap();
        assert_eq!(session.total(), Some(inr(129_700)));
        assert_eq!(session.items().len(), 2);
    }
}
