//! Cart to confirmed order through the checkout session.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};

use chrono::Utc;
use dhanvantari_core::{CheckoutStep, Price, ShippingField};
use dhanvantari_integration_tests::{FakeOutcome, FakePayments, TestContext, valid_shipping};
use dhanvantari_storefront::checkout::{
    CardDetails, CheckoutError, CheckoutSession, PaymentError, PaymentInstrument, PaymentOutcome,
};

fn good_card() -> CardDetails {
    CardDetails::complete(PaymentInstrument::new("4242 4242 4242 4242"))
}

/// Open a session over the context's cart and advance it to Payment.
fn session_at_payment(ctx: &TestContext) -> CheckoutSession {
    let mut session = CheckoutSession::new();
    session.open_with_cart(ctx.state.cart()).unwrap();
    session.set_shipping(valid_shipping()).unwrap();
    session.continue_to_payment().unwrap();
    session
}

#[test]
fn test_each_missing_field_blocks_payment_step() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    for field in ShippingField::ALL {
        let mut session = CheckoutSession::new();
        session.open_with_cart(ctx.state.cart()).unwrap();
        session.set_shipping(valid_shipping()).unwrap();
        session.set_field(field, "").unwrap();

        let err = session.continue_to_payment().unwrap_err();
        assert!(matches!(err, CheckoutError::Validation(_)), "{field}");
        assert_eq!(
            err.alert(),
            (
                "Missing Information",
                "Please fill in all required fields".to_string()
            )
        );
        assert_eq!(session.step(), CheckoutStep::Shipping);
    }
    assert!(ctx.state.orders().is_empty());
}

#[test]
fn test_malformed_emails_block_payment_step() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    for email in ["anjali", "anjali@", "@example.com", "anjali@example", "an jali@example.com"] {
        let mut session = CheckoutSession::new();
        session.open_with_cart(ctx.state.cart()).unwrap();
        session.set_shipping(valid_shipping()).unwrap();
        session.set_field(ShippingField::Email, email).unwrap();

        let err = session.continue_to_payment().unwrap_err();
        assert_eq!(err.alert().0, "Invalid Email", "{email}");
        assert_eq!(session.step(), CheckoutStep::Shipping);
    }
}

#[tokio::test]
async fn test_successful_checkout_creates_exactly_one_order() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["ashwagandha-kit", "triphala-kit"]);
    let cart_total = ctx.state.cart().total().unwrap();
    let payments = FakePayments::approving();

    let placed = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&placed);
    let cart_owner = ctx.state.clone();

    let mut session = session_at_payment(&ctx);
    session.set_on_order_placed(move |order| {
        seen.lock().unwrap().push(order.order_number().clone());
        cart_owner.cart().clear();
    });
    session.set_card_details(good_card()).unwrap();

    let before = Utc::now();
    let order = session
        .submit_payment(&payments, ctx.state.orders())
        .await
        .unwrap();
    let after = Utc::now();

    assert_eq!(payments.calls(), 1);
    assert!(before <= order.created_at() && order.created_at() <= after);
    assert_eq!(ctx.state.orders().len(), 1);
    assert_eq!(order.total(), cart_total);
    assert_eq!(
        order.total(),
        Price::from_minor_units(59_900 + 44_900, cart_total.currency_code)
    );
    assert_eq!(order.items().len(), 2);
    assert_eq!(session.step(), CheckoutStep::Confirmation);
    assert_eq!(session.order_number(), Some(order.order_number()));
    assert_eq!(*placed.lock().unwrap(), vec![order.order_number().clone()]);
    assert!(ctx.state.cart().is_empty());
    assert_eq!(ctx.state.orders().latest(), Some(order));
}

#[tokio::test]
async fn test_incomplete_card_creates_no_order() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["neem-kit"]);
    let payments = FakePayments::approving();

    let mut session = session_at_payment(&ctx);
    session.set_card_details(CardDetails::incomplete()).unwrap();

    let err = session
        .submit_payment(&payments, ctx.state.orders())
        .await
        .unwrap_err();

    assert_eq!(err, CheckoutError::IncompleteInstrument);
    assert_eq!(payments.calls(), 0);
    assert!(ctx.state.orders().is_empty());
    assert_eq!(session.step(), CheckoutStep::Payment);
    assert!(!session.is_processing());
}

#[tokio::test]
async fn test_decline_then_retry_succeeds() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();

    let declining = FakePayments::new(FakeOutcome::Decline("Insufficient funds".to_string()));
    let err = session
        .submit_payment(&declining, ctx.state.orders())
        .await
        .unwrap_err();
    assert_eq!(
        err.alert(),
        ("Payment Error", "Insufficient funds".to_string())
    );
    assert!(!session.is_processing());
    assert_eq!(session.step(), CheckoutStep::Payment);
    assert!(ctx.state.orders().is_empty());

    let approving = FakePayments::approving();
    session
        .submit_payment(&approving, ctx.state.orders())
        .await
        .unwrap();
    assert_eq!(ctx.state.orders().len(), 1);
    assert_eq!(session.step(), CheckoutStep::Confirmation);
}

#[tokio::test]
async fn test_provider_failure_keeps_payment_step() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);
    let failing = FakePayments::new(FakeOutcome::Fail("upstream 503".to_string()));

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();
    let err = session
        .submit_payment(&failing, ctx.state.orders())
        .await
        .unwrap_err();

    assert!(matches!(err, CheckoutError::Provider(_)));
    assert!(!err.alert().1.contains("503"));
    assert!(!session.is_processing());
    assert_eq!(session.step(), CheckoutStep::Payment);
    assert!(ctx.state.orders().is_empty());
}

#[test]
fn test_second_submit_while_processing_is_rejected() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();
    let _ticket = session.begin_payment().unwrap();

    assert_eq!(
        session.begin_payment().unwrap_err(),
        CheckoutError::AlreadyProcessing
    );
    assert!(session.is_processing());
}

#[test]
fn test_result_after_close_is_ignored() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);
    let payments = FakePayments::approving();

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();
    let ticket = session.begin_payment().unwrap();
    let result = payments.answer(ticket.billing());

    // The user dismisses the modal before the provider answers.
    assert_eq!(session.close(), Err(CheckoutError::AlreadyProcessing));
    session.cancel_in_flight();

    let outcome = session
        .complete_payment(ticket, result, ctx.state.orders())
        .unwrap();
    assert_eq!(outcome, PaymentOutcome::Stale);
    assert!(ctx.state.orders().is_empty());
    assert!(!session.is_open());
}

#[test]
fn test_failure_after_close_is_ignored() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();
    let ticket = session.begin_payment().unwrap();
    session.cancel_in_flight();

    let outcome = session
        .complete_payment(
            ticket,
            Err(PaymentError::Provider("gateway timeout".to_string())),
            ctx.state.orders(),
        )
        .unwrap();
    assert_eq!(outcome, PaymentOutcome::Stale);
    assert!(ctx.state.orders().is_empty());
    assert!(!session.is_processing());
    assert!(!session.is_open());
}

#[test]
fn test_result_for_previous_session_is_ignored() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);
    let payments = FakePayments::approving();

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();
    let stale_ticket = session.begin_payment().unwrap();
    let stale_result = payments.answer(stale_ticket.billing());
    session.cancel_in_flight();

    // A new attempt in a reopened session.
    session.open_with_cart(ctx.state.cart()).unwrap();
    session.set_shipping(valid_shipping()).unwrap();
    session.continue_to_payment().unwrap();
    session.set_card_details(good_card()).unwrap();
    let ticket = session.begin_payment().unwrap();

    let outcome = session
        .complete_payment(stale_ticket, stale_result, ctx.state.orders())
        .unwrap();
    assert_eq!(outcome, PaymentOutcome::Stale);
    assert!(session.is_processing());

    let result = payments.answer(ticket.billing());
    let outcome = session
        .complete_payment(ticket, result, ctx.state.orders())
        .unwrap();
    assert!(matches!(outcome, PaymentOutcome::Placed(_)));
    assert_eq!(ctx.state.orders().len(), 1);
}

#[test]
fn test_close_at_shipping_and_reopen_is_fresh() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    let mut session = CheckoutSession::new();
    session.open_with_cart(ctx.state.cart()).unwrap();
    session.set_field(ShippingField::Name, "Anjali").unwrap();
    session.set_field(ShippingField::City, "Pune").unwrap();
    session.close().unwrap();

    session.open_with_cart(ctx.state.cart()).unwrap();
    assert_eq!(session.step(), CheckoutStep::Shipping);
    assert!(session.shipping().is_blank());
}

#[test]
fn test_close_at_payment_discards_card_entry() {
    let ctx = TestContext::new();
    ctx.fill_cart(&["tulsi-kit"]);

    let mut session = session_at_payment(&ctx);
    session.set_card_details(good_card()).unwrap();
    session.close().unwrap();

    session.open_with_cart(ctx.state.cart()).unwrap();
    assert_eq!(session.step(), CheckoutStep::Shipping);
    session.set_shipping(valid_shipping()).unwrap();
    session.continue_to_payment().unwrap();
    assert_eq!(
        session.begin_payment().unwrap_err(),
        CheckoutError::IncompleteInstrument
    );
    assert!(!session.is_processing());
}

#[test]
fn test_empty_cart_cannot_open_checkout() {
    let ctx = TestContext::new();
    let mut session = CheckoutSession::new();
    assert_eq!(
        session.open_with_cart(ctx.state.cart()),
        Err(CheckoutError::EmptyCart)
    );
}

#[tokio::test]
async fn test_order_history_is_most_recent_last() {
    let ctx = TestContext::new();
    let payments = FakePayments::approving();

    for product in ["tulsi-kit", "neem-kit"] {
        ctx.state.cart().clear();
        ctx.fill_cart(&[product]);
        let mut session = session_at_payment(&ctx);
        session.set_card_details(good_card()).unwrap();
        session
            .submit_payment(&payments, ctx.state.orders())
            .await
            .unwrap();
    }

    let orders = ctx.state.orders().orders();
    let first_items: Vec<&str> = orders
        .iter()
        .filter_map(|o| o.items().first())
        .map(|i| i.product_id.as_str())
        .collect();
    assert_eq!(first_items, vec!["tulsi-kit", "neem-kit"]);
    assert_ne!(
        orders.first().unwrap().order_number(),
        orders.last().unwrap().order_number()
    );

    let json = serde_json::to_value(orders.last().unwrap()).unwrap();
    assert!(json["order_number"].as_str().unwrap().starts_with("DV-000002-"));
}
