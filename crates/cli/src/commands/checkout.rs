//! End-to-end checkout against the simulated payment provider.

use clap::Args;
use dhanvantari_core::{CartItem, CheckoutStep, Order, ShippingInfo};
use dhanvantari_storefront::checkout::{CardDetails, CheckoutSession, PaymentInstrument};
use dhanvantari_storefront::error::{AppError, Result};
use dhanvantari_storefront::profile::ProfileSummary;
use dhanvantari_storefront::state::AppState;
use serde::Serialize;
use tracing::info;

use super::{emit_json, emit_lines};

#[derive(Args, Debug)]
pub struct CheckoutArgs {
    /// Product id to buy (repeatable)
    #[arg(short, long = "product", default_value = "ashwagandha-kit")]
    products: Vec<String>,

    /// Quantity of each product
    #[arg(long, default_value_t = 1)]
    quantity: u32,

    /// Full name
    #[arg(long, default_value = "")]
    name: String,

    /// Email address
    #[arg(long, default_value = "")]
    email: String,

    /// Phone number
    #[arg(long, default_value = "")]
    phone: String,

    /// Street address
    #[arg(long, default_value = "")]
    address: String,

    /// City
    #[arg(long, default_value = "")]
    city: String,

    /// State
    #[arg(long, default_value = "")]
    state: String,

    /// ZIP code
    #[arg(long, default_value = "")]
    zip: String,

    /// Card number (`4000 0000 0000 0002` is declined)
    #[arg(long, default_value = "4242 4242 4242 4242")]
    card: String,

    /// Submit as if the card form were only partly filled in
    #[arg(long)]
    incomplete_card: bool,
}

impl CheckoutArgs {
    fn shipping(&self) -> ShippingInfo {
        ShippingInfo {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            city: self.city.clone(),
            state: self.state.clone(),
            zip_code: self.zip.clone(),
        }
    }

    fn card(&self) -> CardDetails {
        if self.incomplete_card {
            CardDetails::incomplete()
        } else {
            CardDetails::complete(PaymentInstrument::new(self.card.clone()))
        }
    }
}

#[derive(Serialize)]
struct Confirmation<'a> {
    step: CheckoutStep,
    order: &'a Order,
    profile: ProfileSummary,
}

/// Fill the cart, walk every checkout step and print the confirmation.
///
/// # Errors
///
/// Returns an error for unknown products or any rejected checkout step.
pub async fn run(state: &AppState, args: CheckoutArgs, json: bool) -> Result<()> {
    for id in &args.products {
        let product = state
            .catalog()
            .product(id)
            .ok_or_else(|| AppError::NotFound(format!("product {id}")))?;
        state.cart().add(CartItem::new(
            product.id.clone(),
            product.name.clone(),
            product.price,
            args.quantity,
        ))?;
    }

    let mut session = CheckoutSession::new();
    let cart_owner = state.clone();
    session.set_on_order_placed(move |_| cart_owner.cart().clear());

    session.open_with_cart(state.cart())?;
    session.set_shipping(args.shipping())?;
    session.continue_to_payment()?;
    session.set_card_details(args.card())?;

    info!(
        delay_ms = u64::try_from(state.config().payment.simulated_delay.as_millis())
            .unwrap_or(u64::MAX),
        "processing payment"
    );
    let order = session
        .submit_payment(state.payments(), state.orders())
        .await?;
    let profile = ProfileSummary::from_state(state);

    if json {
        return emit_json(&Confirmation {
            step: session.step(),
            order: &order,
            profile,
        });
    }

    let mut lines = vec![
        "Order Confirmed!".to_string(),
        format!("Order number: {}", order.order_number()),
        format!("Total: {}", order.total().display()),
    ];
    lines.extend(order.items().iter().map(|item| {
        format!("  {} x{}", item.name, item.quantity)
    }));
    if let Some(shipping) = order.shipping() {
        lines.push(format!(
            "Shipping to: {}, {}, {}, {} {}",
            shipping.name, shipping.address, shipping.city, shipping.state, shipping.zip_code
        ));
    }
    for entry in profile.menu() {
        if let Some(label) = entry.badge.label() {
            lines.push(format!("{}: {label}", entry.title));
        }
    }
    emit_lines(lines)
}
