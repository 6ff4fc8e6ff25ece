//! Payment capability boundary.
//!
//! Checkout never sees card numbers. The card entry widget hands over an
//! opaque [`PaymentInstrument`] and reports whether the entry is complete; a
//! [`PaymentCapability`] turns billing details plus that instrument into a
//! [`PaymentMethod`] or a [`PaymentError`].

use core::fmt;
use std::future::Future;
use std::time::Duration;

use dhanvantari_core::Email;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, instrument};
use uuid::Uuid;

use crate::config::PaymentConfig;

/// Errors reported by a payment provider.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PaymentError {
    /// The issuer refused the instrument.
    #[error("payment declined: {0}")]
    Declined(String),
    /// Any other provider failure (network, misconfiguration, outage).
    #[error("payment provider error: {0}")]
    Provider(String),
}

/// Billing details sent alongside the instrument.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BillingDetails {
    pub name: String,
    pub email: Email,
}

/// Opaque reference to card data held by the card entry widget.
#[derive(Clone, PartialEq, Eq)]
pub struct PaymentInstrument(String);

impl PaymentInstrument {
    #[must_use]
    pub fn new(reference: impl Into<String>) -> Self {
        Self(reference.into())
    }

    /// The raw reference, for handing to a provider.
    #[must_use]
    pub fn reference(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for PaymentInstrument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PaymentInstrument([REDACTED])")
    }
}

/// State reported by the card entry widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CardDetails {
    /// Number, expiry and CVC all entered and well formed.
    pub complete: bool,
    pub instrument: Option<PaymentInstrument>,
}

impl CardDetails {
    /// A fully entered card.
    #[must_use]
    pub const fn complete(instrument: PaymentInstrument) -> Self {
        Self {
            complete: true,
            instrument: Some(instrument),
        }
    }

    /// A partially entered card.
    #[must_use]
    pub const fn incomplete() -> Self {
        Self {
            complete: false,
            instrument: None,
        }
    }

    /// The instrument, if the entry is complete.
    #[must_use]
    pub fn usable_instrument(&self) -> Option<&PaymentInstrument> {
        self.instrument.as_ref().filter(|_| self.complete)
    }
}

/// A payment method accepted by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub billing: BillingDetails,
}

/// Something that can validate and charge a payment instrument.
pub trait PaymentCapability: Send + Sync {
    /// Create a payment method from billing details and an instrument.
    fn create_payment_method(
        &self,
        billing: &BillingDetails,
        instrument: &PaymentInstrument,
    ) -> impl Future<Output = Result<PaymentMethod, PaymentError>> + Send;
}

/// Reference suffix the simulated provider declines.
pub const DECLINED_CARD_SUFFIX: &str = "0002";
/// Reference suffix the simulated provider fails with a provider error.
pub const PROVIDER_ERROR_CARD_SUFFIX: &str = "0119";

/// In-process stand-in for a real payment gateway.
///
/// Waits for the configured latency, then accepts every instrument except
/// those whose reference ends in [`DECLINED_CARD_SUFFIX`] (declined) or
/// [`PROVIDER_ERROR_CARD_SUFFIX`] (provider error). Spaces in the reference
/// are ignored, so `4000 0000 0000 0002` declines.
#[derive(Debug, Clone)]
pub struct SimulatedPaymentProvider {
    delay: Duration,
    live: bool,
}

impl SimulatedPaymentProvider {
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self { delay, live: false }
    }

    #[must_use]
    pub fn from_config(config: &PaymentConfig) -> Self {
        Self {
            delay: config.simulated_delay,
            live: config.is_live(),
        }
    }
}

impl PaymentCapability for SimulatedPaymentProvider {
    #[instrument(skip_all, fields(billing_name = %billing.name, live = self.live))]
    async fn create_payment_method(
        &self,
        billing: &BillingDetails,
        instrument: &PaymentInstrument,
    ) -> Result<PaymentMethod, PaymentError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let digits: String = instrument
            .reference()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();

        if digits.ends_with(DECLINED_CARD_SUFFIX) {
            debug!("simulated decline");
            return Err(PaymentError::Declined("Your card was declined.".to_string()));
        }
        if digits.ends_with(PROVIDER_ERROR_CARD_SUFFIX) {
            debug!("simulated provider failure");
            return Err(PaymentError::Provider(
                "simulated gateway timeout".to_string(),
            ));
        }

        let method = PaymentMethod {
            id: format!("pm_{}", Uuid::new_v4().simple()),
            billing: billing.clone(),
        };
        debug!(payment_method_id = %method.id, "simulated payment method created");
        Ok(method)
    }
}
