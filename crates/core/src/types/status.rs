//! Status enums for the checkout flow.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Step of the checkout flow.
///
/// The flow is linear: `Shipping -> Payment -> Confirmation`, with
/// `Payment -> Shipping` allowed for back navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CheckoutStep {
    #[default]
    Shipping,
    Payment,
    Confirmation,
}

impl CheckoutStep {
    /// Header title shown for the step.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Shipping => "Shipping Information",
            Self::Payment => "Payment Method",
            Self::Confirmation => "Order Confirmation",
        }
    }

    /// One-based position for the step indicator.
    #[must_use]
    pub const fn position(self) -> u8 {
        match self {
            Self::Shipping => 1,
            Self::Payment => 2,
            Self::Confirmation => 3,
        }
    }
}

impl fmt::Display for CheckoutStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let step = match self {
            Self::Shipping => "Shipping",
            Self::Payment => "Payment",
            Self::Confirmation => "Confirmation",
        };
        f.write_str(step)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_shipping() {
        assert_eq!(CheckoutStep::default(), CheckoutStep::Shipping);
    }

    #[test]
    fn test_positions_are_ordered() {
        assert!(CheckoutStep::Shipping.position() < CheckoutStep::Payment.position());
        assert!(CheckoutStep::Payment.position() < CheckoutStep::Confirmation.position());
    }

    #[test]
    fn test_titles() {
        assert_eq!(CheckoutStep::Payment.title(), "Payment Method");
        assert_eq!(CheckoutStep::Confirmation.to_string(), "Confirmation");
    }
}
