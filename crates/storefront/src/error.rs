//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type for callers that drive the storefront
//! (the CLI, tests). Unexpected failures are captured to Sentry via
//! [`AppError::report`] before they are shown to the user.

use thiserror::Error;

use crate::checkout::{CheckoutError, PaymentError};
use crate::config::ConfigError;
use crate::stores::CartError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// A checkout action was rejected.
    #[error("Checkout error: {0}")]
    Checkout(#[from] CheckoutError),

    /// A cart operation failed.
    #[error("Cart error: {0}")]
    Cart(#[from] CartError),

    /// The payment provider failed outside a checkout session.
    #[error("Payment error: {0}")]
    Payment(#[from] PaymentError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Internal error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Whether this error is unexpected and worth reporting to Sentry.
    #[must_use]
    pub const fn is_unexpected(&self) -> bool {
        matches!(
            self,
            Self::Config(_)
                | Self::Internal(_)
                | Self::Payment(PaymentError::Provider(_))
                | Self::Checkout(CheckoutError::Provider(_))
        )
    }

    /// Log the error and capture it to Sentry when unexpected.
    pub fn report(&self) {
        if self.is_unexpected() {
            let event_id = sentry::capture_error(self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Storefront error"
            );
        } else {
            tracing::warn!(error = %self, "Storefront error");
        }
    }

    /// Message safe to show the user.
    ///
    /// Internal details are never exposed.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Checkout(err) => {
                let (title, message) = err.alert();
                format!("{title}: {message}")
            }
            Self::Config(_) | Self::Internal(_) => "Internal error".to_string(),
            Self::Payment(_) => {
                "There was an error processing your payment. Please try again.".to_string()
            }
            _ => self.to_string(),
        }
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Add a breadcrumb for user actions.
///
/// Breadcrumbs appear in Sentry error reports to show the trail of user actions
/// leading up to an error.
///
/// # Example
///
/// ```rust,ignore
/// add_breadcrumb("checkout", "Continued to payment", Some(&[("step", "payment")]));
/// ```
pub fn add_breadcrumb(category: &str, message: &str, data: Option<&[(&str, &str)]>) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some(category.to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };

    if let Some(pairs) = data {
        for (key, value) in pairs {
            breadcrumb.data.insert(
                (*key).to_string(),
                serde_json::Value::String((*value).to_string()),
            );
        }
    }

    sentry::add_breadcrumb(breadcrumb);
}
