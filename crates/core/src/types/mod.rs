//! Core types for Dhanvantari.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod cart;
pub mod email;
pub mod id;
pub mod order;
pub mod price;
pub mod shipping;
pub mod status;

pub use cart::CartItem;
pub use email::{Email, EmailError};
pub use id::*;
pub use order::{Order, OrderNumber};
pub use price::{CurrencyCode, Price, PriceError};
pub use shipping::{ShippingError, ShippingField, ShippingInfo};
pub use status::CheckoutStep;
