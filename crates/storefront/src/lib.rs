//! Dhanvantari Storefront library.
//!
//! Client-side state for the Dhanvantari Vatika herbal storefront: the cart,
//! the saved collections (wishlist, herbs, articles, remedies), the
//! append-only order history, the three-step checkout flow and the catalog
//! filter view-model.
//!
//! # Architecture
//!
//! - [`state::AppState`] is the application root. It owns every store and is
//!   handed by reference to whatever needs read or write access.
//! - [`checkout::CheckoutSession`] drives `Shipping -> Payment -> Confirmation`
//!   and talks to the outside world only through
//!   [`checkout::PaymentCapability`].
//! - [`catalog`] holds the static catalog data and the filter view-model.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod profile;
pub mod state;
pub mod stores;
