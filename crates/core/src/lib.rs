//! Dhanvantari Core - Shared types library.
//!
//! This crate provides common types used across all Dhanvantari components:
//! - `storefront` - Client-side stores, checkout flow and catalog view-models
//! - `cli` - Command-line demo that drives the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no I/O, no payment
//! providers, no global state. This keeps it lightweight and allows it to be
//! used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids, prices, emails, shipping details,
//!   cart items, orders and checkout steps

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
