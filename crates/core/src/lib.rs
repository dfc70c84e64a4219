//! GENAE Core - Shared domain types.
//!
//! This crate provides the types used across the GENAE storefront components:
//! - `storefront` - Cart store, view rendering and page controller
//! - `cli` - Event-script replay driver
//!
//! # Architecture
//!
//! The core crate contains only types and validation - no rendering, no
//! logging, no configuration. Raw product-card attributes are parsed here into
//! [`ProductInput`] before they are allowed anywhere near the cart.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for product ids, names, prices and inputs

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
