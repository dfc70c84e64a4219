//! GENAE Storefront library.
//!
//! Client-side cart state for the single-page storefront:
//!
//! - [`cart`] - The cart model and the [`CartStore`] that owns it
//! - [`view`] - Renders the cart into item rows, badge and total
//! - [`drawer`] / [`nav`] - Cart drawer and mobile navigation toggles
//! - [`checkout`] - Simulated checkout
//! - [`page`] - Dispatches UI events and assembles page updates
//!
//! Everything runs on one thread; each event is handled to completion
//! before the next.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod checkout;
pub mod config;
pub mod drawer;
pub mod error;
pub mod nav;
pub mod page;
pub mod view;

pub use cart::{Cart, CartLineItem, CartStore};
pub use config::StorefrontConfig;
pub use error::{Result, StorefrontError};
pub use page::{PageUpdate, Storefront, UiEvent};
