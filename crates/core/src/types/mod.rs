//! Core types for the GENAE storefront.
//!
//! This module provides type-safe wrappers for the product data carried on a
//! storefront product card.

pub mod id;
pub mod price;
pub mod product;

pub use id::{ProductId, ProductName};
pub use price::{CurrencyCode, Price, PriceError};
pub use product::{ProductInput, ProductInputError};
