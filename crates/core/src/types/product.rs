//! Validated product input for cart operations.

use serde::{Deserialize, Serialize};

use super::id::{ProductId, ProductName};
use super::price::{Price, PriceError};

/// Errors that can occur when parsing a [`ProductInput`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ProductInputError {
    /// The product id is empty.
    #[error("product id cannot be empty")]
    EmptyId,
    /// The product name is empty.
    #[error("product name cannot be empty")]
    EmptyName,
    /// The price attribute is invalid.
    #[error("invalid price: {0}")]
    Price(#[from] PriceError),
}

/// A product as it enters the cart.
///
/// Built from the `data-id`, `data-name` and `data-price` attributes of a
/// product card. Only a successfully parsed `ProductInput` can be added to a
/// cart, so the cart never sees an empty id or a malformed price.
///
/// ```
/// use genae_core::{Price, ProductInput};
///
/// let input = ProductInput::parse("genae-01", "Sakura Doll", "1280").unwrap();
/// assert_eq!(input.unit_price, Price::new(1280));
///
/// assert!(ProductInput::parse("genae-01", "Sakura Doll", "12.8").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductInput {
    /// Product identifier.
    pub id: ProductId,
    /// Display name.
    pub name: ProductName,
    /// Unit price in whole currency units.
    pub unit_price: Price,
}

impl ProductInput {
    /// Create a product input from already-validated parts.
    #[must_use]
    pub const fn new(id: ProductId, name: ProductName, unit_price: Price) -> Self {
        Self {
            id,
            name,
            unit_price,
        }
    }

    /// Parse raw product-card attributes.
    ///
    /// Fields are checked in order (id, name, price) and the first failure
    /// is returned.
    ///
    /// # Errors
    ///
    /// Returns an error if the id or name is empty, or the price is not a
    /// non-negative whole number.
    pub fn parse(id: &str, name: &str, price: &str) -> Result<Self, ProductInputError> {
        Ok(Self {
            id: ProductId::parse(id)?,
            name: ProductName::parse(name)?,
            unit_price: Price::parse(price)?,
        })
    }
}
