//! Integration tests for the GENAE storefront cart.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p genae-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `cart_session` - Full shopper sessions driven through UI events

use genae_storefront::UiEvent;

/// Build an "add to cart" click with raw product-card attributes.
#[must_use]
pub fn add_to_cart(id: &str, name: &str, price: &str) -> UiEvent {
    UiEvent::AddToCart {
        id: id.to_string(),
        name: name.to_string(),
        price: price.to_string(),
    }
}

/// Build a "remove" click for a cart row.
#[must_use]
pub fn remove_from_cart(id: &str) -> UiEvent {
    UiEvent::RemoveFromCart { id: id.to_string() }
}
