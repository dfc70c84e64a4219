//! Simulated checkout.
//!
//! Nothing is recorded or transmitted. A successful checkout confirms,
//! empties the cart and closes the drawer.

use serde::Serialize;
use tracing::instrument;

use crate::cart::CartStore;
use crate::drawer::CartDrawer;

/// Kind of blocking user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Checkout succeeded.
    OrderConfirmed,
    /// Checkout was attempted with nothing in the cart.
    CartEmpty,
}

/// A blocking message shown to the shopper.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    fn order_confirmed(shop_name: &str) -> Self {
        Self {
            kind: NoticeKind::OrderConfirmed,
            message: format!(
                "Thank you for shopping with {shop_name}! We will process your order shortly."
            ),
        }
    }

    fn cart_empty() -> Self {
        Self {
            kind: NoticeKind::CartEmpty,
            message: "Your cart is empty. Please add a product first.".to_string(),
        }
    }
}

/// Check out the current cart.
///
/// On an empty cart nothing changes and a [`NoticeKind::CartEmpty`] notice is
/// returned.
#[instrument(skip_all, fields(items = store.item_count()))]
pub fn checkout(store: &mut CartStore, drawer: &mut CartDrawer, shop_name: &str) -> Notice {
    if store.cart().is_empty() {
        tracing::info!("Checkout attempted with empty cart");
        return Notice::cart_empty();
    }

    tracing::info!(total = %store.total(), "Checkout completed");
    store.clear();
    drawer.close();
    Notice::order_confirmed(shop_name)
}
