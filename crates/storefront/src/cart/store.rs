//! Cart store with change notification.

use std::fmt;

use genae_core::{Price, ProductId, ProductInput};
use tracing::instrument;

use super::Cart;

/// Callback invoked with the current cart after every mutation.
pub type CartListener = Box<dyn FnMut(&Cart)>;

/// Exclusive owner of the session cart.
///
/// The cart is only reachable mutably through `add`, `remove` and `clear`.
/// Each of them notifies every subscribed listener, in subscription order,
/// once the mutation is complete (including no-op removals), so a renderer
/// subscribed here never shows stale state.
#[derive(Default)]
pub struct CartStore {
    cart: Cart,
    listeners: Vec<CartListener>,
}

impl fmt::Debug for CartStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CartStore")
            .field("cart", &self.cart)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl CartStore {
    /// Create a store holding an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change listener.
    ///
    /// The listener is not called on subscription; callers that need the
    /// initial state should read [`CartStore::cart`].
    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&Cart) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Add one unit of `input`, returning the line's new quantity.
    #[instrument(skip_all, fields(product_id = %input.id))]
    pub fn add(&mut self, input: &ProductInput) -> u32 {
        let quantity = self.cart.add(input);
        tracing::debug!(quantity, "Added to cart");
        self.notify();
        quantity
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    #[instrument(skip_all, fields(product_id = %id))]
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let removed = self.cart.remove(id).is_some();
        if removed {
            tracing::debug!("Removed from cart");
        } else {
            tracing::debug!("Remove requested for product not in cart");
        }
        self.notify();
        removed
    }

    /// Empty the cart.
    #[instrument(skip_all)]
    pub fn clear(&mut self) {
        self.cart.clear();
        tracing::debug!("Cart cleared");
        self.notify();
    }

    #[must_use]
    pub fn total(&self) -> Price {
        self.cart.total()
    }

    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.cart.item_count()
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    fn notify(&mut self) {
        for listener in &mut self.listeners {
            listener(&self.cart);
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn product(id: &str, price: &str) -> ProductInput {
        ProductInput::parse(id, "Doll", price).unwrap()
    }

    fn recording_store() -> (CartStore, Rc<RefCell<Vec<u32>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::new();
        let sink = Rc::clone(&seen);
        store.subscribe(move |cart| sink.borrow_mut().push(cart.item_count()));
        (store, seen)
    }

    #[test]
    fn test_every_mutation_notifies() {
        let (mut store, seen) = recording_store();

        store.add(&product("a", "100"));
        store.add(&product("a", "100"));
        store.remove(&ProductId::parse("missing").unwrap());
        store.clear();

        assert_eq!(*seen.borrow(), [1, 2, 2, 0]);
    }

    #[test]
    fn test_listeners_run_in_subscription_order() {
        let order = Rc::new(RefCell::new(Vec::new()));
        let mut store = CartStore::new();
        for tag in ["first", "second"] {
            let order = Rc::clone(&order);
            store.subscribe(move |_| order.borrow_mut().push(tag));
        }

        store.clear();
        assert_eq!(*order.borrow(), ["first", "second"]);
    }

    #[test]
    fn test_remove_reports_presence() {
        let mut store = CartStore::new();
        store.add(&product("a", "100"));

        assert!(!store.remove(&ProductId::parse("b").unwrap()));
        assert_eq!(store.total(), Price::new(100));
        assert!(store.remove(&ProductId::parse("a").unwrap()));
        assert!(store.cart().is_empty());
    }

    #[test]
    fn test_clear_resets_count() {
        let mut store = CartStore::new();
        store.add(&product("a", "100"));
        store.add(&product("b", "50"));
        store.clear();

        assert_eq!(store.item_count(), 0);
        assert_eq!(store.total(), Price::ZERO);
    }
}
