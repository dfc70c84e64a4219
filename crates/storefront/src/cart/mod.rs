//! In-memory cart model.
//!
//! A [`Cart`] is an ordered list of [`CartLineItem`]s keyed by product id.
//! Insertion order is display order. Totals are always derived from the
//! current lines, never cached.

mod store;

pub use store::{CartListener, CartStore};

use genae_core::{Price, ProductId, ProductInput, ProductName};
use serde::Serialize;

/// One product entry in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartLineItem {
    pub id: ProductId,
    pub name: ProductName,
    pub unit_price: Price,
    /// Always at least 1.
    pub quantity: u32,
}

impl CartLineItem {
    fn from_input(input: &ProductInput) -> Self {
        Self {
            id: input.id.clone(),
            name: input.name.clone(),
            unit_price: input.unit_price,
            quantity: 1,
        }
    }

    /// `unit_price * quantity`, saturating.
    #[must_use]
    pub fn line_total(&self) -> Price {
        self.unit_price.times(self.quantity)
    }
}

/// Ordered collection of line items, at most one per product id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Cart {
    lines: Vec<CartLineItem>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub const fn new() -> Self {
        Self { lines: Vec::new() }
    }

    /// Add one unit of a product, returning its new quantity.
    ///
    /// An existing line keeps its position, name and price; a new product is
    /// appended with quantity 1.
    pub fn add(&mut self, input: &ProductInput) -> u32 {
        if let Some(line) = self.lines.iter_mut().find(|line| line.id == input.id) {
            line.quantity = line.quantity.saturating_add(1);
            return line.quantity;
        }
        self.lines.push(CartLineItem::from_input(input));
        1
    }

    /// Remove the line for `id`, returning it if it was present.
    pub fn remove(&mut self, id: &ProductId) -> Option<CartLineItem> {
        let index = self.lines.iter().position(|line| &line.id == id)?;
        Some(self.lines.remove(index))
    }

    /// Remove every line.
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Sum of `unit_price * quantity` over all lines.
    #[must_use]
    pub fn total(&self) -> Price {
        self.lines.iter().map(CartLineItem::line_total).sum()
    }

    /// Sum of all quantities.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines
            .iter()
            .fold(0, |count, line| count.saturating_add(line.quantity))
    }

    #[must_use]
    pub fn get(&self, id: &ProductId) -> Option<&CartLineItem> {
        self.lines.iter().find(|line| &line.id == id)
    }

    #[must_use]
    pub fn lines(&self) -> &[CartLineItem] {
        &self.lines
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
