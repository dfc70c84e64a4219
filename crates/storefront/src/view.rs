//! Cart view rendering.
//!
//! Turns a [`Cart`] into the fragments the page shows: the item list, the
//! count badge and the formatted total. Fragments are rendered with Askama
//! templates from `templates/partials/`.

use askama::Template;
use genae_core::{CurrencyCode, Price};
use num_format::{Locale, ToFormattedString};
use serde::Serialize;

use crate::cart::{Cart, CartLineItem};
use crate::config::StorefrontConfig;

/// Text of the placeholder row shown for an empty cart.
pub const EMPTY_CART_TEXT: &str = "Your cart is empty.";

/// Formats prices as `<symbol><grouped amount>`, e.g. `NT$12,345`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoneyFormatter {
    currency: CurrencyCode,
    locale: Locale,
}

impl MoneyFormatter {
    #[must_use]
    pub const fn new(currency: CurrencyCode, locale: Locale) -> Self {
        Self { currency, locale }
    }

    #[must_use]
    pub const fn from_config(config: &StorefrontConfig) -> Self {
        Self::new(config.currency, config.locale)
    }

    /// Format a price with the currency prefix and locale digit grouping.
    #[must_use]
    pub fn format(&self, price: Price) -> String {
        format!(
            "{}{}",
            self.currency.symbol(),
            price.amount().to_formatted_string(&self.locale)
        )
    }
}

impl Default for MoneyFormatter {
    fn default() -> Self {
        Self::from_config(&StorefrontConfig::default())
    }
}

/// Cart item display data for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: String,
    pub name: String,
    pub unit_price: String,
    pub quantity: u32,
    pub line_price: String,
}

impl CartItemView {
    fn new(line: &CartLineItem, money: &MoneyFormatter) -> Self {
        Self {
            id: line.id.to_string(),
            name: line.name.to_string(),
            unit_price: money.format(line.unit_price),
            quantity: line.quantity,
            line_price: money.format(line.line_total()),
        }
    }
}

/// Cart display data for templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub items: Vec<CartItemView>,
    pub total: String,
    pub item_count: u32,
}

impl CartView {
    #[must_use]
    pub fn new(cart: &Cart, money: &MoneyFormatter) -> Self {
        Self {
            items: cart
                .lines()
                .iter()
                .map(|line| CartItemView::new(line, money))
                .collect(),
            total: money.format(cart.total()),
            item_count: cart.item_count(),
        }
    }
}

/// Cart items fragment template.
#[derive(Template)]
#[template(path = "partials/cart_items.html")]
struct CartItemsTemplate<'a> {
    cart: &'a CartView,
    empty_text: &'a str,
}

/// Cart count badge fragment template.
#[derive(Template)]
#[template(path = "partials/cart_count.html")]
struct CartCountTemplate {
    count: u32,
}

/// Fully rendered cart fragments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedCart {
    /// `<li>` rows for the item list (or the empty placeholder row).
    pub items_html: String,
    /// Count badge markup.
    pub count_html: String,
    /// Formatted total, e.g. `NT$1,280`.
    pub total: String,
    /// Badge count.
    pub item_count: u32,
    /// Whether the placeholder row is shown instead of item rows.
    pub is_empty: bool,
}

/// Renders a cart into page fragments.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartRenderer {
    money: MoneyFormatter,
}

impl CartRenderer {
    #[must_use]
    pub const fn new(money: MoneyFormatter) -> Self {
        Self { money }
    }

    #[must_use]
    pub const fn money(&self) -> &MoneyFormatter {
        &self.money
    }

    /// Render the item list, badge and total for `cart`.
    ///
    /// # Errors
    ///
    /// Returns an error if a template fails to render.
    pub fn render(&self, cart: &Cart) -> askama::Result<RenderedCart> {
        let view = CartView::new(cart, &self.money);

        let items_html = CartItemsTemplate {
            cart: &view,
            empty_text: EMPTY_CART_TEXT,
        }
        .render()?;
        let count_html = CartCountTemplate {
            count: view.item_count,
        }
        .render()?;

        Ok(RenderedCart {
            items_html,
            count_html,
            is_empty: view.items.is_empty(),
            total: view.total,
            item_count: view.item_count,
        })
    }
}
