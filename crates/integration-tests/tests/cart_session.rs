//! Shopper sessions driven end to end through UI events.
//!
//! Run with: cargo test -p genae-integration-tests

#![allow(clippy::unwrap_used)]

use std::cell::RefCell;
use std::rc::Rc;

use genae_core::{CurrencyCode, Price, ProductId, ProductInput};
use genae_integration_tests::{add_to_cart, remove_from_cart};
use genae_storefront::checkout::NoticeKind;
use genae_storefront::config::Locale;
use genae_storefront::view::{CartRenderer, EMPTY_CART_TEXT, MoneyFormatter};
use genae_storefront::{CartStore, Storefront, StorefrontConfig, UiEvent};

fn storefront() -> Storefront {
    Storefront::new(StorefrontConfig::default()).unwrap()
}

// ============================================================================
// Cart store
// ============================================================================

#[test]
fn adding_same_product_twice_yields_one_row() {
    let mut page = storefront();
    page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();
    let update = page
        .dispatch(add_to_cart("genae-01", "Sakura", "1280"))
        .unwrap();

    assert_eq!(page.store().cart().len(), 1);
    assert_eq!(page.store().cart().lines()[0].quantity, 2);
    assert_eq!(update.cart.items_html.matches("cart-item\"").count(), 1);
    assert_eq!(update.cart.item_count, 2);
}

#[test]
fn total_sums_price_times_quantity() {
    let mut store = CartStore::new();
    let a = ProductInput::parse("a", "A", "100").unwrap();
    let b = ProductInput::parse("b", "B", "50").unwrap();
    store.add(&a);
    store.add(&a);
    store.add(&b);

    assert_eq!(store.total(), Price::new(250));
}

#[test]
fn removing_unknown_product_leaves_cart_unchanged() {
    let mut page = storefront();
    page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();
    let before = page.store().cart().clone();

    let update = page.dispatch(remove_from_cart("genae-99")).unwrap();

    assert_eq!(page.store().cart(), &before);
    assert_eq!(update.cart.total, "NT$1,280");
    assert!(update.rejected.is_none());
}

#[test]
fn clear_shows_placeholder() {
    let mut store = CartStore::new();
    let renderer = CartRenderer::default();
    let latest = Rc::new(RefCell::new(None));
    let sink = Rc::clone(&latest);
    store.subscribe(move |cart| *sink.borrow_mut() = Some(renderer.render(cart).unwrap()));

    store.add(&ProductInput::parse("a", "A", "100").unwrap());
    store.clear();

    assert_eq!(store.item_count(), 0);
    let rendered = latest.borrow_mut().take().unwrap();
    assert!(rendered.is_empty);
    assert!(rendered.items_html.contains(EMPTY_CART_TEXT));
    assert!(rendered.count_html.contains(">0<"));
}

#[test]
fn remove_drops_line_and_updates_view() {
    let mut page = storefront();
    page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();
    page.dispatch(add_to_cart("genae-02", "Momo", "1500")).unwrap();

    let update = page.dispatch(remove_from_cart("genae-01")).unwrap();

    assert!(!update.cart.items_html.contains("Sakura"));
    assert!(update.cart.items_html.contains("Momo"));
    assert_eq!(update.cart.total, "NT$1,500");
    assert!(page
        .store()
        .cart()
        .get(&ProductId::parse("genae-01").unwrap())
        .is_none());
}

// ============================================================================
// Drawer
// ============================================================================

#[test]
fn adding_opens_closed_drawer() {
    let mut page = storefront();
    assert!(!page.drawer().is_open());

    let update = page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();

    assert!(!update.drawer.aria_hidden);
    assert!(update.drawer.toggle_aria_expanded);
}

#[test]
fn adding_keeps_open_drawer_open() {
    let mut page = storefront();
    page.dispatch(UiEvent::ToggleCart).unwrap();
    assert!(page.drawer().is_open());

    page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();
    let update = page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();

    assert!(page.drawer().is_open());
    assert!(!update.drawer.aria_hidden);
}

#[test]
fn drawer_attributes_always_mirror() {
    let mut page = storefront();
    for event in [UiEvent::ToggleCart, UiEvent::CloseCart, UiEvent::ToggleCart] {
        let update = page.dispatch(event).unwrap();
        assert_eq!(update.drawer.aria_hidden, !update.drawer.toggle_aria_expanded);
    }
}

// ============================================================================
// Checkout
// ============================================================================

#[test]
fn checkout_with_items_confirms_clears_and_closes() {
    let mut page = storefront();
    page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();
    assert!(page.drawer().is_open());

    let update = page.dispatch(UiEvent::Checkout).unwrap();

    let notice = update.notice.unwrap();
    assert_eq!(notice.kind, NoticeKind::OrderConfirmed);
    assert!(notice.message.contains("GENAE"));
    assert!(page.store().cart().is_empty());
    assert!(update.cart.items_html.contains(EMPTY_CART_TEXT));
    assert!(update.drawer.aria_hidden);
}

#[test]
fn checkout_with_empty_cart_only_notifies() {
    let mut page = storefront();
    page.dispatch(UiEvent::ToggleCart).unwrap();
    let before = page.snapshot();

    let update = page.dispatch(UiEvent::Checkout).unwrap();

    assert_eq!(update.notice.as_ref().unwrap().kind, NoticeKind::CartEmpty);
    assert_eq!(update.cart, before.cart);
    assert_eq!(update.drawer, before.drawer);
}

// ============================================================================
// Input validation and formatting
// ============================================================================

#[test]
fn malformed_product_cards_are_ignored() {
    let mut page = storefront();
    for event in [
        add_to_cart("genae-01", "Sakura", "NaN"),
        add_to_cart("genae-01", "Sakura", "12.8"),
        add_to_cart("genae-01", "Sakura", "-1"),
        add_to_cart("", "Sakura", "1280"),
        add_to_cart("genae-01", " ", "1280"),
        remove_from_cart(""),
    ] {
        let update = page.dispatch(event).unwrap();
        assert!(update.rejected.is_some());
    }

    assert!(page.store().cart().is_empty());
    assert!(!page.drawer().is_open());
}

#[test]
fn configured_currency_and_locale_shape_totals() {
    let config = StorefrontConfig {
        currency: CurrencyCode::EUR,
        locale: Locale::de,
        shop_name: "GENAE".to_string(),
    };
    let mut page = Storefront::new(config).unwrap();

    let update = page.dispatch(add_to_cart("a", "A", "1234567")).unwrap();
    assert_eq!(update.cart.total, "€1.234.567");
}

#[test]
fn default_money_formatter_groups_thousands() {
    assert_eq!(MoneyFormatter::default().format(Price::new(12_345)), "NT$12,345");
}

#[test]
fn page_update_serializes_to_json() {
    let mut page = storefront();
    let update = page.dispatch(add_to_cart("genae-01", "Sakura", "1280")).unwrap();

    let json = serde_json::to_value(&update).unwrap();
    assert_eq!(json["cart"]["item_count"], 1);
    assert_eq!(json["cart"]["total"], "NT$1,280");
    assert_eq!(json["drawer"]["aria_hidden"], false);
    assert!(json["notice"].is_null());
}
