//! Storefront page controller.
//!
//! Receives [`UiEvent`]s, validates their raw attributes, applies them to the
//! cart store, drawer and navigation menu, and returns a [`PageUpdate`]
//! describing everything the page must show afterwards.
//!
//! The renderer is subscribed to the cart store, so every cart mutation is
//! re-rendered before the update is assembled. Events that do not touch the
//! cart reuse the last rendered fragments.

use std::cell::RefCell;
use std::rc::Rc;

use genae_core::{ProductId, ProductInput};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::cart::CartStore;
use crate::checkout::{self, Notice};
use crate::config::StorefrontConfig;
use crate::drawer::{CartDrawer, DrawerAttributes};
use crate::error::Result;
use crate::nav::{NavAttributes, NavMenu};
use crate::view::{CartRenderer, MoneyFormatter, RenderedCart};

/// A click on the page, carrying raw markup attributes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum UiEvent {
    /// "Add to cart" on a product card (`data-id`, `data-name`, `data-price`).
    AddToCart {
        id: String,
        name: String,
        price: String,
    },
    /// "Remove" on a cart row (`data-id`).
    RemoveFromCart { id: String },
    /// Cart toggle button.
    ToggleCart,
    /// Close button inside the drawer.
    CloseCart,
    /// Checkout button.
    Checkout,
    /// Mobile navigation toggle.
    ToggleNav,
    /// A link inside the navigation menu.
    NavLinkClicked,
}

/// Everything the page shows after an event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageUpdate {
    pub cart: RenderedCart,
    pub drawer: DrawerAttributes,
    pub nav: NavAttributes,
    /// Blocking message to show, if any.
    pub notice: Option<Notice>,
    /// Why the event's input was ignored, if it was.
    pub rejected: Option<String>,
}

type PendingRender = Rc<RefCell<Option<askama::Result<RenderedCart>>>>;

/// The single-page storefront: cart store, drawer and navigation menu.
#[derive(Debug)]
pub struct Storefront {
    config: StorefrontConfig,
    store: CartStore,
    drawer: CartDrawer,
    nav: NavMenu,
    pending: PendingRender,
    rendered: RenderedCart,
}

impl Storefront {
    /// Build the page with an empty cart, a closed drawer and a collapsed
    /// menu.
    ///
    /// # Errors
    ///
    /// Returns an error if the initial empty cart fails to render.
    pub fn new(config: StorefrontConfig) -> Result<Self> {
        let renderer = CartRenderer::new(MoneyFormatter::from_config(&config));
        let mut store = CartStore::new();
        let rendered = renderer.render(store.cart())?;

        let pending: PendingRender = Rc::new(RefCell::new(None));
        let sink = Rc::clone(&pending);
        store.subscribe(move |cart| {
            *sink.borrow_mut() = Some(renderer.render(cart));
        });

        Ok(Self {
            config,
            store,
            drawer: CartDrawer::new(),
            nav: NavMenu::new(),
            pending,
            rendered,
        })
    }

    #[must_use]
    pub const fn store(&self) -> &CartStore {
        &self.store
    }

    #[must_use]
    pub const fn drawer(&self) -> &CartDrawer {
        &self.drawer
    }

    #[must_use]
    pub const fn nav(&self) -> &NavMenu {
        &self.nav
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    /// Current page state with no notice attached.
    #[must_use]
    pub fn snapshot(&self) -> PageUpdate {
        self.update(None, None)
    }

    /// Handle one event to completion.
    ///
    /// # Errors
    ///
    /// Returns an error if the cart fails to re-render.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, event: UiEvent) -> Result<PageUpdate> {
        let mut notice = None;
        let mut rejected = None;

        match event {
            UiEvent::AddToCart { id, name, price } => {
                match ProductInput::parse(&id, &name, &price) {
                    Ok(input) => {
                        self.store.add(&input);
                        self.drawer.open();
                    }
                    Err(e) => {
                        tracing::warn!(%id, %price, error = %e, "Ignoring invalid product");
                        rejected = Some(e.to_string());
                    }
                }
            }
            UiEvent::RemoveFromCart { id } => match ProductId::parse(&id) {
                Ok(id) => {
                    self.store.remove(&id);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring remove without product id");
                    rejected = Some(e.to_string());
                }
            },
            UiEvent::ToggleCart | UiEvent::CloseCart => {
                self.drawer.toggle();
            }
            UiEvent::Checkout => {
                notice = Some(checkout::checkout(
                    &mut self.store,
                    &mut self.drawer,
                    &self.config.shop_name,
                ));
            }
            UiEvent::ToggleNav => {
                self.nav.toggle();
            }
            UiEvent::NavLinkClicked => {
                self.nav.link_followed();
            }
        }

        self.apply_pending_render()?;
        Ok(self.update(notice, rejected))
    }

    fn apply_pending_render(&mut self) -> Result<()> {
        let pending = self.pending.borrow_mut().take();
        if let Some(result) = pending {
            self.rendered = result?;
        }
        Ok(())
    }

    fn update(&self, notice: Option<Notice>, rejected: Option<String>) -> PageUpdate {
        PageUpdate {
            cart: self.rendered.clone(),
            drawer: self.drawer.attributes(),
            nav: self.nav.attributes(),
            notice,
            rejected,
        }
    }
}
