//! Cart drawer visibility.
//!
//! The drawer is a slide-in panel. Its state is mirrored onto two
//! attributes: `aria-hidden` on the panel and `aria-expanded` on the toggle
//! button. Both always agree.

use serde::Serialize;

/// Drawer visibility state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawerState {
    Open,
    #[default]
    Closed,
}

/// Attribute pair written to the page for the drawer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DrawerAttributes {
    /// `aria-hidden` on the cart panel.
    pub aria_hidden: bool,
    /// `aria-expanded` on the cart toggle button.
    pub toggle_aria_expanded: bool,
}

/// The cart drawer. Starts closed.
#[derive(Debug, Clone, Copy, Default)]
pub struct CartDrawer {
    state: DrawerState,
}

impl CartDrawer {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: DrawerState::Closed,
        }
    }

    #[must_use]
    pub const fn state(&self) -> DrawerState {
        self.state
    }

    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.state, DrawerState::Open)
    }

    /// Flip between open and closed. Used by both the toggle and the close
    /// button.
    pub fn toggle(&mut self) -> DrawerState {
        self.state = match self.state {
            DrawerState::Open => DrawerState::Closed,
            DrawerState::Closed => DrawerState::Open,
        };
        tracing::debug!(state = ?self.state, "Cart drawer toggled");
        self.state
    }

    /// Open the drawer if it is closed. Returns whether the state changed.
    pub fn open(&mut self) -> bool {
        if self.is_open() {
            return false;
        }
        self.toggle();
        true
    }

    /// Close the drawer if it is open. Returns whether the state changed.
    pub fn close(&mut self) -> bool {
        if !self.is_open() {
            return false;
        }
        self.toggle();
        true
    }

    #[must_use]
    pub const fn attributes(&self) -> DrawerAttributes {
        let open = self.is_open();
        DrawerAttributes {
            aria_hidden: !open,
            toggle_aria_expanded: open,
        }
    }
}
