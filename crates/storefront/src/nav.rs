//! Mobile navigation menu toggle.

use serde::Serialize;

/// Attribute pair written to the page for the navigation menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavAttributes {
    /// `aria-expanded` on the menu toggle button.
    pub toggle_aria_expanded: bool,
    /// Whether the `is-open` class is set on the link list.
    pub list_is_open: bool,
}

/// The collapsible navigation menu. Starts collapsed.
#[derive(Debug, Clone, Copy, Default)]
pub struct NavMenu {
    expanded: bool,
}

impl NavMenu {
    #[must_use]
    pub const fn new() -> Self {
        Self { expanded: false }
    }

    #[must_use]
    pub const fn is_expanded(&self) -> bool {
        self.expanded
    }

    /// Flip between expanded and collapsed.
    pub fn toggle(&mut self) -> bool {
        self.expanded = !self.expanded;
        tracing::debug!(expanded = self.expanded, "Navigation toggled");
        self.expanded
    }

    /// A navigation link was followed: collapse the menu if it is open.
    /// Returns whether the state changed.
    pub fn link_followed(&mut self) -> bool {
        if !self.expanded {
            return false;
        }
        self.expanded = false;
        true
    }

    #[must_use]
    pub const fn attributes(&self) -> NavAttributes {
        NavAttributes {
            toggle_aria_expanded: self.expanded,
            list_is_open: self.expanded,
        }
    }
}
