//! Menu open/close resolution.
//!
//! The page has two unrelated menu affordances: the header nav menu behind
//! `.mobile-menu-btn`, and the overlay mobile nav behind `.mobile-nav-toggle`
//! (which also swaps its bars/close icon). They are toggled, dismissed and
//! closed independently; nothing here merges them.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use crate::consts::{CLASS_ICON_BARS, CLASS_ICON_CLOSE};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuKind {
    /// `.nav-menu`, opened by `.mobile-menu-btn`. Its open flag lives in
    /// [`crate::state::PageState`].
    NavMenu,
    /// `.mobile-nav-menu`, opened by `.mobile-nav-toggle`. Its open state is
    /// read back from the menu's `active` class.
    MobileNav,
}

impl MenuKind {
    pub const ALL: [Self; 2] = [Self::NavMenu, Self::MobileNav];

    /// Whether the trigger carries a bars/close icon to swap.
    #[must_use]
    pub fn swaps_icon(self) -> bool {
        matches!(self, Self::MobileNav)
    }
}

/// Forced state if given, otherwise the inverse of `current`.
#[must_use]
pub fn resolve_open(current: bool, force: Option<bool>) -> bool {
    force.unwrap_or(!current)
}

/// DOM state for a menu in a given open state. The `active` class and
/// `aria-expanded` always move together.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuView {
    pub open: bool,
}

impl MenuView {
    #[must_use]
    pub fn new(open: bool) -> Self {
        Self { open }
    }

    #[must_use]
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }

    /// Icon classes as `(class, on)` pairs.
    #[must_use]
    pub fn icon_classes(self) -> [(&'static str, bool); 2] {
        [(CLASS_ICON_BARS, !self.open), (CLASS_ICON_CLOSE, self.open)]
    }
}

/// Where a document click landed relative to one menu.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickHit {
    pub in_menu: bool,
    pub in_trigger: bool,
}

/// Whether a document click should close an open menu.
///
/// Clicks on the trigger are left to the trigger's own toggle listener.
#[must_use]
pub fn dismisses(open: bool, hit: ClickHit) -> bool {
    open && !hit.in_menu && !hit.in_trigger
}
