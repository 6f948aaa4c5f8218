//! Navigation menu state and keyboard-focus styling.

use tracing::debug;

use super::scroll::{ScrollEffects, ScrollSnapshot};

/// The collapsible menu shown on small screens.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MobileMenu {
    open: bool,
}

impl MobileMenu {
    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flips the menu and returns whether it is now open.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Closes the menu.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Icon class of the toggle button.
    pub fn icon(&self) -> &'static str {
        if self.open {
            "fa-times"
        } else {
            "fa-bars"
        }
    }
}

/// Navigation links and which one is highlighted.
#[derive(Debug, Clone, Default)]
pub struct Navigation {
    menu: MobileMenu,
    links: Vec<String>,
    active: Option<String>,
}

impl Navigation {
    /// Creates navigation over link `href`s.
    pub fn new(links: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            menu: MobileMenu::default(),
            links: links.into_iter().map(Into::into).collect(),
            active: None,
        }
    }

    /// The mobile menu.
    pub fn menu(&self) -> &MobileMenu {
        &self.menu
    }

    /// Mutable access to the mobile menu.
    pub fn menu_mut(&mut self) -> &mut MobileMenu {
        &mut self.menu
    }

    /// The highlighted link.
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// A link was clicked. In-page `#id` links close the menu, become
    /// active and return the scroll target; other links are left to the
    /// browser.
    pub fn click(&mut self, href: &str, effects: &ScrollEffects) -> Option<f64> {
        let id = href.strip_prefix('#')?;
        self.menu.close();
        self.active = Some(href.to_string());
        let target = effects.anchor_target(id);
        debug!(href = %href, ?target, "anchor navigation");
        target
    }

    /// Highlights the link of the section under the scroll position, or
    /// none when no link points at it.
    pub fn sync(&mut self, snapshot: &ScrollSnapshot) {
        self.active = snapshot
            .active_section
            .as_ref()
            .map(|id| format!("#{id}"))
            .filter(|href| self.links.contains(href));
    }
}

/// Whether focus outlines are shown, which only happens while the user
/// navigates with the keyboard.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FocusMode {
    keyboard: bool,
}

impl FocusMode {
    /// Whether focus outlines are shown.
    pub fn is_keyboard(&self) -> bool {
        self.keyboard
    }

    /// A key went down. Tab switches to keyboard navigation.
    pub fn key_down(&mut self, key: &str) {
        if key == "Tab" {
            self.keyboard = true;
        }
    }

    /// A mouse button went down.
    pub fn mouse_down(&mut self) {
        self.keyboard = false;
    }
}
