// SPDX-License-Identifier: MPL-2.0
//! Navigation sidebar.
//!
//! The sidebar highlights the link matching the current location and can be
//! collapsed to an icon rail (desktop) or hidden behind a floating button
//! (mobile). It never owns the collapse flag: the application holds one
//! [`State`] and every surface (panel toggle, backdrop, floating button)
//! reads and updates that same value through [`update`].

mod items;
mod layout;
mod matching;
mod view;

pub use items::{all_items, NavIcon, NavItem, FOOTER_ITEMS, MENU_ITEMS};
pub use layout::{Layout, Panel};
pub use matching::{is_active, link_appearance, LinkAppearance};
pub use view::{backdrop, floating_button, panel, ViewContext};

/// Shared collapse/mobile state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct State {
    collapsed: bool,
    mobile: bool,
    /// Collapse state to restore when leaving the mobile layout.
    desktop_collapsed: bool,
}

impl Default for State {
    fn default() -> Self {
        Self::new(false)
    }
}

impl State {
    /// Desktop state, optionally starting as a narrow rail.
    #[must_use]
    pub fn new(start_collapsed: bool) -> Self {
        Self {
            collapsed: start_collapsed,
            mobile: false,
            desktop_collapsed: start_collapsed,
        }
    }

    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    #[must_use]
    pub fn mobile(&self) -> bool {
        self.mobile
    }

    /// Flips `collapsed`; `mobile` is untouched.
    pub fn toggle(&mut self) {
        self.collapsed = !self.collapsed;
        if !self.mobile {
            self.desktop_collapsed = self.collapsed;
        }
    }

    /// Applies a layout change. Entering mobile hides the panel; leaving it
    /// restores the last desktop collapse state.
    ///
    /// Returns `true` if the mobile flag changed.
    pub fn set_mobile(&mut self, mobile: bool) -> bool {
        if mobile == self.mobile {
            return false;
        }
        self.mobile = mobile;
        self.collapsed = if mobile {
            true
        } else {
            self.desktop_collapsed
        };
        true
    }

    #[must_use]
    pub fn layout(&self) -> Layout {
        Layout::of(self)
    }
}

/// Messages emitted by the sidebar surfaces.
#[derive(Debug, Clone)]
pub enum Message {
    /// Panel toggle or floating reopen button.
    Toggle,
    /// Click on the mobile backdrop.
    OverlayPressed,
    Navigate(&'static str),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Toggled { collapsed: bool },
    Navigate(&'static str),
}

/// Process a sidebar message and return the corresponding event.
pub fn update(message: Message, state: &mut State) -> Event {
    match message {
        Message::Toggle | Message::OverlayPressed => {
            state.toggle();
            Event::Toggled {
                collapsed: state.collapsed,
            }
        }
        Message::Navigate(path) => {
            if state.mobile && !state.collapsed {
                state.toggle();
            }
            Event::Navigate(path)
        }
    }
}
