// SPDX-License-Identifier: MPL-2.0
//! Which sidebar surfaces are drawn for a given state.
//!
//! | mobile | collapsed | panel    | overlay | floating button |
//! |--------|-----------|----------|---------|-----------------|
//! | no     | no        | expanded | no      | no              |
//! | no     | yes       | narrow   | no      | no              |
//! | yes    | no        | expanded | yes     | no              |
//! | yes    | yes       | hidden   | no      | yes             |

use super::State;
use crate::ui::design_tokens::sizing;

/// How the panel itself is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    /// Full width with labels.
    Expanded,
    /// Icon-only rail with centered content.
    Narrow,
    /// Off screen.
    Hidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub panel: Panel,
    /// Backdrop over the page content; clicking it closes the panel.
    pub overlay: bool,
    /// Reopen button in the top-left corner.
    pub floating_button: bool,
}

impl Layout {
    #[must_use]
    pub fn of(state: &State) -> Self {
        match (state.mobile(), state.collapsed()) {
            (false, false) => Self {
                panel: Panel::Expanded,
                overlay: false,
                floating_button: false,
            },
            (false, true) => Self {
                panel: Panel::Narrow,
                overlay: false,
                floating_button: false,
            },
            (true, false) => Self {
                panel: Panel::Expanded,
                overlay: true,
                floating_button: false,
            },
            (true, true) => Self {
                panel: Panel::Hidden,
                overlay: false,
                floating_button: true,
            },
        }
    }

    /// Panel width in logical pixels, `None` when hidden.
    #[must_use]
    pub fn panel_width(&self) -> Option<f32> {
        match self.panel {
            Panel::Expanded => Some(sizing::SIDEBAR_EXPANDED),
            Panel::Narrow => Some(sizing::SIDEBAR_NARROW),
            Panel::Hidden => None,
        }
    }

    #[must_use]
    pub fn labels_visible(&self) -> bool {
        self.panel == Panel::Expanded
    }

    /// Whether the sidebar surfaces float above the page instead of pushing
    /// it aside. True for both mobile rows of the table.
    #[must_use]
    pub fn panel_floats(&self) -> bool {
        self.overlay || self.floating_button
    }
}
