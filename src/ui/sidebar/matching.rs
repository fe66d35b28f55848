// SPDX-License-Identifier: MPL-2.0
//! Active-link detection and per-link appearance.

/// Whether `path` should be highlighted for the current `location`.
///
/// The root path only matches itself; every other path matches its own
/// location and anything below it. Paths that are empty or not rooted at
/// `/` never match.
///
/// ```
/// use shelfwise::ui::sidebar::is_active;
///
/// assert!(is_active("/", "/"));
/// assert!(!is_active("/", "/inventory"));
/// assert!(is_active("/inventory", "/inventory/new"));
/// assert!(!is_active("", "/inventory"));
/// ```
#[must_use]
pub fn is_active(path: &str, location: &str) -> bool {
    if !path.starts_with('/') {
        return false;
    }
    if path == "/" {
        location == "/"
    } else {
        location.starts_with(path)
    }
}

/// How a link is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkAppearance {
    /// Tinted background and accent text; the right-edge indicator only
    /// while the panel is expanded.
    Active { border_indicator: bool },
    Inactive,
}

impl LinkAppearance {
    #[must_use]
    pub fn is_active(self) -> bool {
        matches!(self, LinkAppearance::Active { .. })
    }

    #[must_use]
    pub fn has_border_indicator(self) -> bool {
        matches!(
            self,
            LinkAppearance::Active {
                border_indicator: true
            }
        )
    }
}

/// Appearance of the link to `path` given the location and collapse flag.
#[must_use]
pub fn link_appearance(path: &str, location: &str, collapsed: bool) -> LinkAppearance {
    if is_active(path, location) {
        LinkAppearance::Active {
            border_indicator: !collapsed,
        }
    } else {
        LinkAppearance::Inactive
    }
}
