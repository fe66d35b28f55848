// SPDX-License-Identifier: MPL-2.0
//! Static navigation entries.

/// Icon shown next to a navigation label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavIcon {
    Dashboard,
    Inventory,
    Reports,
    Suppliers,
    Sales,
    Store,
    Employees,
    Settings,
    Logout,
}

impl NavIcon {
    /// Text glyph rendered for the icon.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            NavIcon::Dashboard => "▦",
            NavIcon::Inventory => "▤",
            NavIcon::Reports => "▧",
            NavIcon::Suppliers => "⇄",
            NavIcon::Sales => "◈",
            NavIcon::Store => "⌂",
            NavIcon::Employees => "☺",
            NavIcon::Settings => "⚙",
            NavIcon::Logout => "⏻",
        }
    }
}

/// One link of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub icon: NavIcon,
    /// i18n key of the visible label.
    pub label_key: &'static str,
    pub path: &'static str,
}

const fn item(icon: NavIcon, label_key: &'static str, path: &'static str) -> NavItem {
    NavItem {
        icon,
        label_key,
        path,
    }
}

/// Main menu, top of the panel.
pub const MENU_ITEMS: [NavItem; 7] = [
    item(NavIcon::Dashboard, "nav-dashboard", "/"),
    item(NavIcon::Inventory, "nav-inventory", "/inventory"),
    item(NavIcon::Reports, "nav-reports", "/reports"),
    item(NavIcon::Suppliers, "nav-suppliers", "/suppliers"),
    item(NavIcon::Sales, "nav-sales", "/sales"),
    item(NavIcon::Store, "nav-manage-store", "/manage-store"),
    item(NavIcon::Employees, "nav-employees", "/employees"),
];

/// Footer, bottom of the panel.
pub const FOOTER_ITEMS: [NavItem; 2] = [
    item(NavIcon::Settings, "nav-settings", "/settings"),
    item(NavIcon::Logout, "nav-logout", "/login"),
];

/// Every item, menu first.
pub fn all_items() -> impl Iterator<Item = &'static NavItem> {
    MENU_ITEMS.iter().chain(FOOTER_ITEMS.iter())
}
