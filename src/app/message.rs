// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::notifications;
use crate::ui::pages;
use crate::ui::product_form;
use crate::ui::settings;
use crate::ui::sidebar;
use iced::Size;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Sidebar(sidebar::Message),
    Page(pages::Message),
    ProductForm(product_form::Message),
    Settings(settings::Message),
    Notification(notifications::NotificationMessage),
    /// The main window was resized.
    WindowResized(Size),
    /// Periodic drain of pending diagnostic events.
    DiagnosticsTick,
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional data directory override (for diagnostics reports).
    /// Takes precedence over `SHELFWISE_DATA_DIR` environment variable.
    pub data_dir: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `SHELFWISE_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Location to open on startup, `/` when absent.
    pub route: Option<String>,
}
