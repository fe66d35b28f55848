// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers mutate state through an [`UpdateContext`] and report to the user
//! by enqueueing notifications. Scheduling the expiry timers of those
//! notifications is done once per update by the caller.

use super::{paths, Message};
use crate::config::{self, Config};
use crate::diagnostics::{
    AppStateEvent, DiagnosticsCollector, DiagnosticsHandle, ErrorEvent, ErrorType, UserAction,
};
use crate::domain::inventory::{Catalogue, Field};
use crate::domain::navigation::Location;
use crate::domain::ui::MobileBreakpoint;
use crate::error::{Error, ProductError};
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{Manager, NotificationMessage};
use crate::ui::pages;
use crate::ui::product_form::{self, Event as ProductFormEvent};
use crate::ui::settings::{self, Event as SettingsEvent};
use crate::ui::sidebar::{self, Event as SidebarEvent};
use crate::ui::theming::ThemeMode;
use iced::{Size, Task};
use std::path::PathBuf;

/// Where the product form leads after a submit or discard.
const INVENTORY_PATH: &str = "/inventory";

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub i18n: &'a mut I18n,
    pub config: &'a mut Config,
    pub config_dir: Option<&'a PathBuf>,
    pub data_dir: Option<&'a PathBuf>,
    pub location: &'a mut Location,
    pub sidebar: &'a mut sidebar::State,
    pub breakpoint: MobileBreakpoint,
    pub product_form: &'a mut product_form::State,
    pub catalogue: &'a mut Catalogue,
    pub theme_mode: &'a mut ThemeMode,
    pub notifications: &'a mut Manager,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

impl UpdateContext<'_> {
    fn handle(&self) -> DiagnosticsHandle {
        self.diagnostics.handle()
    }

    /// Changes the current location and records the navigation.
    fn navigate(&mut self, path: &str) {
        if self.location.as_str() == path {
            return;
        }
        *self.location = Location::new(path);
        self.handle().log_action(UserAction::Navigate {
            path: path.to_string(),
        });
    }

    /// Writes the configuration, reporting failures as an error toast.
    fn persist_config(&mut self) {
        // unit tests never write the user's settings
        if cfg!(test) {
            return;
        }

        match config::save_with_override(self.config, self.config_dir.cloned()) {
            Ok(()) => self.handle().log_state(AppStateEvent::ConfigSaved),
            Err(error) => {
                self.handle()
                    .log_error(ErrorEvent::new(ErrorType::ConfigSave, error.to_string()));
                let message = self.i18n.tr("notification-config-save-error");
                self.notifications.error(message, None);
            }
        }
    }
}

/// Handles sidebar toggles and link clicks.
pub fn handle_sidebar_message(
    ctx: &mut UpdateContext<'_>,
    message: sidebar::Message,
) -> Task<Message> {
    match sidebar::update(message, ctx.sidebar) {
        SidebarEvent::Toggled { collapsed } => {
            ctx.handle()
                .log_action(UserAction::ToggleSidebar { collapsed });
        }
        SidebarEvent::Navigate(path) => ctx.navigate(path),
    }
    Task::none()
}

/// Handles in-page links.
pub fn handle_page_message(ctx: &mut UpdateContext<'_>, message: pages::Message) -> Task<Message> {
    match message {
        pages::Message::Navigate(path) => ctx.navigate(path),
    }
    Task::none()
}

/// Handles the product form and adds accepted products to the catalogue.
pub fn handle_product_form_message(
    ctx: &mut UpdateContext<'_>,
    message: product_form::Message,
) -> Task<Message> {
    match product_form::update(ctx.product_form, message) {
        ProductFormEvent::None => {}
        ProductFormEvent::Submitted(product) => {
            if ctx.catalogue.contains_sku(&product.sku) {
                ctx.product_form.flag(Field::ProductId);
                ctx.handle()
                    .log_action(UserAction::SubmitProduct { accepted: false });
                let error = ProductError::DuplicateSku(product.sku.clone());
                let message = ctx
                    .i18n
                    .tr_with_args(error.i18n_key(), &[("sku", product.sku.as_str())]);
                ctx.notifications.error(message, None);
            } else {
                let message = ctx.i18n.tr_with_args(
                    "notification-product-added",
                    &[("name", product.name.as_str())],
                );
                ctx.catalogue.add(product);
                ctx.product_form.reset();
                ctx.handle()
                    .log_action(UserAction::SubmitProduct { accepted: true });
                ctx.notifications.success(message, None);
                ctx.navigate(INVENTORY_PATH);
            }
        }
        ProductFormEvent::Rejected(error) => {
            ctx.handle()
                .log_action(UserAction::SubmitProduct { accepted: false });
            let count = match &error {
                ProductError::Validation { fields } => fields.to_string(),
                ProductError::DuplicateSku(_) => String::new(),
            };
            let message = ctx
                .i18n
                .tr_with_args(error.i18n_key(), &[("count", count.as_str())]);
            ctx.notifications.error(message, None);
        }
        ProductFormEvent::Discarded => {
            ctx.handle().log_action(UserAction::DiscardProduct);
            ctx.navigate(INVENTORY_PATH);
        }
    }
    Task::none()
}

/// Handles settings changes and diagnostics export.
pub fn handle_settings_message(
    ctx: &mut UpdateContext<'_>,
    message: &settings::Message,
) -> Task<Message> {
    match settings::update(message, ctx.i18n, *ctx.theme_mode) {
        SettingsEvent::None => {}
        SettingsEvent::LanguageChanged(locale) => {
            if ctx.i18n.set_locale(locale.clone()) {
                ctx.handle().log_action(UserAction::ChangeLanguage {
                    locale: locale.to_string(),
                });
                ctx.config.general.language = Some(locale.to_string());
                ctx.persist_config();
            }
        }
        SettingsEvent::ThemeModeChanged(mode) => {
            *ctx.theme_mode = mode;
            ctx.handle().log_action(UserAction::ChangeTheme {
                mode: mode.as_str().to_string(),
            });
            ctx.config.general.theme_mode = mode;
            ctx.persist_config();
        }
        SettingsEvent::ExportDiagnostics => export_diagnostics(ctx),
    }
    Task::none()
}

fn export_diagnostics(ctx: &mut UpdateContext<'_>) {
    ctx.handle().log_action(UserAction::ExportDiagnostics);

    let directory = ctx.data_dir.cloned().or_else(paths::get_app_data_dir);
    let result = match directory {
        Some(dir) => ctx.diagnostics.export_to_dir(&dir),
        None => Err(Error::Diagnostics("no data directory available".to_string())),
    };

    match result {
        Ok(path) => {
            let path = path.display().to_string();
            let message = ctx
                .i18n
                .tr_with_args("notification-diagnostics-exported", &[("path", path.as_str())]);
            ctx.notifications.success(message, None);
        }
        Err(error) => {
            ctx.handle()
                .log_error(ErrorEvent::new(ErrorType::Export, error.to_string()));
            let message = ctx.i18n.tr("notification-diagnostics-export-error");
            ctx.notifications.error(message, None);
        }
    }
}

/// Applies the mobile breakpoint to the new window width.
pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: Size) -> Task<Message> {
    let mobile = ctx.breakpoint.is_mobile(size.width);
    if ctx.sidebar.set_mobile(mobile) {
        ctx.handle()
            .log_state(AppStateEvent::LayoutChanged { mobile });
    }
    Task::none()
}

/// Removes a dismissed or expired notification.
pub fn handle_notification_message(
    ctx: &mut UpdateContext<'_>,
    message: &NotificationMessage,
) -> Task<Message> {
    let removed = ctx.notifications.handle_message(message);
    if removed && matches!(message, NotificationMessage::Dismiss(_)) {
        ctx.handle().log_action(UserAction::DismissNotification);
    }
    Task::none()
}
