// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the dashboard pages,
//! the sidebar and the notification overlay.
//!
//! The `App` struct wires together the domains (navigation, inventory,
//! localization, settings) and translates messages into side effects like
//! config persistence, diagnostics export or notification timers.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::diagnostics::{AppStateEvent, DiagnosticsCollector, WarningEvent, WarningType};
use crate::domain::inventory::Catalogue;
use crate::domain::navigation::Location;
use crate::domain::ui::MobileBreakpoint;
use crate::i18n::fluent::I18n;
use crate::ui::notifications::{self, NotificationMessage};
use crate::ui::pages::Page;
use crate::ui::product_form;
use crate::ui::sidebar;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;

/// Root Iced application state.
pub struct App {
    i18n: I18n,
    config: Config,
    config_dir: Option<PathBuf>,
    data_dir: Option<PathBuf>,
    location: Location,
    sidebar: sidebar::State,
    breakpoint: MobileBreakpoint,
    product_form: product_form::State,
    catalogue: Catalogue,
    theme_mode: ThemeMode,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("location", &self.location)
            .field("sidebar", &self.sidebar)
            .field("notifications", &self.notifications.len())
            .finish_non_exhaustive()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: f32 = 720.0;
pub const WINDOW_DEFAULT_WIDTH: f32 = 1100.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
pub const MIN_WINDOW_WIDTH: f32 = 360.0;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot; flags are consumed on the first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Initializes application state from the launcher `Flags`.
    ///
    /// A settings file that cannot be read falls back to defaults and shows
    /// a warning toast.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config_dir = flags.config_dir.map(PathBuf::from);
        let data_dir = flags.data_dir.map(PathBuf::from);
        let (config, config_warning) = config::load_with_override(config_dir.clone());
        let i18n = I18n::new(flags.lang, &config);

        let diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());
        let mut notifications = notifications::Manager::with_settings(
            config.notifications.default_duration(),
            config.notifications.capacity(),
        );
        notifications.set_diagnostics(diagnostics.handle());

        let handle = diagnostics.handle();
        handle.log_state(AppStateEvent::Started {
            locale: i18n.current_locale().to_string(),
        });
        if let Some(key) = config_warning {
            handle.log_warning(WarningEvent::new(WarningType::ConfigLoad, key.clone()));
            notifications.warning(i18n.tr(&key), None);
        }

        let breakpoint = config.sidebar.breakpoint();
        let mut sidebar = sidebar::State::new(config.sidebar.start_collapsed);
        // First frame follows the initial window size; later sizes arrive as resizes
        sidebar.set_mobile(breakpoint.is_mobile(window_settings().size.width));

        let mut app = App {
            location: flags.route.map_or_else(Location::default, Location::new),
            sidebar,
            breakpoint,
            product_form: product_form::State::default(),
            catalogue: Catalogue::new(),
            theme_mode: config.general.theme_mode,
            i18n,
            config,
            config_dir,
            data_dir,
            notifications,
            diagnostics,
        };

        let task = app.schedule_expiries();
        (app, task)
    }

    #[must_use]
    pub fn location(&self) -> &Location {
        &self.location
    }

    #[must_use]
    pub fn page(&self) -> Page {
        Page::from_location(self.location.as_str())
    }

    #[must_use]
    pub fn sidebar(&self) -> &sidebar::State {
        &self.sidebar
    }

    #[must_use]
    pub fn notifications(&self) -> &notifications::Manager {
        &self.notifications
    }

    #[must_use]
    pub fn catalogue(&self) -> &Catalogue {
        &self.catalogue
    }

    #[must_use]
    pub fn product_form(&self) -> &product_form::State {
        &self.product_form
    }

    #[must_use]
    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    #[must_use]
    pub fn theme_mode(&self) -> ThemeMode {
        self.theme_mode
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }

    pub fn title(&self) -> String {
        let app_name = self.i18n.tr("window-title");
        let page = self.i18n.tr(self.page().title_key());
        format!("{page} - {app_name}")
    }

    pub fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_diagnostics_subscription(),
        ])
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            i18n: &mut self.i18n,
            config: &mut self.config,
            config_dir: self.config_dir.as_ref(),
            data_dir: self.data_dir.as_ref(),
            location: &mut self.location,
            sidebar: &mut self.sidebar,
            breakpoint: self.breakpoint,
            product_form: &mut self.product_form,
            catalogue: &mut self.catalogue,
            theme_mode: &mut self.theme_mode,
            notifications: &mut self.notifications,
            diagnostics: &mut self.diagnostics,
        };

        let task = match message {
            Message::Sidebar(sidebar_message) => {
                update::handle_sidebar_message(&mut ctx, sidebar_message)
            }
            Message::Page(page_message) => update::handle_page_message(&mut ctx, page_message),
            Message::ProductForm(form_message) => {
                update::handle_product_form_message(&mut ctx, form_message)
            }
            Message::Settings(settings_message) => {
                update::handle_settings_message(&mut ctx, &settings_message)
            }
            Message::Notification(notification_message) => {
                update::handle_notification_message(&mut ctx, &notification_message)
            }
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::DiagnosticsTick => {
                ctx.diagnostics.process_pending();
                Task::none()
            }
        };

        Task::batch([task, self.schedule_expiries()])
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            location: self.location.as_str(),
            page: self.page(),
            sidebar: self.sidebar,
            product_form: &self.product_form,
            catalogue: &self.catalogue,
            theme_mode: self.theme_mode,
            diagnostics_events: self.diagnostics.len(),
            notifications: &self.notifications,
        })
    }

    /// Turns every newly scheduled expiry into a timer task.
    fn schedule_expiries(&mut self) -> Task<Message> {
        Task::batch(self.notifications.take_scheduled().into_iter().map(|expiry| {
            Task::perform(expiry.elapsed(), |id| {
                Message::Notification(NotificationMessage::Expired(id))
            })
        }))
    }
}
