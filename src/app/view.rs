// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! On desktop the sidebar sits beside the page. On mobile it floats above
//! the page with a backdrop, or is replaced by a floating reopen button
//! when hidden. Toasts are layered on top of everything.

use super::Message;
use crate::domain::inventory::Catalogue;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::notifications::{Manager, Toast};
use crate::ui::pages::{self, Page};
use crate::ui::product_form;
use crate::ui::settings;
use crate::ui::sidebar;
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{scrollable, Container, Row, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a str,
    pub page: Page,
    pub sidebar: sidebar::State,
    pub product_form: &'a product_form::State,
    pub catalogue: &'a Catalogue,
    pub theme_mode: ThemeMode,
    pub diagnostics_events: usize,
    pub notifications: &'a Manager,
}

/// Renders the shell around the current page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let layout = ctx.sidebar.layout();

    let content = Container::new(view_page(&ctx))
        .padding(spacing::XL)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::page);

    let panel = sidebar::panel(sidebar::ViewContext {
        i18n: ctx.i18n,
        location: ctx.location,
        state: ctx.sidebar,
    })
    .map(Message::Sidebar);

    let shell: Element<'_, Message> = if layout.panel_floats() {
        let mut stack = Stack::new().push(content);
        if layout.overlay {
            stack = stack.push(sidebar::backdrop().map(Message::Sidebar));
        }
        stack = stack.push(panel);
        if layout.floating_button {
            stack = stack.push(sidebar::floating_button().map(Message::Sidebar));
        }
        stack.width(Length::Fill).height(Length::Fill).into()
    } else {
        Row::new()
            .push(panel)
            .push(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    };

    Stack::new()
        .push(shell)
        .push(Toast::view_overlay(ctx.notifications).map(Message::Notification))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_page<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match ctx.page {
        Page::AddProduct => scrollable(
            product_form::view(product_form::ViewContext {
                i18n: ctx.i18n,
                state: ctx.product_form,
            })
            .map(Message::ProductForm),
        )
        .into(),
        Page::Settings => scrollable(
            settings::view(settings::ViewContext {
                i18n: ctx.i18n,
                theme_mode: ctx.theme_mode,
                diagnostics_events: ctx.diagnostics_events,
            })
            .map(Message::Settings),
        )
        .into(),
        page => pages::view(
            page,
            pages::ViewContext {
                i18n: ctx.i18n,
                catalogue: ctx.catalogue,
                location: ctx.location,
            },
        )
        .map(Message::Page),
    }
}
