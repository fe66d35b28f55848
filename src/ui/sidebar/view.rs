// SPDX-License-Identifier: MPL-2.0
//! Sidebar rendering: the panel, the mobile backdrop and the reopen button.

use super::items::{NavItem, FOOTER_ITEMS, MENU_ITEMS};
use super::matching::link_appearance;
use super::{Message, Panel, State};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, tooltip, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Contextual data needed to render the sidebar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub location: &'a str,
    pub state: State,
}

/// Renders the panel. Returns an empty element when the panel is hidden.
pub fn panel<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let layout = ctx.state.layout();
    let Some(width) = layout.panel_width() else {
        return Space::new().into();
    };
    let collapsed = layout.panel == Panel::Narrow;

    let menu = links(&ctx, &MENU_ITEMS, collapsed);
    let footer = links(&ctx, &FOOTER_ITEMS, collapsed);

    let body = Column::new()
        .push(header(&ctx, collapsed))
        .push(Space::new().height(Length::Fixed(spacing::XL)))
        .push(menu)
        .push(Space::new().height(Length::Fill))
        .push(footer)
        .padding(spacing::MD)
        .height(Length::Fill);

    Container::new(body)
        .width(Length::Fixed(width))
        .height(Length::Fill)
        .style(styles::sidebar::panel)
        .into()
}

/// Full-window backdrop; clicking it closes the mobile panel.
pub fn backdrop<'a>() -> Element<'a, Message> {
    let shade = Container::new(Space::new())
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::sidebar::backdrop);

    mouse_area(shade).on_press(Message::OverlayPressed).into()
}

/// Top-left button reopening the hidden mobile panel.
pub fn floating_button<'a>() -> Element<'a, Message> {
    let reopen = button(Text::new("☰").size(typography::TITLE_SM))
        .on_press(Message::Toggle)
        .padding(spacing::XS)
        .style(styles::button::floating);

    Container::new(reopen)
        .padding(spacing::MD)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Top)
        .into()
}

fn header<'a>(ctx: &ViewContext<'a>, collapsed: bool) -> Element<'a, Message> {
    let glyph = if ctx.state.collapsed() { "☰" } else { "✕" };
    let toggle = button(Text::new(glyph).size(sizing::ICON_MD))
        .on_press(Message::Toggle)
        .padding(spacing::XXS)
        .style(styles::button::toggle);

    if collapsed {
        return Container::new(toggle)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into();
    }

    let logo = Container::new(Text::new(ctx.i18n.tr("sidebar-logo")).size(typography::BODY))
        .padding([spacing::XS, spacing::SM])
        .style(styles::sidebar::logo);

    Row::new()
        .push(logo)
        .push(Space::new().width(Length::Fill))
        .push(toggle)
        .align_y(Vertical::Center)
        .into()
}

fn links<'a>(
    ctx: &ViewContext<'a>,
    items: &'static [NavItem],
    collapsed: bool,
) -> Element<'a, Message> {
    items
        .iter()
        .fold(Column::new().spacing(spacing::XS), |column, item| {
            column.push(link(ctx, item, collapsed))
        })
        .into()
}

fn link<'a>(
    ctx: &ViewContext<'a>,
    item: &'static NavItem,
    collapsed: bool,
) -> Element<'a, Message> {
    let appearance = link_appearance(item.path, ctx.location, ctx.state.collapsed());
    let label = ctx.i18n.tr(item.label_key);

    let icon = Text::new(item.icon.glyph()).size(sizing::ICON_MD);
    let content: Element<'a, Message> = if collapsed {
        Container::new(icon)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into()
    } else {
        Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(icon)
            .push(Text::new(label.clone()).size(typography::BODY))
            .into()
    };

    let link_button = button(content)
        .on_press(Message::Navigate(item.path))
        .padding([spacing::XS, spacing::SM])
        .width(Length::Fill)
        .style(styles::sidebar::link(appearance));

    if collapsed {
        return styles::tooltip::styled(link_button, label, tooltip::Position::Right).into();
    }

    if appearance.has_border_indicator() {
        let indicator = Container::new(Space::new())
            .width(Length::Fixed(sizing::ACTIVE_INDICATOR))
            .height(Length::Fill)
            .style(styles::sidebar::active_indicator);
        return Row::new().push(link_button).push(indicator).into();
    }

    link_button.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(state: State, location: &str) {
        let i18n = I18n::default();
        let _ = panel(ViewContext {
            i18n: &i18n,
            location,
            state,
        });
    }

    #[test]
    fn every_layout_renders() {
        let mut state = State::new(false);
        render(state, "/");
        state.toggle();
        render(state, "/inventory/new");
        state.set_mobile(true);
        render(state, "/settings");
        state.toggle();
        render(state, "/login");

        let _ = backdrop();
        let _ = floating_button();
    }
}
