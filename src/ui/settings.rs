// SPDX-License-Identifier: MPL-2.0
//! Settings page: display language, theme mode and diagnostics export.
//!
//! Choices are reported to the application as [`Event`]s; the application
//! applies them and persists the configuration.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

/// Contextual data needed to render the settings page.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub theme_mode: ThemeMode,
    /// Number of diagnostic events currently buffered.
    pub diagnostics_events: usize,
}

/// Messages emitted by the settings page.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    LanguageSelected(LanguageIdentifier),
    ThemeModeSelected(ThemeMode),
    ExportDiagnostics,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    LanguageChanged(LanguageIdentifier),
    ThemeModeChanged(ThemeMode),
    ExportDiagnostics,
}

/// Process a settings message. Re-selecting the current value yields
/// [`Event::None`].
#[must_use]
pub fn update(message: &Message, i18n: &I18n, theme_mode: ThemeMode) -> Event {
    match message {
        Message::LanguageSelected(locale) if locale == i18n.current_locale() => Event::None,
        Message::LanguageSelected(locale) => Event::LanguageChanged(locale.clone()),
        Message::ThemeModeSelected(mode) if *mode == theme_mode => Event::None,
        Message::ThemeModeSelected(mode) => Event::ThemeModeChanged(*mode),
        Message::ExportDiagnostics => Event::ExportDiagnostics,
    }
}

/// Label for a locale: its translated name followed by the tag, or the bare
/// tag when no name is translated.
#[must_use]
pub fn language_label(i18n: &I18n, locale: &LanguageIdentifier) -> String {
    let name = i18n.tr(&format!("language-name-{locale}"));
    if name.starts_with("MISSING:") {
        locale.to_string()
    } else {
        format!("{name} ({locale})")
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let languages = i18n.available_locales().iter().fold(
        Row::new().spacing(spacing::SM),
        |row, locale| {
            let selected = locale == i18n.current_locale();
            row.push(choice(
                language_label(i18n, locale),
                selected,
                Message::LanguageSelected(locale.clone()),
            ))
        },
    );

    let themes = ThemeMode::ALL
        .iter()
        .fold(Row::new().spacing(spacing::SM), |row, mode| {
            row.push(choice(
                i18n.tr(mode.label_key()),
                *mode == ctx.theme_mode,
                Message::ThemeModeSelected(*mode),
            ))
        });

    let count = ctx.diagnostics_events.to_string();
    let recorded = i18n.tr_with_args("settings-diagnostics-count", &[("count", count.as_str())]);
    let diagnostics = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(recorded).style(styles::text::muted))
        .push(
            button(Text::new(i18n.tr("settings-diagnostics-export")))
                .on_press(Message::ExportDiagnostics)
                .padding([spacing::XS, spacing::MD])
                .style(styles::button::secondary),
        );

    Column::new()
        .spacing(spacing::LG)
        .push(Text::new(i18n.tr("nav-settings")).size(typography::TITLE_LG))
        .push(section(i18n.tr("settings-language"), languages.into()))
        .push(section(i18n.tr("settings-theme"), themes.into()))
        .push(section(i18n.tr("settings-diagnostics"), diagnostics.into()))
        .into()
}

fn section<'a>(title: String, body: Element<'a, Message>) -> Element<'a, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(title).size(typography::TITLE_SM))
        .push(body);

    Container::new(content)
        .padding(spacing::MD)
        .width(Length::Fill)
        .style(styles::container::card)
        .into()
}

fn choice<'a>(label: String, selected: bool, message: Message) -> Element<'a, Message> {
    button(Text::new(label))
        .on_press(message)
        .padding([spacing::XS, spacing::MD])
        .style(if selected {
            styles::button::primary
        } else {
            styles::button::secondary
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use unic_langid::langid;

    fn english() -> I18n {
        let mut i18n = I18n::default();
        i18n.set_locale(langid!("en-US"));
        i18n
    }

    #[test]
    fn selecting_another_language_is_reported() {
        let i18n = english();
        let event = update(
            &Message::LanguageSelected(langid!("fr")),
            &i18n,
            ThemeMode::Light,
        );
        assert_eq!(event, Event::LanguageChanged(langid!("fr")));
    }

    #[test]
    fn reselecting_current_values_is_ignored() {
        let i18n = english();
        assert_eq!(
            update(&Message::LanguageSelected(langid!("en-US")), &i18n, ThemeMode::Dark),
            Event::None
        );
        assert_eq!(
            update(&Message::ThemeModeSelected(ThemeMode::Dark), &i18n, ThemeMode::Dark),
            Event::None
        );
    }

    #[test]
    fn theme_and_export_are_reported() {
        let i18n = english();
        assert_eq!(
            update(&Message::ThemeModeSelected(ThemeMode::System), &i18n, ThemeMode::Light),
            Event::ThemeModeChanged(ThemeMode::System)
        );
        assert_eq!(
            update(&Message::ExportDiagnostics, &i18n, ThemeMode::Light),
            Event::ExportDiagnostics
        );
    }

    #[test]
    fn language_label_uses_translated_name() {
        let i18n = english();
        assert_eq!(language_label(&i18n, &langid!("fr")), "Français (fr)");
        assert_eq!(language_label(&i18n, &langid!("de")), "de");
    }

    #[test]
    fn view_renders() {
        let i18n = english();
        let _ = view(ViewContext {
            i18n: &i18n,
            theme_mode: ThemeMode::System,
            diagnostics_events: 3,
        });
    }
}
