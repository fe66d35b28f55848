// SPDX-License-Identifier: MPL-2.0
//! Sidebar panel, link and backdrop styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use crate::ui::sidebar::LinkAppearance;
use iced::widget::{button, container};
use iced::{Background, Border, Color, Theme};

/// The panel surface.
pub fn panel(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(theme.extended_palette().background.base.color)),
        shadow: shadow::LG,
        ..Default::default()
    }
}

/// Semi-transparent backdrop behind the expanded mobile panel.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..palette::BLACK
        })),
        ..Default::default()
    }
}

/// The "LOGO" badge at the top of the expanded panel.
pub fn logo(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::LOGO_BACKGROUND)),
        text_color: Some(palette::LOGO_TEXT),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Thin bar drawn at the right edge of the active link.
pub fn active_indicator(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_500)),
        ..Default::default()
    }
}

/// Link style for the given appearance.
pub fn link(appearance: LinkAppearance) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let ext = theme.extended_palette();
        let rounded = Border {
            radius: radius::MD.into(),
            ..Default::default()
        };

        if appearance.is_active() {
            return button::Style {
                background: Some(Background::Color(palette::PRIMARY_50)),
                text_color: palette::PRIMARY_500,
                border: rounded,
                shadow: shadow::NONE,
                snap: true,
            };
        }

        match status {
            button::Status::Hovered | button::Status::Pressed => button::Style {
                background: Some(Background::Color(ext.background.weak.color)),
                text_color: palette::PRIMARY_600,
                border: rounded,
                shadow: shadow::NONE,
                snap: true,
            },
            button::Status::Active | button::Status::Disabled => button::Style {
                background: None,
                text_color: ext.background.base.text,
                border: rounded,
                shadow: shadow::NONE,
                snap: true,
            },
        }
    }
}
