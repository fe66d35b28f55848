// SPDX-License-Identifier: MPL-2.0
//! Text styles.

use crate::ui::design_tokens::palette;
use iced::widget::text;
use iced::Theme;

/// Field validation messages.
pub fn error(_theme: &Theme) -> text::Style {
    text::Style {
        color: Some(palette::ERROR_500),
    }
}

/// Secondary text such as hints and table headers.
pub fn muted(theme: &Theme) -> text::Style {
    text::Style {
        color: Some(theme.extended_palette().background.strong.text),
    }
}
