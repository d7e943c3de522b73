// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles shared by the UI modules.

use crate::ui::design_tokens::{opacity, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Toolbar surface used by the navigation bar.
///
/// The color is derived from the active Iced `Theme` background so the bar
/// stays readable in both light and dark modes without hard-coding colors.
pub fn toolbar(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.weak.color)),
        text_color: Some(palette.background.base.text),
        ..Default::default()
    }
}

/// Card surface for a single entry in the video list.
pub fn list_row(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::SM.into(),
            width: 1.0,
            color: palette.background.strong.color,
        },
        ..Default::default()
    }
}
