// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the modal backdrop, the screensaver and SVG icon tinting.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, WHITE},
};
use iced::widget::{container, svg};
use iced::{Background, Color, Theme};

/// Dimmed layer between the dashboard and open modals.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        ..Default::default()
    }
}

/// Full-window screensaver layer; fully opaque so nothing shows through.
pub fn screensaver(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(BLACK)),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Tints monochrome SVG icons with the theme's text color.
pub fn icon_tint(theme: &Theme, _status: svg::Status) -> svg::Style {
    svg::Style {
        color: Some(theme.extended_palette().background.base.text),
    }
}
