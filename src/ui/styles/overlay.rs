// SPDX-License-Identifier: MPL-2.0
//! Overlay styles for the lightbox and the map hint.

use crate::ui::design_tokens::{
    opacity,
    palette::{BLACK, CREAM, WHITE},
    radius,
};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Full-window dimmed backdrop behind the lightbox image.
#[must_use]
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..BLACK
        })),
        text_color: Some(WHITE),
        ..Default::default()
    }
}

/// Pill behind overlay text (lightbox caption, map hint).
pub fn indicator(rad: f32) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_MEDIUM,
            ..BLACK
        })),
        text_color: Some(CREAM),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..WHITE
            },
            width: 1.0,
            radius: rad.into(),
        },
        ..Default::default()
    }
}

/// Caption pill under the lightbox image.
#[must_use]
pub fn caption(theme: &Theme) -> container::Style {
    indicator(radius::FULL)(theme)
}
