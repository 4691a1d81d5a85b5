// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Fixed header bar.
pub fn header(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::SURFACE,
            ..palette::ESPRESSO
        })),
        text_color: Some(palette::CREAM),
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// Page section; alternating sections use the darker surface.
pub fn section(alternate: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (background, text) = if alternate {
            (palette::LATTE, palette::ESPRESSO)
        } else {
            (palette::CREAM, palette::ESPRESSO)
        };
        container::Style {
            background: Some(Background::Color(background)),
            text_color: Some(text),
            ..Default::default()
        }
    }
}

/// Hero banner.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ROAST)),
        text_color: Some(palette::CREAM),
        ..Default::default()
    }
}

/// Festival card holding a gallery strip.
pub fn card(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::ESPRESSO),
        border: Border {
            color: palette::LATTE,
            width: 1.0,
            radius: radius::LG.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Dropdown surface (mobile menu, search results).
pub fn dropdown(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::WHITE)),
        text_color: Some(palette::ESPRESSO),
        border: Border {
            color: palette::MOCHA,
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        ..Default::default()
    }
}

/// "Coming soon" badge.
pub fn badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD)),
        text_color: Some(palette::ESPRESSO),
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Empty slot shown while its image is still loading.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::LATTE)),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Footer strip.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::ESPRESSO)),
        text_color: Some(palette::LATTE),
        ..Default::default()
    }
}
