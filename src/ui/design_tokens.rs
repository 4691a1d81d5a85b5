// SPDX-License-Identifier: MPL-2.0
//! Design tokens: palette, opacity, spacing, sizing, typography and shadows.
//!
//! ```
//! use merkaba_site::ui::design_tokens::{opacity, palette, spacing};
//! use iced::Color;
//!
//! let backdrop = Color {
//!     a: opacity::OVERLAY_STRONG,
//!     ..palette::ESPRESSO
//! };
//! assert_eq!(spacing::MD, 16.0);
//! # let _ = backdrop;
//! ```

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;

    // Coffee scale
    pub const ESPRESSO: Color = Color::from_rgb(0.17, 0.11, 0.08);
    pub const ROAST: Color = Color::from_rgb(0.32, 0.21, 0.15);
    pub const MOCHA: Color = Color::from_rgb(0.52, 0.36, 0.25);
    pub const CARAMEL: Color = Color::from_rgb(0.78, 0.58, 0.36);
    pub const LATTE: Color = Color::from_rgb(0.89, 0.8, 0.68);
    pub const CREAM: Color = Color::from_rgb(0.98, 0.95, 0.9);

    // Accents
    pub const GOLD: Color = Color::from_rgb(0.85, 0.69, 0.31);
    pub const SAGE: Color = Color::from_rgb(0.55, 0.62, 0.5);
    pub const LAKE: Color = Color::from_rgb(0.62, 0.76, 0.82);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.85;
    pub const OVERLAY_PRESSED: f32 = 0.9;
    pub const OPAQUE: f32 = 1.0;

    /// Header bar over the page content.
    pub const SURFACE: f32 = 0.95;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    pub const ICON_SM: f32 = 16.0;
    pub const ICON_MD: f32 = 24.0;
    pub const ICON_LG: f32 = 32.0;

    /// Fixed header height; sections scroll to just below it.
    pub const HEADER_HEIGHT: f32 = 80.0;

    pub const SEARCH_WIDTH: f32 = 220.0;
    pub const THUMBNAIL_HEIGHT: f32 = 180.0;
    pub const GALLERY_ARROW: f32 = 40.0;
    pub const LIGHTBOX_ARROW: f32 = 56.0;
    pub const MAP_HEIGHT: f32 = 420.0;
    pub const LOCATION_LIST_WIDTH: f32 = 240.0;
    pub const CONTENT_MAX_WIDTH: f32 = 1200.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    /// Hero banner title
    pub const DISPLAY: f32 = 48.0;

    /// Section headings (About, Menu, Contact)
    pub const TITLE_LG: f32 = 32.0;

    /// Festival names
    pub const TITLE_SM: f32 = 20.0;

    pub const BODY_LG: f32 = 17.0;
    pub const BODY: f32 = 15.0;
    pub const CAPTION: f32 = 12.0;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 14.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector { x: 0.0, y: 4.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::OVERLAY_MEDIUM > 0.0 && opacity::OVERLAY_MEDIUM < 1.0);

    assert!(sizing::ICON_LG > sizing::ICON_MD);
    assert!(sizing::LIGHTBOX_ARROW > sizing::GALLERY_ARROW);

    assert!(typography::DISPLAY > typography::TITLE_LG);
    assert!(typography::TITLE_LG > typography::TITLE_SM);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY > typography::CAPTION);
};
