// SPDX-License-Identifier: MPL-2.0
//! Centralized design tokens: palette, spacing, sizing, typography, borders.
//!
//! Tokens are designed to be consistent; maintain the ratios (e.g. MD = XS * 2)
//! when adjusting them.

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_400: Color = Color::from_rgb(0.4, 0.4, 0.4);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    // Brand colors (gold scale)
    pub const BRAND_100: Color = Color::from_rgb(0.98, 0.95, 0.86);
    pub const BRAND_300: Color = Color::from_rgb(0.91, 0.82, 0.56);
    pub const BRAND_500: Color = Color::from_rgb(0.80, 0.65, 0.29);
    pub const BRAND_700: Color = Color::from_rgb(0.60, 0.47, 0.18);

    // Semantic colors
    pub const DANGER_500: Color = Color::from_rgb(0.898, 0.224, 0.208);
    pub const SUCCESS_500: Color = Color::from_rgb(0.263, 0.702, 0.404);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_MEDIUM: f32 = 0.5;
    pub const OVERLAY_STRONG: f32 = 0.8;

    /// Surface background for semi-transparent panels (navbar at rest).
    pub const SURFACE: f32 = 0.95;
    /// Elevated surface (navbar after the scroll threshold).
    pub const SURFACE_ELEVATED: f32 = 0.98;
    /// Unrevealed cards before the fade-in trigger fires.
    pub const CARD_HIDDEN: f32 = 0.15;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0; // 0.5 unit
    pub const XS: f32 = 8.0; // 1 unit
    pub const SM: f32 = 12.0; // 1.5 units
    pub const MD: f32 = 16.0; // 2 units
    pub const LG: f32 = 24.0; // 3 units
    pub const XL: f32 = 32.0; // 4 units
    pub const XXL: f32 = 48.0; // 6 units
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Height of the fixed navigation bar above the page.
    pub const NAVBAR_HEIGHT: f32 = 64.0;

    /// Toast card width.
    pub const TOAST_WIDTH: f32 = 400.0;

    /// Gallery thumbnail cell.
    pub const THUMBNAIL_WIDTH: f32 = 220.0;
    pub const THUMBNAIL_HEIGHT: f32 = 150.0;

    /// Outer margin of the lightbox modal inside the window.
    pub const LIGHTBOX_MARGIN: f32 = 48.0;
    /// Height of the lightbox toolbar row.
    pub const LIGHTBOX_TOOLBAR_HEIGHT: f32 = 48.0;

    /// Maximum width of the contact form column.
    pub const FORM_WIDTH: f32 = 420.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const HERO: f32 = 48.0;
    pub const TITLE: f32 = 32.0;
    pub const SUBTITLE: f32 = 22.0;
    pub const BODY: f32 = 16.0;
    pub const CAPTION: f32 = 13.0;
}

// ============================================================================
// Border & Radius
// ============================================================================

pub mod border {
    pub const WIDTH_SM: f32 = 1.0;
    pub const WIDTH_MD: f32 = 2.0;
}

pub mod radius {
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const LG: f32 = 12.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: Color::TRANSPARENT,
        offset: Vector::new(0.0, 0.0),
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.075,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 2.0),
        blur_radius: 4.0,
    };

    pub const MD: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..Color::BLACK
        },
        offset: Vector::new(0.0, 8.0),
        blur_radius: 16.0,
    };
}
