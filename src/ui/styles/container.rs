// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// The fixed navigation bar. `elevated` is the post-threshold scroll state:
/// a denser background and a stronger shadow, with no hysteresis.
pub fn navbar(elevated: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let (alpha, shadow) = if elevated {
            (opacity::SURFACE_ELEVATED, shadow::MD)
        } else {
            (opacity::SURFACE, shadow::SM)
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })),
            shadow,
            ..container::Style::default()
        }
    }
}

/// Content card inside a section. Unrevealed cards render dimmed until the
/// one-shot reveal trigger fires for their section.
pub fn card(revealed: bool) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let alpha = if revealed {
            1.0
        } else {
            opacity::CARD_HIDDEN
        };

        container::Style {
            background: Some(Background::Color(Color {
                a: alpha,
                ..palette::WHITE
            })),
            border: Border {
                color: Color {
                    a: alpha,
                    ..palette::GRAY_100
                },
                width: 1.0,
                radius: radius::MD.into(),
            },
            shadow: if revealed { shadow::SM } else { shadow::NONE },
            text_color: Some(Color {
                a: alpha,
                ..palette::GRAY_900
            }),
            ..container::Style::default()
        }
    }
}

/// Placeholder cell shown while a gallery image is pending or failed.
pub fn placeholder(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_100)),
        border: Border {
            color: palette::GRAY_200,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..container::Style::default()
    }
}

/// Dimmed full-window backdrop behind the lightbox modal.
pub fn backdrop(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        ..container::Style::default()
    }
}

/// Hero section banner.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::BRAND_100)),
        ..container::Style::default()
    }
}

/// Page footer strip.
pub fn footer(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GRAY_900)),
        text_color: Some(palette::GRAY_100),
        ..container::Style::default()
    }
}
