// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    border, opacity,
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Primary call-to-action button (hero CTA, form submit).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::BRAND_300)),
            text_color: palette::GRAY_900,
            border: Border {
                color: palette::BRAND_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::MD,
            ..button::Style::default()
        },
        _ => button::Style {
            background: Some(Background::Color(palette::BRAND_500)),
            text_color: WHITE,
            border: Border {
                color: palette::BRAND_700,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::SM,
            ..button::Style::default()
        },
    }
}

/// Disabled button (submit while the simulated send is in flight).
pub fn disabled() -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, _status: button::Status| button::Style {
        background: Some(Background::Color(palette::GRAY_200)),
        text_color: palette::GRAY_400,
        border: Border {
            color: palette::GRAY_400,
            width: border::WIDTH_SM,
            radius: radius::SM.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Navigation link; `active` marks the link whose section is in view.
pub fn nav_link(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let text_color = if active {
            palette::BRAND_700
        } else if status == button::Status::Hovered {
            palette::BRAND_500
        } else {
            palette::GRAY_700
        };

        button::Style {
            background: None,
            text_color,
            border: Border::default(),
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// Language toggle button; `selected` marks the active language.
pub fn lang_toggle(selected: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |_theme: &Theme, status: button::Status| {
        let background = if selected {
            Some(Background::Color(palette::BRAND_500))
        } else if status == button::Status::Hovered {
            Some(Background::Color(palette::BRAND_100))
        } else {
            None
        };

        button::Style {
            background,
            text_color: if selected { WHITE } else { palette::GRAY_700 },
            border: Border {
                color: palette::BRAND_500,
                width: border::WIDTH_SM,
                radius: radius::SM.into(),
            },
            shadow: shadow::NONE,
            ..button::Style::default()
        }
    }
}

/// Transparent icon-like button used on the lightbox toolbar.
pub fn overlay(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::OVERLAY_MEDIUM,
        button::Status::Pressed => opacity::OVERLAY_STRONG,
        _ => opacity::OVERLAY_SUBTLE,
    };

    button::Style {
        background: Some(Background::Color(Color {
            a: alpha,
            ..palette::BLACK
        })),
        text_color: WHITE,
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
