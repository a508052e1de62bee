// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering individual notifications.
//!
//! Toasts appear as small cards with a severity-colored accent border and a
//! manual dismiss button, stacked in a corner of the window.

use super::manager::{Manager, Message};
use super::notification::Notification;
use crate::i18n::fluent::I18n;
use crate::i18n::Direction;
use crate::ui::design_tokens::{border, radius, shadow, sizing, spacing, typography};
use iced::widget::{button, container, text, Column, Container, Row};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders a single toast notification.
    pub fn view<'a>(notification: &'a Notification, i18n: &'a I18n) -> Element<'a, Message> {
        let accent_color = notification.severity().color();

        let message_widget = text(i18n.tr(notification.message_key()))
            .size(typography::BODY)
            .style(|theme: &Theme| text::Style {
                color: Some(theme.palette().text),
            });

        let dismiss_button = button(text("×").size(typography::SUBTITLE))
            .on_press(Message::Dismiss(notification.id()))
            .padding(spacing::XXS)
            .style(dismiss_button_style);

        // Layout: [message] [dismiss]
        let content = Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(
                Container::new(message_widget)
                    .width(Length::Fill)
                    .align_x(alignment::Horizontal::Left),
            )
            .push(dismiss_button);

        Container::new(content)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(move |theme: &Theme| toast_container_style(theme, accent_color))
            .into()
    }

    /// Renders the toast overlay with all visible notifications.
    ///
    /// Toasts stack below the navbar, on the trailing side of the window
    /// for the active layout direction.
    pub fn view_overlay<'a>(
        manager: &'a Manager,
        i18n: &'a I18n,
        direction: Direction,
    ) -> Element<'a, Message> {
        let toasts: Vec<Element<'a, Message>> = manager
            .visible()
            .map(|notification| Self::view(notification, i18n))
            .collect();

        if toasts.is_empty() {
            return Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into();
        }

        let horizontal = if direction.is_rtl() {
            alignment::Horizontal::Left
        } else {
            alignment::Horizontal::Right
        };

        let toast_column = Column::with_children(toasts)
            .spacing(spacing::XS)
            .align_x(horizontal);

        Container::new(toast_column)
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(horizontal)
            .align_y(alignment::Vertical::Top)
            .padding([sizing::NAVBAR_HEIGHT + spacing::XL, spacing::MD])
            .into()
    }
}

/// Style function for the toast container.
fn toast_container_style(theme: &Theme, accent_color: Color) -> container::Style {
    let bg_color = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(iced::Background::Color(bg_color)),
        border: iced::Border {
            color: accent_color,
            width: border::WIDTH_MD,
            radius: radius::MD.into(),
        },
        shadow: shadow::MD,
        text_color: Some(theme.palette().text),
        ..container::Style::default()
    }
}

/// Style function for the dismiss button.
fn dismiss_button_style(theme: &Theme, status: button::Status) -> button::Style {
    let base = theme.extended_palette().background.base;

    let background = match status {
        button::Status::Hovered | button::Status::Pressed => Some(iced::Background::Color(
            theme.extended_palette().background.weak.color,
        )),
        _ => None,
    };

    button::Style {
        background,
        text_color: base.text,
        border: iced::Border {
            radius: radius::SM.into(),
            ..iced::Border::default()
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}
