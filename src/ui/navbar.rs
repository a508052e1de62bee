// SPDX-License-Identifier: MPL-2.0
//! Fixed navigation bar: brand, section links, and the language toggle.
//!
//! The bar sits above the page scrollable. Once the page scrolls past the
//! elevation threshold it renders with a denser background and a stronger
//! shadow. The link order mirrors for RTL layouts; the active link tracks
//! the section currently in view.

use crate::content::SectionId;
use crate::i18n::fluent::I18n;
use crate::i18n::Direction;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::alignment::Vertical;
use iced::widget::{button, container, text, Row, Space};
use iced::{Element, Length};
use unic_langid::LanguageIdentifier;

#[derive(Debug, Clone)]
pub enum Message {
    /// A section link was pressed; the page scrolls to its anchor.
    Navigate(SectionId),
    /// A language toggle button was pressed.
    SwitchLanguage(LanguageIdentifier),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Section whose nav link renders highlighted, if any.
    pub active: Option<SectionId>,
    /// Whether the page has scrolled past the elevation threshold.
    pub elevated: bool,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let direction = ctx.i18n.direction();

    let brand = text(ctx.i18n.tr("hero-title"))
        .size(typography::SUBTITLE)
        .font(iced::Font {
            weight: iced::font::Weight::Bold,
            ..iced::Font::default()
        });

    let mut links = Row::new().spacing(spacing::XS).align_y(Vertical::Center);
    for section in SectionId::ALL {
        let is_active = ctx.active == Some(section);
        links = links.push(
            button(text(ctx.i18n.tr(section.nav_key())).size(typography::BODY))
                .on_press(Message::Navigate(section))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::nav_link(is_active)),
        );
    }

    let toggle = language_toggle(ctx.i18n);

    // Visual order mirrors for RTL: brand on the right, toggle on the left.
    let mut bar = Row::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([0.0, spacing::LG])
        .spacing(spacing::LG)
        .align_y(Vertical::Center);
    bar = match direction {
        Direction::Ltr => bar
            .push(brand)
            .push(Space::new().width(Length::Fill))
            .push(links)
            .push(toggle),
        Direction::Rtl => bar
            .push(toggle)
            .push(links)
            .push(Space::new().width(Length::Fill))
            .push(brand),
    };

    container(bar)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.elevated))
        .into()
}

fn language_toggle(i18n: &I18n) -> Element<'_, Message> {
    let current = i18n.current_locale().language.as_str();

    let mut toggle = Row::new().spacing(spacing::XXS).align_y(Vertical::Center);
    for (code, label_key) in [("ar", "lang-button-arabic"), ("en", "lang-button-english")] {
        let locale: LanguageIdentifier = code.parse().expect("locale code is valid");
        let selected = current == code;
        toggle = toggle.push(
            button(text(i18n.tr(label_key)).size(typography::CAPTION))
                .on_press(Message::SwitchLanguage(locale))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::lang_toggle(selected)),
        );
    }
    toggle.into()
}
