// SPDX-License-Identifier: MPL-2.0
//! The brochure page: a single column of fixed-height sections.
//!
//! Section heights come from [`SectionLayout`] so the scroll effects and the
//! rendered layout always agree. The app wraps this column in the page
//! scrollable and overlays the navbar on top.

use crate::content::gallery::{Gallery, Slot};
use crate::content::{SectionId, SectionLayout};
use crate::i18n::fluent::I18n;
use crate::ui::contact_form;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::scroll_effects::RevealTracker;
use crate::ui::styles;
use chrono::Datelike;
use iced::alignment::{Horizontal, Vertical};
use iced::widget::{button, container, image, text, Column, Container, Row};
use iced::{Element, Length};

/// Identifier of the page scrollable, used for anchor navigation.
pub const SCROLLABLE_ID: &str = "page-scrollable";

/// Thumbnails per gallery row.
const GALLERY_COLUMNS: usize = 4;

#[derive(Debug, Clone)]
pub enum Message {
    /// The hero call-to-action; scrolls to the contact section.
    Navigate(SectionId),
    /// A loaded gallery thumbnail was pressed.
    OpenImage(usize),
    Form(contact_form::Message),
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub gallery: &'a Gallery,
    pub reveal: &'a RevealTracker,
    pub form: &'a contact_form::State,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    Column::new()
        .width(Length::Fill)
        .push(hero(ctx.i18n))
        .push(about(ctx.i18n, ctx.reveal))
        .push(rooms(ctx.i18n, ctx.reveal))
        .push(gallery(ctx.i18n, ctx.gallery, ctx.reveal))
        .push(contact(ctx.i18n, ctx.form, ctx.reveal))
        .push(footer(ctx.i18n))
        .into()
}

fn hero(i18n: &I18n) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("hero-title")).size(typography::HERO))
        .push(text(i18n.tr("hero-subtitle")).size(typography::SUBTITLE))
        .push(
            button(text(i18n.tr("hero-cta")).size(typography::BODY))
                .on_press(Message::Navigate(SectionId::Contact))
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary),
        );

    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(SectionLayout::HOME_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::hero)
        .into()
}

fn about<'a>(i18n: &'a I18n, reveal: &RevealTracker) -> Element<'a, Message> {
    let card = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .max_width(720.0)
            .push(text(i18n.tr("about-title")).size(typography::TITLE))
            .push(text(i18n.tr("about-body")).size(typography::BODY)),
    )
    .padding(spacing::XL)
    .style(styles::container::card(reveal.is_revealed(SectionId::About)));

    section_shell(SectionId::About, card.into())
}

fn rooms<'a>(i18n: &'a I18n, reveal: &RevealTracker) -> Element<'a, Message> {
    let revealed = reveal.is_revealed(SectionId::Rooms);

    let mut cards = Row::new().spacing(spacing::LG);
    for (title_key, body_key) in [
        ("room-standard-title", "room-standard-body"),
        ("room-suite-title", "room-suite-body"),
        ("room-royal-title", "room-royal-body"),
    ] {
        cards = cards.push(
            Container::new(
                Column::new()
                    .spacing(spacing::SM)
                    .push(text(i18n.tr(title_key)).size(typography::SUBTITLE))
                    .push(text(i18n.tr(body_key)).size(typography::BODY)),
            )
            .width(Length::Fixed(260.0))
            .padding(spacing::LG)
            .style(styles::container::card(revealed)),
        );
    }

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("rooms-title")).size(typography::TITLE))
        .push(cards);

    section_shell(SectionId::Rooms, content.into())
}

fn gallery<'a>(i18n: &'a I18n, gallery: &'a Gallery, reveal: &RevealTracker) -> Element<'a, Message> {
    let revealed = reveal.is_revealed(SectionId::Gallery);

    let grid: Element<'a, Message> = if gallery.is_empty() {
        text(i18n.tr("gallery-empty")).size(typography::BODY).into()
    } else {
        let mut rows = Column::new().spacing(spacing::MD);
        let mut row = Row::new().spacing(spacing::MD);
        for (index, slot) in gallery.slots().enumerate() {
            row = row.push(thumbnail(i18n, index, slot));
            if (index + 1) % GALLERY_COLUMNS == 0 {
                rows = rows.push(row);
                row = Row::new().spacing(spacing::MD);
            }
        }
        rows.push(row).into()
    };

    let content = Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(text(i18n.tr("gallery-title")).size(typography::TITLE))
        .push(
            Container::new(grid)
                .padding(spacing::LG)
                .style(styles::container::card(revealed)),
        );

    section_shell(SectionId::Gallery, content.into())
}

fn thumbnail<'a>(i18n: &'a I18n, index: usize, slot: &'a Slot) -> Element<'a, Message> {
    let cell = Length::Fixed(sizing::THUMBNAIL_WIDTH);
    let cell_height = Length::Fixed(sizing::THUMBNAIL_HEIGHT);

    match slot {
        Slot::Loaded { handle, .. } => button(
            image(handle.clone())
                .width(cell)
                .height(cell_height)
                .content_fit(iced::ContentFit::Cover),
        )
        .on_press(Message::OpenImage(index))
        .padding(0.0)
        .style(styles::button::overlay)
        .into(),
        Slot::Pending => Container::new(
            text(i18n.tr("gallery-loading")).size(typography::CAPTION),
        )
        .width(cell)
        .height(cell_height)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::placeholder)
        .into(),
        Slot::Failed => Container::new(text(""))
            .width(cell)
            .height(cell_height)
            .style(styles::container::placeholder)
            .into(),
    }
}

fn contact<'a>(
    i18n: &'a I18n,
    form: &'a contact_form::State,
    reveal: &RevealTracker,
) -> Element<'a, Message> {
    let card = Container::new(
        Column::new()
            .spacing(spacing::XL)
            .align_x(Horizontal::Center)
            .push(text(i18n.tr("contact-title")).size(typography::TITLE))
            .push(form.view(i18n).map(Message::Form)),
    )
    .padding(spacing::XL)
    .style(styles::container::card(reveal.is_revealed(SectionId::Contact)));

    section_shell(SectionId::Contact, card.into())
}

fn footer(i18n: &I18n) -> Element<'_, Message> {
    let year = chrono::Local::now().year().to_string();
    let line = i18n.tr_with_args("footer-rights", &[("year", year.as_str())]);

    container(text(line).size(typography::CAPTION))
        .width(Length::Fill)
        .height(Length::Fixed(SectionLayout::FOOTER_HEIGHT))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::footer)
        .into()
}

/// Sizes a section container to its layout height so scroll math and the
/// rendered page agree.
fn section_shell(section: SectionId, content: Element<'_, Message>) -> Element<'_, Message> {
    container(content)
        .width(Length::Fill)
        .height(Length::Fixed(SectionLayout::height(section)))
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .into()
}
