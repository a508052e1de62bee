// SPDX-License-Identifier: MPL-2.0
//! Root view: the page scrollable with the navbar, lightbox, and toasts
//! stacked on top.

use super::{App, Message};
use crate::ui::design_tokens::sizing;
use crate::ui::notifications::Toast;
use crate::ui::{lightbox, navbar, page, scroll_effects};
use iced::alignment::Vertical;
use iced::widget::{container, opaque, Id, Scrollable, Stack};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let page_content = page::view(page::ViewContext {
        i18n: &app.i18n,
        gallery: &app.gallery,
        reveal: &app.reveal,
        form: &app.form,
    })
    .map(Message::Page);

    let page_scrollable = Scrollable::new(page_content)
        .id(Id::new(page::SCROLLABLE_ID))
        .width(Length::Fill)
        .height(Length::Fill)
        .on_scroll(Message::PageScrolled);

    let bar = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        active: scroll_effects::active_section(sizing::NAVBAR_HEIGHT, app.scroll_y),
        elevated: scroll_effects::navbar_elevated(app.scroll_y),
    })
    .map(Message::Navbar);

    let mut layers = Stack::new().push(page_scrollable).push(
        container(bar)
            .width(Length::Fill)
            .align_y(Vertical::Top),
    );

    // The lightbox renders only once its image has pixels; clicks on
    // pending thumbnails never open it.
    if let Some(index) = app.lightbox.current_image() {
        if let (Some(handle), Some(dimensions)) =
            (app.gallery.handle(index), app.gallery.dimensions(index))
        {
            let modal = lightbox::view(lightbox::ViewContext {
                i18n: &app.i18n,
                state: &app.lightbox,
                handle,
                dimensions,
                window: app.window_size,
            })
            .map(Message::Lightbox);
            layers = layers.push(opaque(modal));
        }
    }

    layers = layers.push(
        Toast::view_overlay(&app.notifications, &app.i18n, app.i18n.direction())
            .map(Message::Notification),
    );

    layers.into()
}
