// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application root.

use super::{App, Message};
use crate::config;
use crate::content::gallery::{self, Gallery};
use crate::content::SectionId;
use crate::error;
use crate::ui::design_tokens::sizing;
use crate::ui::{contact_form, lightbox, navbar, notifications, page, scroll_effects};
use iced::widget::operation;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::widget::Id;
use iced::{Point, Task};
use std::path::PathBuf;
use unic_langid::LanguageIdentifier;

pub fn handle(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(navbar::Message::Navigate(section))
        | Message::Page(page::Message::Navigate(section)) => scroll_to_section(section),
        Message::Navbar(navbar::Message::SwitchLanguage(locale)) => switch_language(app, locale),
        Message::Page(page::Message::OpenImage(index)) => {
            // Only loaded slots are clickable, but a stale message could
            // still name a pending one.
            if app.gallery.handle(index).is_some() {
                app.lightbox.open(index);
            }
            Task::none()
        }
        Message::Page(page::Message::Form(form_message)) => handle_form(app, form_message),
        Message::Lightbox(lightbox_message) => {
            match lightbox::update(&mut app.lightbox, lightbox_message) {
                lightbox::Effect::TransformChanged => sync_lightbox_offset(app),
                lightbox::Effect::None | lightbox::Effect::Closed => Task::none(),
            }
        }
        Message::Notification(notification_message) => {
            app.notifications.handle_message(&notification_message);
            Task::none()
        }
        Message::PageScrolled(viewport) => page_scrolled(app, &viewport),
        Message::GalleryScanned(result) => gallery_scanned(app, result),
        Message::GalleryImageLoaded { index, result } => {
            app.gallery.record_result(index, &result);
            Task::none()
        }
        Message::ContactSendElapsed => {
            app.form.finish_send();
            app.notifications
                .push(notifications::Notification::success("notification-form-success"));
            Task::none()
        }
        Message::Tick(now) => {
            app.notifications.tick(now);
            Task::none()
        }
        Message::WindowResized(size) => {
            app.window_size = size;
            Task::none()
        }
        Message::CursorMoved(position) => {
            app.cursor = position;
            if app.lightbox.drag_move(position) {
                sync_lightbox_offset(app)
            } else {
                Task::none()
            }
        }
        Message::MouseDown => mouse_down(app),
        Message::MouseUp => {
            app.lightbox.drag_end();
            Task::none()
        }
        Message::WheelScrolled(dy) => wheel_scrolled(app, dy),
        Message::EscapePressed => {
            app.lightbox.close();
            Task::none()
        }
    }
}

/// Scrolls the page so the section lands just below the navbar.
fn scroll_to_section(section: SectionId) -> Task<Message> {
    operation::scroll_to(
        Id::new(page::SCROLLABLE_ID),
        AbsoluteOffset {
            x: 0.0,
            y: scroll_effects::anchor_offset(sizing::NAVBAR_HEIGHT, section),
        },
    )
}

fn switch_language(app: &mut App, locale: LanguageIdentifier) -> Task<Message> {
    app.i18n.set_locale(locale);
    app.config.language = Some(app.i18n.current_locale().to_string());
    if config::save(&app.config).is_err() {
        app.notifications
            .push(notifications::Notification::danger("notification-config-save-failed"));
    }
    Task::none()
}

fn handle_form(app: &mut App, message: contact_form::Message) -> Task<Message> {
    match app.form.update(message) {
        contact_form::Effect::None => Task::none(),
        contact_form::Effect::Invalid(key) => {
            app.notifications.push(notifications::Notification::danger(key));
            Task::none()
        }
        contact_form::Effect::StartSend => Task::perform(
            tokio::time::sleep(contact_form::SEND_DELAY),
            |_| Message::ContactSendElapsed,
        ),
    }
}

fn page_scrolled(app: &mut App, viewport: &scrollable::Viewport) -> Task<Message> {
    app.scroll_y = viewport.absolute_offset().y;
    let viewport_height = viewport.bounds().height;

    app.reveal.observe(app.scroll_y, viewport_height);

    start_due_loads(app, viewport_height)
}

/// Kicks off loads for gallery slots that just became due.
fn start_due_loads(app: &mut App, viewport_height: f32) -> Task<Message> {
    let due = app
        .lazy
        .due(app.scroll_y, viewport_height, app.gallery.len());

    let tasks: Vec<Task<Message>> = due
        .into_iter()
        .filter_map(|index| {
            let path = app.gallery.path(index)?.to_path_buf();
            Some(Task::perform(gallery::load(path), move |result| {
                Message::GalleryImageLoaded { index, result }
            }))
        })
        .collect();

    Task::batch(tasks)
}

fn gallery_scanned(app: &mut App, result: error::Result<Vec<PathBuf>>) -> Task<Message> {
    match result {
        Ok(paths) => {
            app.gallery = Gallery::new(paths);
            // The gallery may already be in view if the scan was slow.
            start_due_loads(app, app.window_size.height)
        }
        Err(_) => {
            app.notifications
                .push(notifications::Notification::danger("notification-gallery-scan-failed"));
            Task::none()
        }
    }
}

fn mouse_down(app: &mut App) -> Task<Message> {
    if !app.lightbox.is_open() {
        return Task::none();
    }

    if lightbox::cursor_over_image(app.window_size, app.cursor) {
        app.lightbox.drag_start(app.cursor);
    } else {
        // Anywhere on the backdrop dismisses the modal.
        app.lightbox.close();
    }
    Task::none()
}

fn wheel_scrolled(app: &mut App, dy: f32) -> Task<Message> {
    if !app.lightbox.is_open() || !lightbox::cursor_over_image(app.window_size, app.cursor) {
        return Task::none();
    }

    let origin = lightbox::image_viewport_origin(app.window_size);
    let relative = Point::new(app.cursor.x - origin.x, app.cursor.y - origin.y);

    // Wheel up (positive lines) zooms in.
    if app.lightbox.wheel_zoom(relative, -dy) {
        sync_lightbox_offset(app)
    } else {
        Task::none()
    }
}

/// Mirrors the lightbox transform to its scrollable widget.
fn sync_lightbox_offset(app: &App) -> Task<Message> {
    let Some(index) = app.lightbox.current_image() else {
        return Task::none();
    };
    let Some(dimensions) = app.gallery.dimensions(index) else {
        return Task::none();
    };

    operation::scroll_to(
        Id::new(lightbox::SCROLLABLE_ID),
        lightbox::scroll_offset(&app.lightbox, dimensions, app.window_size),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::default()
    }

    #[test]
    fn invalid_form_submit_raises_a_danger_toast() {
        let mut app = app();
        let _ = handle(
            &mut app,
            Message::Page(page::Message::Form(contact_form::Message::SubmitPressed)),
        );
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[tokio::test]
    async fn send_elapsed_clears_the_form_and_raises_success() {
        let mut app = app();
        for message in [
            contact_form::Message::NameChanged("Salma".into()),
            contact_form::Message::EmailChanged("salma@example.com".into()),
            contact_form::Message::BodyChanged("hello".into()),
            contact_form::Message::SubmitPressed,
        ] {
            let _ = handle(&mut app, Message::Page(page::Message::Form(message)));
        }
        assert!(app.form.is_sending());

        let _ = handle(&mut app, Message::ContactSendElapsed);
        assert!(!app.form.is_sending());
        assert_eq!(app.notifications.visible_count(), 1);
    }

    #[test]
    fn open_image_ignores_unloaded_slots() {
        let mut app = app();
        app.gallery = Gallery::new(vec![PathBuf::from("a.png")]);
        let _ = handle(&mut app, Message::Page(page::Message::OpenImage(0)));
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn escape_closes_the_lightbox() {
        let mut app = app();
        app.lightbox.open(0);
        let _ = handle(&mut app, Message::EscapePressed);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn backdrop_click_closes_the_lightbox() {
        let mut app = app();
        app.lightbox.open(0);
        // Cursor at the window corner, well outside the image viewport.
        let _ = handle(&mut app, Message::CursorMoved(Point::new(1.0, 1.0)));
        let _ = handle(&mut app, Message::MouseDown);
        assert!(!app.lightbox.is_open());
    }

    #[test]
    fn release_outside_the_window_still_ends_the_drag() {
        let mut app = app();
        app.lightbox.open(0);
        let _ = handle(&mut app, Message::Lightbox(lightbox::Message::ZoomIn));
        let center = Point::new(
            app.window_size.width / 2.0,
            app.window_size.height / 2.0,
        );
        let _ = handle(&mut app, Message::CursorMoved(center));
        let _ = handle(&mut app, Message::MouseDown);
        assert!(app.lightbox.is_dragging());

        let _ = handle(&mut app, Message::MouseUp);
        assert!(!app.lightbox.is_dragging());
    }

    #[test]
    fn wheel_at_the_zoom_bound_leaves_the_offset_in_place() {
        let mut app = app();
        app.gallery = Gallery::new(vec![PathBuf::from("a.png")]);
        // Large enough that the zoomed image overflows the viewport.
        app.gallery.record_result(
            0,
            &Ok(gallery::LoadedImage {
                bytes: Vec::new(),
                width: 4000,
                height: 4000,
            }),
        );
        let _ = handle(&mut app, Message::Page(page::Message::OpenImage(0)));
        assert!(app.lightbox.is_open());

        let center = Point::new(
            app.window_size.width / 2.0,
            app.window_size.height / 2.0,
        );
        let _ = handle(&mut app, Message::CursorMoved(center));

        // Wheel up (positive lines) until the factor caps out.
        while app.lightbox.zoom().value() < lightbox::MAX_ZOOM {
            let _ = handle(&mut app, Message::WheelScrolled(1.0));
        }
        let at_bound = lightbox::scroll_offset(&app.lightbox, (4000, 4000), app.window_size);

        // A further wheel tick is clamped; the derived offset must not move.
        let _ = handle(&mut app, Message::WheelScrolled(1.0));
        assert_eq!(app.lightbox.zoom().value(), lightbox::MAX_ZOOM);
        let after = lightbox::scroll_offset(&app.lightbox, (4000, 4000), app.window_size);
        assert_eq!((after.x, after.y), (at_bound.x, at_bound.y));
    }

    #[test]
    fn failed_scan_raises_a_toast_and_keeps_the_gallery_empty() {
        let mut app = app();
        let _ = handle(
            &mut app,
            Message::GalleryScanned(Err(error::Error::Io("denied".into()))),
        );
        assert!(app.gallery.is_empty());
        assert_eq!(app.notifications.visible_count(), 1);
    }
}
