// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the page, the lightbox, the contact form,
//! localization, and the toast notifications, and translates messages into
//! side effects like config persistence or image loading. Policy decisions
//! (default window size, which events are subscribed when) live here so
//! user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config};
use crate::content::gallery::{self, Gallery};
use crate::i18n::fluent::I18n;
use crate::ui::scroll_effects::{LazyLoader, RevealTracker};
use crate::ui::{contact_form, lightbox, notifications};
use iced::{window, Element, Point, Size, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 600;

/// Root application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    gallery: Gallery,
    form: contact_form::State,
    lightbox: lightbox::State,
    notifications: notifications::Manager,
    reveal: RevealTracker,
    lazy: LazyLoader,
    /// Absolute scroll offset of the page scrollable.
    scroll_y: f32,
    window_size: Size,
    /// Last known cursor position in window coordinates.
    cursor: Point,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("locale", &self.i18n.current_locale().to_string())
            .field("gallery_len", &self.gallery.len())
            .field("lightbox_open", &self.lightbox.is_open())
            .finish()
    }
}

fn window_settings() -> window::Settings {
    window::Settings {
        size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(Size::new(MIN_WINDOW_WIDTH as f32, MIN_WINDOW_HEIGHT as f32)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy the Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            config: Config::default(),
            gallery: Gallery::default(),
            form: contact_form::State::new(),
            lightbox: lightbox::State::new(),
            notifications: notifications::Manager::new(),
            reveal: RevealTracker::new(),
            lazy: LazyLoader::new(),
            scroll_y: 0.0,
            window_size: Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
            cursor: Point::ORIGIN,
        }
    }
}

impl App {
    /// Initializes application state and kicks off the gallery scan.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_default();
        let i18n = I18n::new(flags.lang.clone(), &config);

        let mut app = App {
            i18n,
            config,
            ..Self::default()
        };

        // The first sections are visible before any scrolling happens.
        app.reveal
            .observe(0.0, app.window_size.height);

        let task = match flags.gallery_dir {
            Some(dir) => {
                let path = std::path::PathBuf::from(dir);
                Task::perform(
                    async move { gallery::scan(&path) },
                    Message::GalleryScanned,
                )
            }
            None => Task::none(),
        };

        (app, task)
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription(self.lightbox.is_open());
        let tick_sub = subscription::create_tick_subscription(
            self.notifications.has_notifications(),
        );

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }
}
