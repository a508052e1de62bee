// SPDX-License-Identifier: MPL-2.0
//! Top-level message and launch flags.

use crate::content::gallery::LoadedImage;
use crate::error;
use crate::ui::{lightbox, navbar, notifications, page};
use iced::widget::scrollable;
use iced::{Point, Size};
use std::path::PathBuf;
use std::time::Instant;

/// Values parsed from the command line by `main.rs`.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Language override (`--lang ar|en`); beats the persisted preference.
    pub lang: Option<String>,
    /// Directory scanned for gallery photos.
    pub gallery_dir: Option<String>,
}

#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Page(page::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::Message),

    /// The page scrollable reported a new viewport.
    PageScrolled(scrollable::Viewport),
    /// The gallery directory scan finished.
    GalleryScanned(error::Result<Vec<PathBuf>>),
    /// One gallery slot finished loading (or failed).
    GalleryImageLoaded {
        index: usize,
        result: error::Result<LoadedImage>,
    },
    /// The simulated contact form send timer elapsed.
    ContactSendElapsed,

    /// Periodic tick driving notification auto-dismiss.
    Tick(Instant),
    WindowResized(Size),

    // Raw pointer/keyboard events. Cursor moves are tracked in every mode;
    // the rest are only subscribed while the lightbox is open.
    CursorMoved(Point),
    MouseDown,
    MouseUp,
    WheelScrolled(f32),
    EscapePressed,
}
