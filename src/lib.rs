// SPDX-License-Identifier: MPL-2.0
//! `ion-kiosk` is a bilingual (Arabic/English) hotel brochure application
//! built with the Iced GUI framework.
//!
//! It renders a single scrollable marketing page with localized content,
//! a contact form with simulated submission, and a zoomable image lightbox
//! for the photo gallery.

#![doc(html_root_url = "https://docs.rs/ion-kiosk/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod i18n;
pub mod ui;
