// SPDX-License-Identifier: MPL-2.0
//! Page content model: the labeled sections of the brochure and their
//! vertical layout, plus the photo gallery.
//!
//! The page is a single column of fixed-height sections, so every section's
//! top offset is a cumulative sum. Scroll-driven effects (active nav link,
//! reveal, lazy loading) all reason about these offsets.

pub mod gallery;

/// Identifier of a labeled page section, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Home,
    About,
    Rooms,
    Gallery,
    Contact,
}

impl SectionId {
    /// All sections, top to bottom.
    pub const ALL: [SectionId; 5] = [
        SectionId::Home,
        SectionId::About,
        SectionId::Rooms,
        SectionId::Gallery,
        SectionId::Contact,
    ];

    /// Fluent key for the section's navigation label.
    #[must_use]
    pub fn nav_key(self) -> &'static str {
        match self {
            SectionId::Home => "nav-home",
            SectionId::About => "nav-about",
            SectionId::Rooms => "nav-rooms",
            SectionId::Gallery => "nav-gallery",
            SectionId::Contact => "nav-contact",
        }
    }
}

/// Fixed vertical layout of the page sections.
///
/// Section heights are design constants rather than measured values; the
/// scroll effects need them before the first layout pass and the page view
/// sizes each section container to match.
#[derive(Debug, Clone, Copy)]
pub struct SectionLayout;

impl SectionLayout {
    pub const HOME_HEIGHT: f32 = 600.0;
    pub const ABOUT_HEIGHT: f32 = 520.0;
    pub const ROOMS_HEIGHT: f32 = 640.0;
    pub const GALLERY_HEIGHT: f32 = 680.0;
    pub const CONTACT_HEIGHT: f32 = 640.0;
    pub const FOOTER_HEIGHT: f32 = 120.0;

    /// Height of a single section.
    #[must_use]
    pub fn height(section: SectionId) -> f32 {
        match section {
            SectionId::Home => Self::HOME_HEIGHT,
            SectionId::About => Self::ABOUT_HEIGHT,
            SectionId::Rooms => Self::ROOMS_HEIGHT,
            SectionId::Gallery => Self::GALLERY_HEIGHT,
            SectionId::Contact => Self::CONTACT_HEIGHT,
        }
    }

    /// Top offset of a section inside the scrollable content.
    #[must_use]
    pub fn top(section: SectionId) -> f32 {
        let mut offset = 0.0;
        for candidate in SectionId::ALL {
            if candidate == section {
                break;
            }
            offset += Self::height(candidate);
        }
        offset
    }

    /// Total scrollable content height, footer included.
    #[must_use]
    pub fn total_height() -> f32 {
        SectionId::ALL
            .iter()
            .map(|section| Self::height(*section))
            .sum::<f32>()
            + Self::FOOTER_HEIGHT
    }
}
