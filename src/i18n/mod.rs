// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! This module provides localization capabilities using the Fluent
//! localization system. It handles locale resolution, translation file
//! loading, runtime language switching, and the layout direction flip
//! between Arabic (right-to-left) and English (left-to-right).

pub mod fluent;

/// Horizontal layout direction derived from the active locale.
///
/// Every view consults this when ordering row children and aligning text,
/// mirroring the page for right-to-left scripts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Right-to-left (Arabic).
    Rtl,
    /// Left-to-right (everything else).
    Ltr,
}

impl Direction {
    #[must_use]
    pub fn is_rtl(self) -> bool {
        matches!(self, Direction::Rtl)
    }
}
