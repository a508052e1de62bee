// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven page effects.
//!
//! Everything here is pure bookkeeping over the page's absolute scroll
//! offset: navbar elevation, active-link tracking, one-shot reveal triggers,
//! and one-shot lazy-load scheduling for gallery slots. The view layer asks
//! these types what to render; they never touch widgets themselves.

use crate::content::{SectionId, SectionLayout};
use crate::ui::design_tokens::sizing;
use std::collections::HashSet;

/// Scroll offset past which the navbar switches to its elevated state.
pub const NAVBAR_ELEVATION_THRESHOLD: f32 = 50.0;

/// Lead distance used by active-link tracking, measured below the header.
pub const ACTIVE_LINK_LEAD: f32 = 100.0;

/// Gap left between the header and a section when navigating to it.
pub const ANCHOR_MARGIN: f32 = 20.0;

/// Fraction of a section that must be visible before it reveals.
pub const REVEAL_VISIBLE_FRACTION: f32 = 0.1;

/// Two fixed navbar visual states keyed by the scroll offset; recomputed on
/// every scroll tick, no hysteresis.
#[must_use]
pub fn navbar_elevated(scroll_y: f32) -> bool {
    scroll_y > NAVBAR_ELEVATION_THRESHOLD
}

/// The section whose range contains the current scroll position, if any.
///
/// A section is current while
/// `scroll_y ∈ [top − header − lead, top − header − lead + height)`.
/// The scan keeps the last match in page order. Before the first section's
/// range and past the last one, no link is active.
#[must_use]
pub fn active_section(header_height: f32, scroll_y: f32) -> Option<SectionId> {
    let mut current = None;

    for section in SectionId::ALL {
        let section_top = SectionLayout::top(section) - header_height - ACTIVE_LINK_LEAD;
        let section_height = SectionLayout::height(section);

        if scroll_y >= section_top && scroll_y < section_top + section_height {
            current = Some(section);
        }
    }

    current
}

/// Scroll offset that brings a section just below the header.
#[must_use]
pub fn anchor_offset(header_height: f32, section: SectionId) -> f32 {
    (SectionLayout::top(section) - header_height - ANCHOR_MARGIN).max(0.0)
}

/// Fraction of a section currently inside the viewport, in `0.0..=1.0`.
fn visible_fraction(top: f32, height: f32, scroll_y: f32, viewport_height: f32) -> f32 {
    if height <= 0.0 {
        return 0.0;
    }
    let viewport_top = scroll_y;
    let viewport_bottom = scroll_y + viewport_height;
    let visible_top = top.max(viewport_top);
    let visible_bottom = (top + height).min(viewport_bottom);
    ((visible_bottom - visible_top) / height).clamp(0.0, 1.0)
}

/// One-shot reveal triggers for the fade-in effect.
///
/// A section reveals once at least [`REVEAL_VISIBLE_FRACTION`] of it enters
/// the viewport, and then stays revealed forever; scrolling it out and back
/// in never re-triggers.
#[derive(Debug, Clone, Default)]
pub struct RevealTracker {
    revealed: HashSet<SectionId>,
}

impl RevealTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Processes a scroll sample and returns the sections newly revealed by it.
    pub fn observe(&mut self, scroll_y: f32, viewport_height: f32) -> Vec<SectionId> {
        let mut newly_revealed = Vec::new();

        for section in SectionId::ALL {
            if self.revealed.contains(&section) {
                continue;
            }
            let fraction = visible_fraction(
                SectionLayout::top(section),
                SectionLayout::height(section),
                scroll_y,
                viewport_height,
            );
            if fraction >= REVEAL_VISIBLE_FRACTION {
                self.revealed.insert(section);
                newly_revealed.push(section);
            }
        }

        newly_revealed
    }

    #[must_use]
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.revealed.contains(&section)
    }
}

/// One-shot lazy-load scheduling for gallery slots.
///
/// Once the gallery section intersects the viewport at all, every slot not
/// yet requested becomes due exactly once. Requests are never retried, even
/// if the load later fails.
#[derive(Debug, Clone, Default)]
pub struct LazyLoader {
    requested: HashSet<usize>,
}

impl LazyLoader {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Slots that should start loading for this scroll sample.
    pub fn due(&mut self, scroll_y: f32, viewport_height: f32, slot_count: usize) -> Vec<usize> {
        let fraction = visible_fraction(
            SectionLayout::top(SectionId::Gallery),
            SectionLayout::height(SectionId::Gallery),
            scroll_y,
            viewport_height,
        );
        if fraction <= 0.0 {
            return Vec::new();
        }

        (0..slot_count)
            .filter(|index| self.requested.insert(*index))
            .collect()
    }

    #[must_use]
    pub fn was_requested(&self, index: usize) -> bool {
        self.requested.contains(&index)
    }
}
