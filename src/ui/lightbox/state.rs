// SPDX-License-Identifier: MPL-2.0
//! Lightbox interaction state: zoom, pan, and drag.
//!
//! This is the one component with continuous internal state. The state
//! machine is pure; rendering maps it onto widget geometry in the parent
//! module. Invariants:
//!
//! - the zoom factor always stays inside `[MIN_ZOOM, MAX_ZOOM]`;
//! - the pan offset is reset whenever the zoom returns to 1:1 and is only
//!   mutated by an active drag session;
//! - a drag session never outlives one press→release span and can only
//!   begin while zoomed in past 1:1.

use iced::Point;

pub const MIN_ZOOM: f32 = 0.5;
pub const MAX_ZOOM: f32 = 3.0;
pub const ZOOM_STEP: f32 = 0.1;

/// Tolerance for treating an accumulated zoom value as exactly 1:1.
const UNITY_EPSILON: f32 = 1e-4;

/// Zoom factor, guaranteed to be within `[MIN_ZOOM, MAX_ZOOM]`.
///
/// Values a rounding error away from 1.0 snap back to exactly 1.0 so that
/// stepping in and out again always lands on the 1:1 state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFactor(f32);

impl ZoomFactor {
    #[must_use]
    pub fn new(factor: f32) -> Self {
        let clamped = factor.clamp(MIN_ZOOM, MAX_ZOOM);
        if (clamped - 1.0).abs() < UNITY_EPSILON {
            Self(1.0)
        } else {
            Self(clamped)
        }
    }

    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= MIN_ZOOM
    }

    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= MAX_ZOOM
    }

    /// Whether the image is magnified past 1:1 (the precondition for panning).
    #[must_use]
    pub fn is_zoomed_in(self) -> bool {
        self.0 > 1.0
    }

    /// Increases zoom by one step, clamped at the maximum.
    #[must_use]
    pub fn stepped_in(self) -> Self {
        Self::new(self.0 + ZOOM_STEP)
    }

    /// Decreases zoom by one step, clamped at the minimum.
    #[must_use]
    pub fn stepped_out(self) -> Self {
        Self::new(self.0 - ZOOM_STEP)
    }
}

impl Default for ZoomFactor {
    fn default() -> Self {
        Self(1.0)
    }
}

/// Accumulated image translation in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PanOffset {
    pub x: f32,
    pub y: f32,
}

impl PanOffset {
    pub const ZERO: PanOffset = PanOffset { x: 0.0, y: 0.0 };

    fn translated(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// Pointer affordance the view should show over the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorHint {
    /// Not zoomed in; clicking zoom controls is the main affordance.
    ZoomIn,
    /// Zoomed in and ready to pan.
    Grab,
    /// A drag session is active.
    Grabbing,
}

/// Lightbox state machine over `{zoom, pan, drag, origin}`.
#[derive(Debug, Clone, Default)]
pub struct State {
    /// Gallery index of the displayed image; `None` while hidden.
    image: Option<usize>,
    zoom: ZoomFactor,
    pan: PanOffset,
    /// Last pointer sample of the active drag session.
    drag: Option<Point>,
    /// Transform origin within the image viewport; `None` means center.
    origin: Option<Point>,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.image.is_some()
    }

    #[must_use]
    pub fn current_image(&self) -> Option<usize> {
        self.image
    }

    #[must_use]
    pub fn zoom(&self) -> ZoomFactor {
        self.zoom
    }

    #[must_use]
    pub fn pan(&self) -> PanOffset {
        self.pan
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    #[must_use]
    pub fn cursor_hint(&self) -> CursorHint {
        if self.is_dragging() {
            CursorHint::Grabbing
        } else if self.zoom.is_zoomed_in() {
            CursorHint::Grab
        } else {
            CursorHint::ZoomIn
        }
    }

    /// Shows the given image. Zoom and pan reset together.
    pub fn open(&mut self, index: usize) {
        self.image = Some(index);
        self.reset_transform();
    }

    /// Hides the lightbox. Zoom and pan reset together and the transform
    /// origin returns to center.
    pub fn close(&mut self) {
        self.image = None;
        self.reset_transform();
    }

    fn reset_transform(&mut self) {
        self.zoom = ZoomFactor::default();
        self.pan = PanOffset::ZERO;
        self.origin = None;
        self.drag = None;
    }

    /// Zooms in one step. Returns whether the factor changed.
    pub fn zoom_in(&mut self) -> bool {
        let next = self.zoom.stepped_in();
        let changed = next != self.zoom;
        self.zoom = next;
        changed
    }

    /// Zooms out one step. Returns whether the factor changed.
    pub fn zoom_out(&mut self) -> bool {
        let next = self.zoom.stepped_out();
        let changed = next != self.zoom;
        self.zoom = next;
        self.reset_pan_at_unity();
        changed
    }

    /// Wheel zoom over the image. The pointer position becomes the transform
    /// origin for this and subsequent scale operations; the scroll direction
    /// picks the zoom branch. Returns whether anything changed; a tick
    /// clamped at a zoom bound leaves the whole transform untouched,
    /// origin included.
    pub fn wheel_zoom(&mut self, position: Point, delta_y: f32) -> bool {
        if delta_y == 0.0 {
            return false;
        }
        let changed = if delta_y < 0.0 {
            self.zoom_in()
        } else {
            self.zoom_out()
        };
        if changed {
            self.origin = Some(position);
        }
        changed
    }

    /// Begins a drag session. Only permitted while zoomed in past 1:1.
    /// Returns whether a session started.
    pub fn drag_start(&mut self, position: Point) -> bool {
        if !self.zoom.is_zoomed_in() {
            return false;
        }
        self.drag = Some(position);
        true
    }

    /// Accumulates the pointer delta since the last sample into the pan
    /// offset and re-bases the reference point. No-op without an active
    /// session. Returns whether the pan changed.
    pub fn drag_move(&mut self, position: Point) -> bool {
        let Some(last) = self.drag else {
            return false;
        };
        self.pan = self.pan.translated(position.x - last.x, position.y - last.y);
        self.drag = Some(position);
        true
    }

    /// Ends the drag session. Safe to call regardless of where the pointer
    /// was released, or whether a session was active at all.
    pub fn drag_end(&mut self) {
        self.drag = None;
    }

    /// Pan is meaningless at 1:1; clear it the moment the zoom lands there.
    fn reset_pan_at_unity(&mut self) {
        if !self.zoom.is_zoomed_in() {
            self.pan = PanOffset::ZERO;
        }
    }

    /// Viewport scroll offset realizing the current transform.
    ///
    /// The image is laid out at `scaled` size inside a viewport of
    /// `viewport` size. The transform origin picks the anchor fraction of
    /// the overflow span (center when unset); the pan offset then shifts
    /// the image under the viewport. Offsets are clamped to the overflow
    /// span on each axis.
    #[must_use]
    pub fn viewport_offset(
        &self,
        scaled: (f32, f32),
        viewport: (f32, f32),
    ) -> (f32, f32) {
        let (scaled_w, scaled_h) = scaled;
        let (viewport_w, viewport_h) = viewport;

        let span_x = (scaled_w - viewport_w).max(0.0);
        let span_y = (scaled_h - viewport_h).max(0.0);

        let (fx, fy) = match self.origin {
            Some(origin) if viewport_w > 0.0 && viewport_h > 0.0 => (
                (origin.x / viewport_w).clamp(0.0, 1.0),
                (origin.y / viewport_h).clamp(0.0, 1.0),
            ),
            _ => (0.5, 0.5),
        };

        (
            (span_x * fx - self.pan.x).clamp(0.0, span_x),
            (span_y * fy - self.pan.y).clamp(0.0, span_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn open_state() -> State {
        let mut state = State::new();
        state.open(0);
        state
    }

    #[test]
    fn zoom_factor_clamps_to_range() {
        assert_eq!(ZoomFactor::new(9.0).value(), MAX_ZOOM);
        assert_eq!(ZoomFactor::new(0.0).value(), MIN_ZOOM);
        assert_eq!(ZoomFactor::new(1.0).value(), 1.0);
    }

    #[test]
    fn zoom_never_leaves_bounds_under_repeated_steps() {
        let mut state = open_state();
        for _ in 0..100 {
            state.zoom_in();
            assert!(state.zoom().value() <= MAX_ZOOM);
        }
        assert_eq!(state.zoom().value(), MAX_ZOOM);

        for _ in 0..100 {
            state.zoom_out();
            assert!(state.zoom().value() >= MIN_ZOOM);
        }
        assert_eq!(state.zoom().value(), MIN_ZOOM);
    }

    #[test]
    fn step_in_then_out_returns_exactly_to_unity() {
        let mut state = open_state();
        state.zoom_in();
        state.zoom_out();
        assert_eq!(state.zoom().value(), 1.0);
        assert!(!state.zoom().is_zoomed_in());
    }

    #[test]
    fn zoom_at_boundary_reports_no_change() {
        let mut state = open_state();
        while state.zoom_in() {}
        assert_eq!(state.zoom().value(), MAX_ZOOM);
        assert!(!state.zoom_in());
    }

    #[test]
    fn open_resets_zoom_and_pan_atomically() {
        let mut state = open_state();
        state.zoom_in();
        state.zoom_in();
        state.drag_start(Point::new(10.0, 10.0));
        state.drag_move(Point::new(40.0, 25.0));

        state.open(2);

        assert_eq!(state.zoom().value(), 1.0);
        assert_eq!(state.pan(), PanOffset::ZERO);
        assert!(!state.is_dragging());
        assert_eq!(state.current_image(), Some(2));
    }

    #[test]
    fn close_resets_zoom_pan_and_origin() {
        let mut state = open_state();
        state.wheel_zoom(Point::new(100.0, 50.0), -1.0);
        state.close();

        assert!(!state.is_open());
        assert_eq!(state.zoom().value(), 1.0);
        assert_eq!(state.pan(), PanOffset::ZERO);
        // Origin back at center: offsets split the overflow evenly.
        let (x, y) = state.viewport_offset((200.0, 200.0), (100.0, 100.0));
        assert_eq!((x, y), (50.0, 50.0));
    }

    #[test]
    fn wheel_direction_picks_the_zoom_branch() {
        let mut state = open_state();
        assert!(state.wheel_zoom(Point::new(0.0, 0.0), -1.0));
        assert!(state.zoom().value() > 1.0);

        assert!(state.wheel_zoom(Point::new(0.0, 0.0), 1.0));
        assert_eq!(state.zoom().value(), 1.0);

        assert!(!state.wheel_zoom(Point::new(0.0, 0.0), 0.0));
    }

    #[test]
    fn clamped_wheel_tick_keeps_the_transform_origin() {
        let mut state = open_state();
        state.wheel_zoom(Point::new(0.0, 0.0), -1.0);
        while state.zoom_in() {}
        let before = state.viewport_offset((600.0, 600.0), (100.0, 100.0));

        // At the upper bound nothing changes, the origin included, so the
        // derived offset stays where it was.
        assert!(!state.wheel_zoom(Point::new(80.0, 80.0), -1.0));
        assert_eq!(state.viewport_offset((600.0, 600.0), (100.0, 100.0)), before);
    }

    #[test]
    fn drag_requires_zoomed_in() {
        let mut state = open_state();
        assert!(!state.drag_start(Point::new(5.0, 5.0)));
        assert!(!state.drag_move(Point::new(50.0, 50.0)));
        assert_eq!(state.pan(), PanOffset::ZERO);

        state.zoom_in();
        assert!(state.drag_start(Point::new(5.0, 5.0)));
        assert!(state.is_dragging());
    }

    #[test]
    fn drag_move_accumulates_deltas_between_samples() {
        let mut state = open_state();
        state.zoom_in();
        state.drag_start(Point::new(100.0, 100.0));

        state.drag_move(Point::new(110.0, 95.0));
        assert_eq!(state.pan(), PanOffset { x: 10.0, y: -5.0 });

        // Delta from the previous sample, not from the drag origin.
        state.drag_move(Point::new(115.0, 95.0));
        assert_eq!(state.pan(), PanOffset { x: 15.0, y: -5.0 });
    }

    #[test]
    fn drag_session_never_outlives_release() {
        let mut state = open_state();
        state.zoom_in();
        state.drag_start(Point::new(0.0, 0.0));
        state.drag_end();

        assert!(!state.is_dragging());
        assert!(!state.drag_move(Point::new(30.0, 30.0)));
    }

    #[test]
    fn drag_end_without_session_is_harmless() {
        let mut state = open_state();
        state.drag_end();
        assert!(!state.is_dragging());
    }

    #[test]
    fn zooming_back_to_unity_clears_the_pan() {
        let mut state = open_state();
        state.zoom_in();
        state.drag_start(Point::new(0.0, 0.0));
        state.drag_move(Point::new(12.0, 8.0));
        state.drag_end();
        assert_ne!(state.pan(), PanOffset::ZERO);

        state.zoom_out();
        assert_eq!(state.zoom().value(), 1.0);
        assert_eq!(state.pan(), PanOffset::ZERO);
    }

    #[test]
    fn cursor_hint_tracks_the_interaction_state() {
        let mut state = open_state();
        assert_eq!(state.cursor_hint(), CursorHint::ZoomIn);

        state.zoom_in();
        assert_eq!(state.cursor_hint(), CursorHint::Grab);

        state.drag_start(Point::new(0.0, 0.0));
        assert_eq!(state.cursor_hint(), CursorHint::Grabbing);

        state.drag_end();
        assert_eq!(state.cursor_hint(), CursorHint::Grab);
    }

    #[test]
    fn viewport_offset_centers_without_origin() {
        let state = open_state();
        let (x, y) = state.viewport_offset((300.0, 300.0), (100.0, 100.0));
        assert_eq!((x, y), (100.0, 100.0));
    }

    #[test]
    fn viewport_offset_anchors_at_the_wheel_origin() {
        let mut state = open_state();
        state.wheel_zoom(Point::new(0.0, 0.0), -1.0);
        let (x, y) = state.viewport_offset((300.0, 300.0), (100.0, 100.0));
        assert_eq!((x, y), (0.0, 0.0));

        state.wheel_zoom(Point::new(100.0, 100.0), -1.0);
        let (x, y) = state.viewport_offset((300.0, 300.0), (100.0, 100.0));
        assert_eq!((x, y), (200.0, 200.0));
    }

    #[test]
    fn viewport_offset_clamps_the_pan_to_the_overflow_span() {
        let mut state = open_state();
        state.zoom_in();
        state.drag_start(Point::new(0.0, 0.0));
        state.drag_move(Point::new(10_000.0, 10_000.0));
        let (x, y) = state.viewport_offset((300.0, 300.0), (100.0, 100.0));
        assert_eq!((x, y), (0.0, 0.0));

        let mut state = open_state();
        state.zoom_in();
        state.drag_start(Point::new(0.0, 0.0));
        state.drag_move(Point::new(-10_000.0, -10_000.0));
        let (x, y) = state.viewport_offset((300.0, 300.0), (100.0, 100.0));
        assert_eq!((x, y), (200.0, 200.0));
    }

    #[test]
    fn fully_visible_image_never_scrolls() {
        let mut state = open_state();
        state.zoom_in();
        state.drag_start(Point::new(0.0, 0.0));
        state.drag_move(Point::new(5.0, 5.0));
        let (x, y) = state.viewport_offset((80.0, 60.0), (100.0, 100.0));
        assert_eq!((x, y), (0.0, 0.0));
    }
}
