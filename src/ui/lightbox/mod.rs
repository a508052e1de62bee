// SPDX-License-Identifier: MPL-2.0
//! Modal image lightbox.
//!
//! Renders the selected gallery image above a dimmed backdrop with a toolbar
//! for zoom and close. The zoom/pan state machine lives in [`state`]; this
//! module maps it onto widget geometry. Panning is realized as the scroll
//! offset of the image scrollable, so the app mirrors every transform change
//! to the widget with `scrollable::scroll_to`.

pub mod state;
pub mod wheel_shield;

pub use state::{CursorHint, PanOffset, State, ZoomFactor, MAX_ZOOM, MIN_ZOOM, ZOOM_STEP};

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::mouse;
use iced::widget::scrollable::{AbsoluteOffset, Direction, Scrollbar};
use iced::widget::{
    button, container, image, mouse_area, text, Column, Container, Row, Scrollable, Space,
};
use iced::{
    alignment::{Horizontal, Vertical},
    widget::Id,
    Element, Length, Padding, Size, Theme,
};

/// Identifier of the image scrollable, used to mirror transform changes.
pub const SCROLLABLE_ID: &str = "lightbox-image-scrollable";

#[derive(Debug, Clone, Copy)]
pub enum Message {
    ZoomIn,
    ZoomOut,
    Close,
}

/// What the parent has to do after an update.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Zoom or pan changed; re-sync the scrollable offset.
    TransformChanged,
    /// The lightbox closed.
    Closed,
}

pub fn update(state: &mut State, message: Message) -> Effect {
    match message {
        Message::ZoomIn => {
            if state.zoom_in() {
                Effect::TransformChanged
            } else {
                Effect::None
            }
        }
        Message::ZoomOut => {
            if state.zoom_out() {
                Effect::TransformChanged
            } else {
                Effect::None
            }
        }
        Message::Close => {
            state.close();
            Effect::Closed
        }
    }
}

/// Size of the image viewport between the window margins and the toolbar.
#[must_use]
pub fn image_viewport(window: Size) -> Size {
    Size::new(
        (window.width - 2.0 * sizing::LIGHTBOX_MARGIN).max(0.0),
        (window.height
            - 2.0 * sizing::LIGHTBOX_MARGIN
            - sizing::LIGHTBOX_TOOLBAR_HEIGHT
            - spacing::SM)
            .max(0.0),
    )
}

/// Window position of the image viewport's top-left corner. The modal is
/// centered in the window with the toolbar above the image pane.
#[must_use]
pub fn image_viewport_origin(window: Size) -> iced::Point {
    let viewport = image_viewport(window);
    let modal_height = sizing::LIGHTBOX_TOOLBAR_HEIGHT + spacing::SM + viewport.height;
    iced::Point::new(
        (window.width - viewport.width) / 2.0,
        (window.height - modal_height) / 2.0 + sizing::LIGHTBOX_TOOLBAR_HEIGHT + spacing::SM,
    )
}

/// Whether a window-space cursor position lies over the image viewport.
#[must_use]
pub fn cursor_over_image(window: Size, cursor: iced::Point) -> bool {
    let origin = image_viewport_origin(window);
    let viewport = image_viewport(window);
    cursor.x >= origin.x
        && cursor.x < origin.x + viewport.width
        && cursor.y >= origin.y
        && cursor.y < origin.y + viewport.height
}

/// Size the image renders at before zooming: fitted to the viewport while
/// preserving aspect ratio, never upscaled past its natural size.
#[must_use]
pub fn base_size(dimensions: (u32, u32), viewport: Size) -> Size {
    let (width, height) = dimensions;
    if width == 0 || height == 0 || viewport.width <= 0.0 || viewport.height <= 0.0 {
        return Size::ZERO;
    }

    let scale_x = viewport.width / width as f32;
    let scale_y = viewport.height / height as f32;
    let scale = scale_x.min(scale_y).min(1.0);

    Size::new(width as f32 * scale, height as f32 * scale)
}

/// The image size after applying the zoom factor.
#[must_use]
pub fn scaled_size(base: Size, zoom: ZoomFactor) -> Size {
    Size::new(base.width * zoom.value(), base.height * zoom.value())
}

/// Scroll offset realizing the current transform for the given window size.
#[must_use]
pub fn scroll_offset(
    state: &State,
    dimensions: (u32, u32),
    window: Size,
) -> AbsoluteOffset {
    let viewport = image_viewport(window);
    let scaled = scaled_size(base_size(dimensions, viewport), state.zoom());
    let (x, y) = state.viewport_offset(
        (scaled.width, scaled.height),
        (viewport.width, viewport.height),
    );
    AbsoluteOffset { x, y }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
    pub handle: &'a image::Handle,
    pub dimensions: (u32, u32),
    pub window: Size,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let viewport = image_viewport(ctx.window);
    let scaled = scaled_size(base_size(ctx.dimensions, viewport), ctx.state.zoom());

    let toolbar = toolbar(&ctx, viewport.width);

    let picture = image(ctx.handle.clone())
        .width(Length::Fixed(scaled.width))
        .height(Length::Fixed(scaled.height))
        .content_fit(iced::ContentFit::Fill);

    // Center small images inside the viewport; large ones overflow and scroll.
    let padding = centering_padding(scaled, viewport);
    let framed = Container::new(picture).padding(padding);

    let image_pane = Scrollable::new(framed)
        .id(Id::new(SCROLLABLE_ID))
        .width(Length::Fixed(viewport.width))
        .height(Length::Fixed(viewport.height))
        .direction(Direction::Both {
            vertical: Scrollbar::hidden(),
            horizontal: Scrollbar::hidden(),
        });

    // The wheel belongs to zoom; without the shield the scrollable would
    // also scroll natively and drift away from the zoom/pan state.
    let image_pane = wheel_shield::wheel_shield(image_pane);

    let image_pane = mouse_area(image_pane).interaction(cursor_interaction(ctx.state));

    let modal = Column::new()
        .spacing(spacing::SM)
        .push(toolbar)
        .push(image_pane);

    container(modal)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .align_y(Vertical::Center)
        .style(styles::container::backdrop)
        .into()
}

fn toolbar<'a>(ctx: &ViewContext<'a>, width: f32) -> Element<'a, Message> {
    let zoom_percent = format!("{:.0}%", ctx.state.zoom().value() * 100.0);

    let mut zoom_out = button(text(ctx.i18n.tr("lightbox-zoom-out")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay);
    if !ctx.state.zoom().is_min() {
        zoom_out = zoom_out.on_press(Message::ZoomOut);
    }

    let mut zoom_in = button(text(ctx.i18n.tr("lightbox-zoom-in")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay);
    if !ctx.state.zoom().is_max() {
        zoom_in = zoom_in.on_press(Message::ZoomIn);
    }

    let close = button(text(ctx.i18n.tr("lightbox-close")).size(typography::BODY))
        .on_press(Message::Close)
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::overlay);

    Row::new()
        .width(Length::Fixed(width))
        .height(Length::Fixed(sizing::LIGHTBOX_TOOLBAR_HEIGHT))
        .spacing(spacing::XS)
        .align_y(Vertical::Center)
        .push(zoom_out)
        .push(
            text(zoom_percent)
                .size(typography::CAPTION)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(iced::Color::WHITE),
                }),
        )
        .push(zoom_in)
        .push(Space::new().width(Length::Fill))
        .push(close)
        .into()
}

fn centering_padding(content: Size, viewport: Size) -> Padding {
    let horizontal = ((viewport.width - content.width) / 2.0).max(0.0);
    let vertical = ((viewport.height - content.height) / 2.0).max(0.0);

    Padding {
        top: vertical,
        right: horizontal,
        bottom: vertical,
        left: horizontal,
    }
}

fn cursor_interaction(state: &State) -> mouse::Interaction {
    match state.cursor_hint() {
        CursorHint::Grabbing => mouse::Interaction::Grabbing,
        CursorHint::Grab => mouse::Interaction::Grab,
        CursorHint::ZoomIn => mouse::Interaction::ZoomIn,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use iced::Point;

    const WINDOW: Size = Size {
        width: 1280.0,
        height: 800.0,
    };

    #[test]
    fn viewport_leaves_room_for_margins_and_toolbar() {
        let viewport = image_viewport(WINDOW);
        assert!(viewport.width < WINDOW.width);
        assert!(viewport.height < WINDOW.height);
        assert!(viewport.width > 0.0);
        assert!(viewport.height > 0.0);
    }

    #[test]
    fn tiny_window_yields_empty_viewport_not_negative() {
        let viewport = image_viewport(Size::new(10.0, 10.0));
        assert_eq!(viewport, Size::ZERO);
    }

    #[test]
    fn cursor_hit_test_matches_the_viewport_rect() {
        let origin = image_viewport_origin(WINDOW);
        let viewport = image_viewport(WINDOW);

        let inside = Point::new(origin.x + 1.0, origin.y + 1.0);
        assert!(cursor_over_image(WINDOW, inside));

        let above_toolbar = Point::new(origin.x + 1.0, origin.y - 1.0);
        assert!(!cursor_over_image(WINDOW, above_toolbar));

        let past_right = Point::new(origin.x + viewport.width + 1.0, origin.y + 1.0);
        assert!(!cursor_over_image(WINDOW, past_right));
    }

    #[test]
    fn base_size_fits_large_images_preserving_aspect() {
        let viewport = Size::new(1000.0, 500.0);
        let base = base_size((4000, 2000), viewport);
        assert_eq!(base, Size::new(1000.0, 500.0));

        let base = base_size((2000, 2000), viewport);
        assert_eq!(base, Size::new(500.0, 500.0));
    }

    #[test]
    fn base_size_never_upscales_small_images() {
        let viewport = Size::new(1000.0, 500.0);
        let base = base_size((200, 100), viewport);
        assert_eq!(base, Size::new(200.0, 100.0));
    }

    #[test]
    fn base_size_handles_degenerate_inputs() {
        assert_eq!(base_size((0, 100), Size::new(100.0, 100.0)), Size::ZERO);
        assert_eq!(base_size((100, 100), Size::ZERO), Size::ZERO);
    }

    #[test]
    fn zooming_scales_the_base_size() {
        let base = Size::new(400.0, 300.0);
        let mut state = State::new();
        state.open(0);
        state.zoom_in();
        let scaled = scaled_size(base, state.zoom());
        assert!((scaled.width - 440.0).abs() < 0.5);
        assert!((scaled.height - 330.0).abs() < 0.5);
    }

    #[test]
    fn update_reports_transform_changes() {
        let mut state = State::new();
        state.open(0);

        assert_eq!(update(&mut state, Message::ZoomIn), Effect::TransformChanged);

        while state.zoom_in() {}
        assert_eq!(update(&mut state, Message::ZoomIn), Effect::None);

        assert_eq!(update(&mut state, Message::Close), Effect::Closed);
        assert!(!state.is_open());
    }

    #[test]
    fn scroll_offset_is_zero_while_image_fits() {
        let mut state = State::new();
        state.open(0);
        let offset = scroll_offset(&state, (400, 300), WINDOW);
        assert_eq!(offset.x, 0.0);
        assert_eq!(offset.y, 0.0);
    }

    #[test]
    fn scroll_offset_reflects_pan_while_zoomed() {
        let mut state = State::new();
        state.open(0);
        // Large image so the base size fills the viewport and zooming
        // produces overflow.
        let dimensions = (4000, 4000);
        for _ in 0..10 {
            state.zoom_in();
        }

        let centered = scroll_offset(&state, dimensions, WINDOW);
        assert!(centered.x > 0.0);
        assert!(centered.y > 0.0);

        state.drag_start(Point::new(0.0, 0.0));
        state.drag_move(Point::new(30.0, 0.0));
        let panned = scroll_offset(&state, dimensions, WINDOW);
        assert!(panned.x < centered.x);
        assert_eq!(panned.y, centered.y);
    }
}
