// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! The page itself only needs window resizes and cursor positions (the
//! cursor must already be current when the lightbox opens, before any
//! further move arrives). While the lightbox is open, the remaining pointer
//! and keyboard events are routed as well so drag-to-pan, wheel zoom,
//! backdrop clicks, and Escape work at the document level rather than per
//! widget.

use super::Message;
use iced::{event, keyboard, mouse, time, window, Subscription};

pub fn create_event_subscription(lightbox_open: bool) -> Subscription<Message> {
    if lightbox_open {
        event::listen_with(lightbox_events)
    } else {
        event::listen_with(window_events)
    }
}

fn window_events(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        _ => None,
    }
}

fn lightbox_events(
    event: event::Event,
    status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        event::Event::Mouse(mouse::Event::CursorMoved { position }) => {
            Some(Message::CursorMoved(position))
        }
        // A press a widget already captured (toolbar buttons) stays with it.
        event::Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left))
            if status == event::Status::Ignored =>
        {
            Some(Message::MouseDown)
        }
        // Releases end the drag session no matter where they land.
        event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
            Some(Message::MouseUp)
        }
        event::Event::Mouse(mouse::Event::WheelScrolled { delta }) => {
            let dy = match delta {
                mouse::ScrollDelta::Lines { y, .. } => y,
                mouse::ScrollDelta::Pixels { y, .. } => y,
            };
            Some(Message::WheelScrolled(dy))
        }
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    }
}

/// Periodic tick driving notification auto-dismiss. Idle when there is
/// nothing to dismiss.
pub fn create_tick_subscription(has_notifications: bool) -> Subscription<Message> {
    if has_notifications {
        time::every(std::time::Duration::from_millis(100)).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
