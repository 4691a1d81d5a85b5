// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Native keyboard, touch, mouse and window events are translated into
//! page-level messages here so the update loop never sees raw events.

use super::message::Shortcut;
use super::Message;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, mouse, time, touch, window, Subscription};
use std::time::Duration;

const SPINNER_TICK: Duration = Duration::from_millis(50);

/// Routes native events to the page.
///
/// Keyboard shortcuts only fire when no widget (the search field, mostly)
/// captured the key. Mouse presses are always reported; whether a widget
/// captured them decides if the search results close.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match event {
        event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }) => {
            if status == event::Status::Captured {
                return None;
            }
            shortcut_for(&key).map(Message::Shortcut)
        }
        event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
            Some(Message::TouchStarted(position.x))
        }
        event::Event::Touch(touch::Event::FingerLifted { position, .. }) => {
            Some(Message::TouchEnded(position.x))
        }
        event::Event::Touch(touch::Event::FingerLost { .. }) => Some(Message::TouchLost),
        event::Event::Mouse(mouse::Event::ButtonPressed(_)) => Some(Message::PointerPressed {
            captured: status == event::Status::Captured,
        }),
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

fn shortcut_for(key: &Key) -> Option<Shortcut> {
    match key {
        Key::Named(Named::ArrowLeft) => Some(Shortcut::Previous),
        Key::Named(Named::ArrowRight) => Some(Shortcut::Next),
        Key::Named(Named::Escape) => Some(Shortcut::Close),
        _ => None,
    }
}

/// Drives the lightbox spinner while an image is loading.
pub fn create_tick_subscription(is_loading: bool) -> Subscription<Message> {
    if is_loading {
        time::every(SPINNER_TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
