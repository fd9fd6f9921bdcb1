// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two independent sources: native window events (file drag and drop for
//! the QR panel) and a 16 ms animation tick. The tick subscription only
//! exists while a counter is still tweening or a request is in flight, so
//! no timer keeps running once every animation has reached its terminal
//! state.

use super::Message;
use crate::app::counters::TICK_INTERVAL_MS;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes window file-drag events to the QR drop zone. Hover events only
/// toggle the cosmetic highlight; a drop carries the dropped path.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::FileDropped(path)) = &event {
            return Some(Message::QrFilesDropped(vec![path.clone()]));
        }

        if let event::Event::Window(iced::window::Event::FileHovered(_)) = &event {
            return Some(Message::QrFileHovered);
        }

        if let event::Event::Window(iced::window::Event::FilesHoveredLeft) = &event {
            return Some(Message::QrHoverLeft);
        }

        None
    })
}

/// Animation tick driving the counter tween and the busy spinner.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(Duration::from_millis(TICK_INTERVAL_MS)).map(|_| Message::Tick)
    } else {
        Subscription::none()
    }
}
