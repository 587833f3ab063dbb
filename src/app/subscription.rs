// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo application.

use super::Message;
use crate::compare;
use iced::{event, Subscription};

/// Routes window close requests so the sweep can be stopped before exit.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, window_id| {
        if let event::Event::Window(iced::window::Event::CloseRequested) = &event {
            return Some(Message::WindowCloseRequested(window_id));
        }
        None
    })
}

/// Forwards the comparison widget's timers (sweep, spinner, wheel idle).
pub fn create_compare_subscription(comparison: &compare::State) -> Subscription<Message> {
    comparison.subscription().map(Message::Compare)
}
