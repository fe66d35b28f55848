// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Window resizes drive the sidebar's mobile/desktop switch; a slow tick
//! drains the diagnostics channel into its buffer.

use super::Message;
use crate::config::DIAGNOSTICS_DRAIN_INTERVAL_MS;
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Forwards window resizes, whether or not a widget captured the event.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Resized(size)) => Some(Message::WindowResized(size)),
        _ => None,
    })
}

/// Periodic tick that moves pending diagnostic events into the buffer.
pub fn create_diagnostics_subscription() -> Subscription<Message> {
    time::every(Duration::from_millis(DIAGNOSTICS_DRAIN_INTERVAL_MS))
        .map(|_| Message::DiagnosticsTick)
}
