// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` struct and `Kind` enum
//! used throughout the notification system.

use crate::domain::ui::ToastDuration;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a notification.
///
/// Ids come from a process-wide counter and are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// What a notification reports; determines accent color and glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Kind {
    /// Returns the accent color for this kind.
    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Kind::Info => palette::INFO_500,
            Kind::Success => palette::SUCCESS_500,
            Kind::Warning => palette::WARNING_500,
            Kind::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph shown at the left of the toast.
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Kind::Info => "ℹ",
            Kind::Success => "✔",
            Kind::Warning => "⚠",
            Kind::Error => "✖",
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    kind: Kind,
    /// Display text, already localized by the caller.
    message: String,
    /// Time until automatic removal.
    duration: ToastDuration,
}

impl Notification {
    /// Creates a notification with a fresh id.
    pub fn new(kind: Kind, message: impl Into<String>, duration: ToastDuration) -> Self {
        Self {
            id: NotificationId::new(),
            kind,
            message: message.into(),
            duration,
        }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn kind(&self) -> Kind {
        self.kind
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns how long the notification stays before it expires.
    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration.as_duration()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique_and_increasing() {
        let n1 = Notification::new(Kind::Info, "a", ToastDuration::default());
        let n2 = Notification::new(Kind::Info, "a", ToastDuration::default());
        assert_ne!(n1.id(), n2.id());
        assert!(n2.id() > n1.id());
    }

    #[test]
    fn default_kind_is_info() {
        assert_eq!(Kind::default(), Kind::Info);
    }

    #[test]
    fn kind_colors_are_distinct() {
        let colors = [
            Kind::Info.color(),
            Kind::Success.color(),
            Kind::Warning.color(),
            Kind::Error.color(),
        ];
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn accessors_return_constructor_values() {
        let n = Notification::new(Kind::Warning, "Low stock", ToastDuration::from_millis(500));
        assert_eq!(n.kind(), Kind::Warning);
        assert_eq!(n.message(), "Low stock");
        assert_eq!(n.duration(), Duration::from_millis(500));
    }
}
