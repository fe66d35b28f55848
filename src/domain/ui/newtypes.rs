// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for UI values,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Toast Duration Bounds
// =============================================================================

/// Toast display duration constants.
pub mod toast_duration_bounds {
    /// Duration used in place of a zero request, in milliseconds.
    pub const ZERO_FALLBACK_MS: u64 = 100;
    /// Default display duration in milliseconds.
    pub const DEFAULT_MS: u64 = 3_000;
}

// =============================================================================
// ToastDuration
// =============================================================================

/// Time a notification stays on screen before it is removed automatically.
///
/// Any positive duration is kept as requested. A zero request is raised to
/// [`toast_duration_bounds::ZERO_FALLBACK_MS`] instead of meaning
/// "immediately" or "never".
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ToastDuration(u64);

impl ToastDuration {
    /// Creates a new duration from milliseconds; zero becomes the fallback.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        if Self::needs_fallback(millis) {
            Self(toast_duration_bounds::ZERO_FALLBACK_MS)
        } else {
            Self(millis)
        }
    }

    /// Creates a new duration at millisecond precision; zero becomes the
    /// fallback.
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self::from_millis(u64::try_from(duration.as_millis()).unwrap_or(u64::MAX))
    }

    /// Returns whether `millis` is replaced by the fallback.
    #[must_use]
    pub fn needs_fallback(millis: u64) -> bool {
        millis == 0
    }

    /// Returns the value in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the value as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for ToastDuration {
    fn default() -> Self {
        Self(toast_duration_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Toast Capacity Bounds
// =============================================================================

/// Bounds for the optional cap on simultaneously active notifications.
pub mod toast_capacity_bounds {
    /// Smallest accepted cap.
    pub const MIN: usize = 1;
    /// Largest accepted cap.
    pub const MAX: usize = 100;
}

// =============================================================================
// ToastCapacity
// =============================================================================

/// Maximum number of notifications kept active at once (1–100).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToastCapacity(usize);

impl ToastCapacity {
    /// Creates a new capacity, clamping to the valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(toast_capacity_bounds::MIN, toast_capacity_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

// =============================================================================
// Mobile Breakpoint Bounds
// =============================================================================

/// Window width bounds for the mobile layout switch (320 to 2048 px).
pub mod breakpoint_bounds {
    /// Minimum breakpoint in logical pixels.
    pub const MIN: u32 = 320;
    /// Maximum breakpoint in logical pixels.
    pub const MAX: u32 = 2048;
    /// Default breakpoint in logical pixels.
    pub const DEFAULT: u32 = 768;
}

// =============================================================================
// MobileBreakpoint
// =============================================================================

/// Window width below which the dashboard switches to its mobile layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MobileBreakpoint(u32);

impl MobileBreakpoint {
    /// Creates a new breakpoint, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(breakpoint_bounds::MIN, breakpoint_bounds::MAX))
    }

    /// Returns the value in logical pixels.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true when a window of `width` pixels uses the mobile layout.
    #[must_use]
    pub fn is_mobile(self, width: f32) -> bool {
        width < self.0 as f32
    }
}

impl Default for MobileBreakpoint {
    fn default() -> Self {
        Self(breakpoint_bounds::DEFAULT)
    }
}
