// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Sidebar**: Initial collapse state and mobile breakpoint
//! - **Notifications**: Toast duration and optional cap
//! - **Diagnostics**: Event buffer capacity

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::ui::newtypes::{breakpoint_bounds, toast_capacity_bounds, toast_duration_bounds};

// ==========================================================================
// Sidebar Defaults
// ==========================================================================

/// Whether the desktop sidebar starts as a narrow rail.
pub const DEFAULT_START_COLLAPSED: bool = false;

/// Window widths strictly below this are treated as mobile (logical pixels).
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = breakpoint_bounds::DEFAULT;

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Duration of a toast when the caller gives none (milliseconds).
pub const DEFAULT_TOAST_DURATION_MS: u64 = toast_duration_bounds::DEFAULT_MS;

/// Duration used when a zero duration is requested (milliseconds).
pub const ZERO_TOAST_FALLBACK_MS: u64 = toast_duration_bounds::ZERO_FALLBACK_MS;

/// Largest accepted `max_active` value.
pub const MAX_ACTIVE_TOASTS_LIMIT: usize = toast_capacity_bounds::MAX;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER: usize = buffer_capacity_bounds::DEFAULT;

/// Interval at which pending diagnostic events are drained (milliseconds).
pub const DIAGNOSTICS_DRAIN_INTERVAL_MS: u64 = 1_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(ZERO_TOAST_FALLBACK_MS > 0);
    assert!(DEFAULT_TOAST_DURATION_MS > 0);

    assert!(DEFAULT_MOBILE_BREAKPOINT >= breakpoint_bounds::MIN);
    assert!(DEFAULT_MOBILE_BREAKPOINT <= breakpoint_bounds::MAX);

    assert!(DEFAULT_DIAGNOSTICS_BUFFER >= buffer_capacity_bounds::MIN);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER <= buffer_capacity_bounds::MAX);

    assert!(DIAGNOSTICS_DRAIN_INTERVAL_MS > 0);
};
