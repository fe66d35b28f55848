// SPDX-License-Identifier: MPL-2.0
//! UI domain types.
//!
//! Value objects for the dashboard shell that do not depend on any
//! presentation framework.

pub mod newtypes;

pub use newtypes::{MobileBreakpoint, ToastCapacity, ToastDuration};
