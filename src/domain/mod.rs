// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core business logic with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) so it can be
//! tested without a window or runtime.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`inventory`]: Product drafts, validation and the session catalogue
//! - [`navigation`]: The current [`Location`](navigation::Location)
//! - [`ui`]: UI value objects ([`ToastDuration`](ui::newtypes::ToastDuration),
//!   [`MobileBreakpoint`](ui::newtypes::MobileBreakpoint))

pub mod diagnostics;
pub mod inventory;
pub mod navigation;
pub mod ui;
