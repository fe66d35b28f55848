// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! exposes a `Message`, an `update` returning an `Event` for the application,
//! and a `view` taking a `ViewContext`.
//!
//! # Pages
//!
//! - [`pages`] - Routing from a location to a page, dashboard and inventory
//! - [`product_form`] - "New product" form
//! - [`settings`] - Language, theme and diagnostics export
//!
//! # Shell
//!
//! - [`sidebar`] - Collapsible navigation with active-route highlighting
//! - [`notifications`] - Toast notification queue and overlay
//!
//! # Shared Infrastructure
//!
//! - [`styles`] - Centralized styling (buttons, containers, sidebar)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod notifications;
pub mod pages;
pub mod product_form;
pub mod settings;
pub mod sidebar;
pub mod styles;
pub mod theming;
