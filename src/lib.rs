// SPDX-License-Identifier: MPL-2.0
//! `shelfwise` is a store and inventory admin dashboard built with the Iced
//! GUI framework.
//!
//! The shell pairs a collapsible navigation sidebar, which highlights the
//! link matching the current location, with a toast notification queue used
//! for every piece of user feedback. Both are localized with Fluent and
//! configured through `settings.toml`.

#![doc(html_root_url = "https://docs.rs/shelfwise/0.1.0")]

pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod ui;
