// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at compile time from
//! `assets/i18n/`. The active locale is chosen from, in order: the `--lang`
//! argument, the config file, the operating system, then `en-US`.

pub mod fluent;
