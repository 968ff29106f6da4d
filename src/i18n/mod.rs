// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The locale comes from the command line, the config file,
//! or the system settings, and falls back to `en-US`. Keys missing from the
//! selected locale are looked up in `en-US` before being reported as missing.

pub mod fluent;
