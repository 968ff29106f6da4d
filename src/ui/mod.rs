// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: each one
//! borrows what it displays and emits its own message type, which the
//! application maps into [`crate::app::Message`].
//!
//! - [`video_pane`] - render surface for the bound session
//! - [`overlay`] - scrub slider, time label and key hints
//! - [`notifications`] - toast notifications
//! - [`design_tokens`] - design system constants (colors, spacing, sizing)

pub mod design_tokens;
pub mod notifications;
pub mod overlay;
pub mod video_pane;
