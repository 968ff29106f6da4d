// SPDX-License-Identifier: MPL-2.0
//! `iced_reel` plays a folder of videos one after another in a single,
//! keyboard-controlled window built with the Iced GUI framework.
//!
//! The crate is split the same way as the rest of the application:
//!
//! - [`domain`]: plain value types (media references, session status)
//! - [`application`]: ports the core talks to (media backend, directory lister)
//! - [`playback`]: the playlist/session state machine and the scrub binding
//! - [`input`]: stateless key-to-command routing
//! - [`infrastructure`]: filesystem lister and the clock-driven backend
//! - [`app`] and [`ui`]: the Iced shell

#![doc(html_root_url = "https://docs.rs/iced_reel/0.1.0")]

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod i18n;
pub mod infrastructure;
pub mod input;
pub mod playback;
pub mod ui;

#[cfg(test)]
mod test_utils;
