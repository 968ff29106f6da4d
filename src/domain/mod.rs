// SPDX-License-Identifier: MPL-2.0
//! Domain layer - plain value types with no framework dependencies.
//!
//! # Modules
//!
//! - [`media`]: media references and video format detection ([`MediaRef`](media::MediaRef))
//! - [`video`]: playback session status ([`SessionStatus`](video::SessionStatus))

pub mod media;
pub mod video;
