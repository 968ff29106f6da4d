// SPDX-License-Identifier: MPL-2.0
//! Application layer - ports the playback core depends on.
//!
//! - [`port`]: trait definitions that infrastructure adapters implement
//!
//! # Dependency Rule
//!
//! - The playback core only talks to the traits in [`port`]
//! - [`crate::infrastructure`] provides the concrete adapters
//! - Tests substitute scripted in-memory implementations

pub mod port;
