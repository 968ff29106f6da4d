// SPDX-License-Identifier: MPL-2.0
//! Key and slider input routing.
//!
//! [`route`] is a pure lookup from an [`Input`] to the [`Command`] it
//! triggers. It holds no state and never panics: anything without a binding
//! comes back as [`Error::UnrecognizedInput`] for the caller to log.

use crate::error::{Error, Result};
use std::fmt;

/// Keyboard symbols the player understands, plus a catch-all.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum KeySymbol {
    Right,
    Left,
    Space,
    /// The fullscreen key (F11).
    ToggleFullscreen,
    Enter,
    /// Any other key, by its display name.
    Other(String),
}

impl fmt::Display for KeySymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeySymbol::Right => f.write_str("Right"),
            KeySymbol::Left => f.write_str("Left"),
            KeySymbol::Space => f.write_str("Space"),
            KeySymbol::ToggleFullscreen => f.write_str("F11"),
            KeySymbol::Enter => f.write_str("Enter"),
            KeySymbol::Other(name) => f.write_str(name),
        }
    }
}

/// A raw user action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Key(KeySymbol),
    /// The user released the seek slider.
    ScrubCommitted,
}

/// What the application should do in response to an [`Input`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Advance,
    Retreat,
    TogglePlayPause,
    ToggleFullscreen,
    ToggleOverlay,
    CommitScrub,
}

/// Maps one input to its command.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedInput`] for keys without a binding.
pub fn route(input: &Input) -> Result<Command> {
    match input {
        Input::Key(KeySymbol::Right) => Ok(Command::Advance),
        Input::Key(KeySymbol::Left) => Ok(Command::Retreat),
        Input::Key(KeySymbol::Space) => Ok(Command::TogglePlayPause),
        Input::Key(KeySymbol::ToggleFullscreen) => Ok(Command::ToggleFullscreen),
        Input::Key(KeySymbol::Enter) => Ok(Command::ToggleOverlay),
        Input::Key(other @ KeySymbol::Other(_)) => Err(Error::UnrecognizedInput(other.to_string())),
        Input::ScrubCommitted => Ok(Command::CommitScrub),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_map_to_one_command_each() {
        let cases = [
            (KeySymbol::Right, Command::Advance),
            (KeySymbol::Left, Command::Retreat),
            (KeySymbol::Space, Command::TogglePlayPause),
            (KeySymbol::ToggleFullscreen, Command::ToggleFullscreen),
            (KeySymbol::Enter, Command::ToggleOverlay),
        ];
        for (key, expected) in cases {
            assert_eq!(route(&Input::Key(key)), Ok(expected));
        }
    }

    #[test]
    fn scrub_release_commits() {
        assert_eq!(route(&Input::ScrubCommitted), Ok(Command::CommitScrub));
    }

    #[test]
    fn unknown_key_is_reported_not_panicked() {
        let result = route(&Input::Key(KeySymbol::Other("Q".into())));
        assert_eq!(result, Err(Error::UnrecognizedInput("Q".into())));
        assert!(!result.unwrap_err().is_fatal());
    }

    #[test]
    fn empty_key_name_is_still_reported() {
        let result = route(&Input::Key(KeySymbol::Other(String::new())));
        assert!(matches!(result, Err(Error::UnrecognizedInput(_))));
    }
}
