// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard presses are translated into [`KeySymbol`]s here so the rest of
//! the application never sees Iced key types.

use super::Message;
use crate::input::KeySymbol;
use iced::keyboard::{self, key::Named, Key};
use iced::{event, time, window, Subscription};
use std::time::Duration;

/// Routes window-open and uncaptured key-press events.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, window_id| {
        if let event::Event::Window(window::Event::Opened { .. }) = &event {
            return Some(Message::WindowOpened(window_id));
        }

        match (event, status) {
            (
                event::Event::Keyboard(keyboard::Event::KeyPressed { key, .. }),
                event::Status::Ignored,
            ) => key_symbol(&key).map(|key| Message::KeyPressed {
                window: window_id,
                key,
            }),
            _ => None,
        }
    })
}

/// Creates the periodic tick that pumps backend notifications.
pub fn create_tick_subscription(interval: Duration) -> Subscription<Message> {
    time::every(interval).map(Message::Tick)
}

/// Maps an Iced key to the symbol the input router understands.
///
/// Unidentified keys map to `None`: there is nothing meaningful to report.
pub fn key_symbol(key: &Key) -> Option<KeySymbol> {
    let symbol = match key {
        Key::Named(Named::ArrowRight) => KeySymbol::Right,
        Key::Named(Named::ArrowLeft) => KeySymbol::Left,
        Key::Named(Named::Space) => KeySymbol::Space,
        Key::Named(Named::F11) => KeySymbol::ToggleFullscreen,
        Key::Named(Named::Enter) => KeySymbol::Enter,
        Key::Named(named) => KeySymbol::Other(format!("{named:?}")),
        Key::Character(c) => KeySymbol::Other(c.to_string()),
        Key::Unidentified => return None,
    };
    Some(symbol)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bound_keys_translate_to_symbols() {
        let cases = [
            (Named::ArrowRight, KeySymbol::Right),
            (Named::ArrowLeft, KeySymbol::Left),
            (Named::Space, KeySymbol::Space),
            (Named::F11, KeySymbol::ToggleFullscreen),
            (Named::Enter, KeySymbol::Enter),
        ];
        for (named, expected) in cases {
            assert_eq!(key_symbol(&Key::Named(named)), Some(expected));
        }
    }

    #[test]
    fn other_keys_keep_their_name() {
        assert_eq!(
            key_symbol(&Key::Character("q".into())),
            Some(KeySymbol::Other("q".into()))
        );
        assert_eq!(
            key_symbol(&Key::Named(Named::Escape)),
            Some(KeySymbol::Other("Escape".into()))
        );
    }

    #[test]
    fn unidentified_keys_are_dropped() {
        assert_eq!(key_symbol(&Key::Unidentified), None);
    }
}
