// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::config::Config;
use crate::input::KeySymbol;
use crate::playback::Playlist;
use crate::ui::notifications;
use crate::ui::overlay;
use iced::window;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press no widget captured.
    KeyPressed { window: window::Id, key: KeySymbol },
    /// The main window opened.
    WindowOpened(window::Id),
    Controls(overlay::Message),
    Notification(notifications::NotificationMessage),
    /// Periodic tick: drains backend notifications and expires toasts.
    Tick(Instant),
}

/// Startup state resolved by the launcher before the window opens.
#[derive(Debug, Clone)]
pub struct Flags {
    pub playlist: Playlist,
    pub config: Config,
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// i18n key of a warning raised while loading the config, if any.
    pub config_warning: Option<String>,
}
