// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Handlers borrow the pieces of `App` they need through [`UpdateContext`],
//! which keeps them generic over the media backend and testable without a
//! window.

use super::Message;
use crate::application::port::MediaBackend;
use crate::error::Error;
use crate::input::{self, Command, Input, KeySymbol};
use crate::playback::{OverlayVisibility, PlaylistController};
use crate::ui::notifications::{self, Notification};
use crate::ui::overlay;
use iced::{window, Task};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Mutable application state borrowed by the handlers.
pub struct UpdateContext<'a, B: MediaBackend> {
    pub controller: &'a mut PlaylistController<B>,
    pub overlay: &'a mut OverlayVisibility,
    pub fullscreen: &'a mut bool,
    pub window_id: &'a mut Option<window::Id>,
    pub notifications: &'a mut notifications::Manager,
}

pub fn handle_key(
    ctx: &mut UpdateContext<'_, impl MediaBackend>,
    window: window::Id,
    key: KeySymbol,
) -> Task<Message> {
    *ctx.window_id = Some(window);
    dispatch(ctx, &Input::Key(key))
}

pub fn handle_controls_message(
    ctx: &mut UpdateContext<'_, impl MediaBackend>,
    message: overlay::Message,
) -> Task<Message> {
    match message {
        overlay::Message::SeekPreview(secs) => {
            ctx.controller.scrub_preview(secs);
            Task::none()
        }
        overlay::Message::SeekCommit => dispatch(ctx, &Input::ScrubCommitted),
    }
}

/// Drains backend notifications and expires toasts.
pub fn handle_tick(ctx: &mut UpdateContext<'_, impl MediaBackend>, now: Instant) {
    for error in ctx.controller.pump() {
        report(ctx.notifications, &error);
    }
    ctx.notifications.tick(now);
}

pub fn handle_window_opened(
    ctx: &mut UpdateContext<'_, impl MediaBackend>,
    window: window::Id,
    start_fullscreen: bool,
) -> Task<Message> {
    *ctx.window_id = Some(window);
    update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), start_fullscreen)
}

fn dispatch(ctx: &mut UpdateContext<'_, impl MediaBackend>, input: &Input) -> Task<Message> {
    match input::route(input) {
        Ok(command) => execute(ctx, command),
        Err(error) => {
            report(ctx.notifications, &error);
            Task::none()
        }
    }
}

fn execute(ctx: &mut UpdateContext<'_, impl MediaBackend>, command: Command) -> Task<Message> {
    let result = match command {
        Command::Advance => ctx.controller.advance(),
        Command::Retreat => ctx.controller.retreat(),
        Command::TogglePlayPause => ctx.controller.toggle_play_pause(),
        Command::CommitScrub => ctx.controller.scrub_commit().map(|_| ()),
        Command::ToggleOverlay => {
            ctx.overlay.toggle();
            Ok(())
        }
        Command::ToggleFullscreen => {
            let desired = !*ctx.fullscreen;
            return update_fullscreen_mode(ctx.fullscreen, ctx.window_id.as_ref(), desired);
        }
    };

    if let Err(error) = result {
        report(ctx.notifications, &error);
    }
    Task::none()
}

/// Logs a recovered error and shows a toast when it is user-visible.
fn report(notifications: &mut notifications::Manager, error: &Error) {
    match error {
        Error::NavigationBoundary(_) => info!("{error}"),
        Error::UnrecognizedInput(_) => debug!("{error}"),
        _ => warn!("{error}"),
    }

    if let Some(notification) = Notification::for_error(error) {
        notifications.push(notification);
    }
}

/// Updates fullscreen mode to the desired state.
fn update_fullscreen_mode(
    fullscreen: &mut bool,
    window_id: Option<&window::Id>,
    desired: bool,
) -> Task<Message> {
    if *fullscreen == desired {
        return Task::none();
    }

    let Some(window_id) = window_id else {
        return Task::none();
    };

    *fullscreen = desired;
    let mode = if desired {
        window::Mode::Fullscreen
    } else {
        window::Mode::Windowed
    };
    window::set_mode(*window_id, mode)
}
