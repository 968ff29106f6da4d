// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the playback core and the views.
//!
//! The `App` struct owns the playlist controller, the overlay toggle, the
//! fullscreen flag and the toast manager, and translates Iced messages into
//! controller calls. Policy decisions (window size, start-up playback,
//! theme) live here so user-facing behavior is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config::{Config, ThemeMode};
use crate::i18n::fluent::I18n;
use crate::infrastructure::{ClockBackend, FfmpegProbe};
use crate::playback::{OverlayVisibility, PlaylistController};
use crate::ui::notifications;
use crate::ui::overlay::OverlayState;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use tracing::info;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    controller: PlaylistController<ClockBackend>,
    overlay: OverlayVisibility,
    fullscreen: bool,
    window_id: Option<window::Id>,
    /// Toast notification manager for user feedback.
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("current_index", &self.controller.current_index())
            .field("playlist_len", &self.controller.playlist().len())
            .field("fullscreen", &self.fullscreen)
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 720;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const MIN_WINDOW_HEIGHT: u32 = 360;
pub const MIN_WINDOW_WIDTH: u32 = 640;

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    // iced 0.14 requires the boot function to be `Fn`
    let boot = move || App::new(flags.clone());

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let Flags {
            playlist,
            config,
            lang,
            config_warning,
        } = flags;

        let i18n = I18n::new(lang, &config);
        let mut controller = PlaylistController::new(ClockBackend::new(FfmpegProbe), playlist);

        if config.playback.preload_all {
            controller.preload_all();
        }
        if config.playback.autoplay {
            controller.play_when_ready();
        }

        let mut notifications = notifications::Manager::new();
        if let Some(key) = config_warning {
            notifications.push(notifications::Notification::warning(key));
        }

        info!(
            locale = %i18n.current_locale(),
            entries = controller.playlist().len(),
            "application started"
        );

        let app = App {
            i18n,
            config,
            controller,
            overlay: OverlayVisibility::default(),
            fullscreen: false,
            window_id: None,
            notifications,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        let name = self.controller.active_session().media().file_name();
        self.i18n.tr_with_args("window-title", &[("name", name.as_str())])
    }

    fn theme(&self) -> Theme {
        match self.config.display.theme {
            ThemeMode::Light => Theme::Light,
            ThemeMode::Dark => Theme::Dark,
        }
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub =
            subscription::create_tick_subscription(self.config.playback.tick_interval());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            controller: &mut self.controller,
            overlay: &mut self.overlay,
            fullscreen: &mut self.fullscreen,
            window_id: &mut self.window_id,
            notifications: &mut self.notifications,
        };

        match message {
            Message::KeyPressed { window, key } => update::handle_key(&mut ctx, window, key),
            Message::WindowOpened(window) => update::handle_window_opened(
                &mut ctx,
                window,
                self.config.display.start_fullscreen,
            ),
            Message::Controls(controls) => update::handle_controls_message(&mut ctx, controls),
            Message::Notification(notification) => {
                ctx.notifications.handle_message(&notification);
                Task::none()
            }
            Message::Tick(now) => {
                update::handle_tick(&mut ctx, now);
                Task::none()
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            session: self.controller.active_session(),
            playlist_len: self.controller.playlist().len(),
            overlay: self.overlay,
            overlay_state: OverlayState::from_controller(&self.controller),
            notifications: &self.notifications,
        })
    }
}
