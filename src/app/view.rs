// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the video pane, the overlay (when shown) and the
//! toasts.

use super::Message;
use crate::i18n::fluent::I18n;
use crate::playback::{OverlayVisibility, PlaybackSession};
use crate::ui::notifications::{self, Toast};
use crate::ui::overlay::{self, OverlayState};
use crate::ui::video_pane;
use iced::widget::Stack;
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub session: &'a PlaybackSession,
    pub playlist_len: usize,
    pub overlay: OverlayVisibility,
    pub overlay_state: OverlayState,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(video_pane::view(ctx.session, ctx.playlist_len, ctx.i18n));

    if ctx.overlay.is_shown() {
        layers = layers.push(
            overlay::view(overlay::ViewContext { i18n: ctx.i18n }, ctx.overlay_state)
                .map(Message::Controls),
        );
    }

    layers
        .push(Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification))
        .into()
}
