// SPDX-License-Identifier: MPL-2.0
//! Render surface for the bound playback session.
//!
//! Frames are not decoded, so the pane shows what is bound to the output:
//! the file name, its place in the playlist and the session status.

use crate::domain::video::SessionStatus;
use crate::i18n::fluent::I18n;
use crate::playback::PlaybackSession;
use crate::ui::design_tokens::{palette, spacing, typography};
use iced::widget::{column, container, text};
use iced::{alignment, Element, Length, Theme};

/// Returns the i18n key for a session status.
#[must_use]
pub fn status_key(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Uninitialized => "status-loading",
        SessionStatus::Ready => "status-ready",
        SessionStatus::Playing => "status-playing",
        SessionStatus::Paused => "status-paused",
        SessionStatus::Ended => "status-ended",
    }
}

/// Renders the pane for the active session of a playlist with `total` entries.
pub fn view<'a, Message: 'a>(
    session: &'a PlaybackSession,
    total: usize,
    i18n: &'a I18n,
) -> Element<'a, Message> {
    let name = text(session.media().file_name()).size(typography::TITLE_LG);

    let position = (session.index() + 1).to_string();
    let total = total.to_string();
    let entry = text(i18n.tr_with_args(
        "video-pane-entry",
        &[("index", position.as_str()), ("total", total.as_str())],
    ))
    .size(typography::TITLE_SM)
    .color(palette::GRAY_200);

    let status = text(i18n.tr(status_key(session.status())))
        .size(typography::BODY)
        .color(palette::PRIMARY_500);

    let content = column![name, entry, status]
        .spacing(spacing::XS)
        .align_x(alignment::Horizontal::Center);

    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(|_theme: &Theme| container::Style {
            background: Some(iced::Background::Color(palette::GRAY_900)),
            text_color: Some(palette::WHITE),
            ..Default::default()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_its_own_label() {
        let keys = [
            SessionStatus::Uninitialized,
            SessionStatus::Ready,
            SessionStatus::Playing,
            SessionStatus::Paused,
            SessionStatus::Ended,
        ]
        .map(status_key);

        for (i, key) in keys.iter().enumerate() {
            assert!(keys[i + 1..].iter().all(|other| other != key));
        }
    }

    #[test]
    fn status_labels_are_translated() {
        let i18n = I18n::new(Some("en-US".into()), &crate::config::Config::default());
        assert_eq!(i18n.tr(status_key(SessionStatus::Paused)), "Paused");
    }
}
