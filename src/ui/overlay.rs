// SPDX-License-Identifier: MPL-2.0
//! Playback overlay: scrub slider, time label and key hints.

use crate::application::port::MediaBackend;
use crate::i18n::fluent::I18n;
use crate::playback::PlaylistController;
use crate::ui::design_tokens::{opacity, palette, radius, sizing, spacing, typography};
use iced::widget::{column, container, row, slider, text, Space};
use iced::{alignment, Color, Element, Length, Theme};

/// Slider step in seconds (1ms precision).
const SLIDER_STEP_SECS: f64 = 0.001;

/// Messages emitted by the overlay.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    /// Slider is being dragged. Position in seconds, no seek yet.
    SeekPreview(f64),

    /// Slider released: seek to the previewed position.
    SeekCommit,
}

/// Contextual data needed to render the overlay.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// What the overlay displays, read from the controller once per frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OverlayState {
    /// Slider value: the preview while dragging, otherwise the position.
    pub slider_secs: f64,
    pub max_secs: f64,
    /// `None` until the backend reported a duration.
    pub duration_secs: Option<f64>,
}

impl OverlayState {
    pub fn from_controller<B: MediaBackend>(controller: &PlaylistController<B>) -> Self {
        let scrub = controller.scrub();
        Self {
            slider_secs: scrub.displayed_secs(),
            max_secs: scrub.max_secs(),
            duration_secs: controller
                .active_session()
                .duration()
                .map(|d| d.as_secs_f64()),
        }
    }
}

/// Renders the overlay panel anchored to the bottom of the window.
pub fn view<'a>(ctx: ViewContext<'a>, state: OverlayState) -> Element<'a, Message> {
    let time_label = text(time_label(ctx.i18n, state)).size(typography::BODY);

    // Without a duration there is no range to scrub over.
    let timeline: Element<'a, Message> = if state.duration_secs.is_some() {
        slider(0.0..=state.max_secs, state.slider_secs, Message::SeekPreview)
            .on_release(Message::SeekCommit)
            .step(SLIDER_STEP_SECS)
            .width(Length::Fill)
            .into()
    } else {
        Space::new().width(Length::Fill).into()
    };

    let controls = row![timeline, time_label]
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center);

    let hint = text(ctx.i18n.tr("overlay-hint"))
        .size(typography::CAPTION)
        .color(palette::GRAY_200);

    let panel = container(column![controls, hint].spacing(spacing::XS))
        .padding(spacing::SM)
        .max_width(sizing::OVERLAY_MAX_WIDTH)
        .style(panel_style);

    container(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Bottom)
        .padding(spacing::LG)
        .into()
}

fn time_label(i18n: &I18n, state: OverlayState) -> String {
    let position = format_time(state.slider_secs);
    let duration = match state.duration_secs {
        Some(secs) => format_time(secs),
        None => i18n.tr("overlay-unknown-duration"),
    };
    i18n.tr_with_args(
        "overlay-position",
        &[("position", position.as_str()), ("duration", duration.as_str())],
    )
}

fn panel_style(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(iced::Background::Color(Color {
            a: opacity::OVERLAY_STRONG,
            ..palette::BLACK
        })),
        border: iced::Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Formats seconds as `MM:SS`, or `HH:MM:SS` past the hour.
pub fn format_time(seconds: f64) -> String {
    let total_secs = seconds.max(0.0) as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
