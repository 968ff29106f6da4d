// SPDX-License-Identifier: MPL-2.0
//! Two-way binding between the seek slider and the active session.
//!
//! Backend position updates flow into the slider through
//! [`ScrubBinding::sync_position`]. User drags only produce a preview; a seek
//! is issued once, on release, through [`ScrubBinding::commit`].
//!
//! Syncs only write the drawn value and never touch the pending preview, so a
//! programmatic update can never be committed as a user seek. Both run on the
//! UI thread, one message at a time, so no re-entrancy guard is needed.

use std::time::Duration;

/// Slider state expressed in seconds, the unit the slider widget works in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrubBinding {
    value_secs: f64,
    max_secs: f64,
    preview_secs: Option<f64>,
}

impl ScrubBinding {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Points the slider at a newly bound session, dropping any preview.
    pub fn rebind(&mut self, duration: Option<Duration>, position: Duration) {
        self.preview_secs = None;
        self.set_range(duration);
        self.sync_position(position);
    }

    /// Sets the upper bound. An unknown duration yields an empty range.
    pub fn set_range(&mut self, duration: Option<Duration>) {
        self.max_secs = duration.map_or(0.0, |duration| duration.as_secs_f64());
    }

    /// Writes a backend-reported position into the slider.
    pub fn sync_position(&mut self, position: Duration) {
        self.value_secs = position.as_secs_f64();
    }

    /// Records the value the user is dragging to.
    pub fn preview(&mut self, secs: f64) {
        self.preview_secs = Some(secs.clamp(0.0, self.max_secs.max(0.0)));
    }

    /// Consumes the pending preview and returns the seek target, if any.
    pub fn commit(&mut self) -> Option<Duration> {
        let target = self.preview_secs.take()?;
        self.value_secs = target;
        Some(secs_to_duration(target))
    }

    /// Value the slider should draw: the preview while dragging, otherwise
    /// the last synced position.
    #[must_use]
    pub fn displayed_secs(&self) -> f64 {
        self.preview_secs.unwrap_or(self.value_secs)
    }

    #[must_use]
    pub fn value_secs(&self) -> f64 {
        self.value_secs
    }

    #[must_use]
    pub fn max_secs(&self) -> f64 {
        self.max_secs
    }

    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.preview_secs.is_some()
    }
}

/// Converts slider seconds to a duration, flooring negatives and NaN at zero.
#[must_use]
pub fn secs_to_duration(secs: f64) -> Duration {
    if secs.is_nan() || secs <= 0.0 {
        return Duration::ZERO;
    }
    Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn sync_never_leaves_a_pending_seek() {
        let mut scrub = ScrubBinding::new();
        scrub.rebind(Some(Duration::from_secs(60)), Duration::ZERO);

        scrub.sync_position(Duration::from_secs(12));
        assert!(!scrub.is_previewing());
        assert_eq!(scrub.commit(), None);
        assert_abs_diff_eq!(scrub.value_secs(), 12.0);
    }

    #[test]
    fn drag_then_release_produces_one_seek() {
        let mut scrub = ScrubBinding::new();
        scrub.rebind(Some(Duration::from_secs(60)), Duration::ZERO);

        scrub.preview(10.0);
        scrub.preview(20.0);
        scrub.preview(30.0);
        assert_abs_diff_eq!(scrub.displayed_secs(), 30.0);

        assert_eq!(scrub.commit(), Some(Duration::from_secs(30)));
        assert_eq!(scrub.commit(), None);
    }

    #[test]
    fn preview_survives_position_updates_until_release() {
        let mut scrub = ScrubBinding::new();
        scrub.rebind(Some(Duration::from_secs(60)), Duration::ZERO);

        scrub.preview(40.0);
        scrub.sync_position(Duration::from_secs(2));
        assert_abs_diff_eq!(scrub.displayed_secs(), 40.0);
        assert_eq!(scrub.commit(), Some(Duration::from_secs(40)));
    }

    #[test]
    fn preview_is_clamped_to_range() {
        let mut scrub = ScrubBinding::new();
        scrub.rebind(Some(Duration::from_secs(60)), Duration::ZERO);

        scrub.preview(100.0);
        assert_eq!(scrub.commit(), Some(Duration::from_secs(60)));

        scrub.preview(-5.0);
        assert_eq!(scrub.commit(), Some(Duration::ZERO));
    }

    #[test]
    fn unknown_duration_gives_empty_range() {
        let mut scrub = ScrubBinding::new();
        scrub.rebind(None, Duration::ZERO);
        assert_abs_diff_eq!(scrub.max_secs(), 0.0);
    }

    #[test]
    fn rebind_drops_pending_preview() {
        let mut scrub = ScrubBinding::new();
        scrub.rebind(Some(Duration::from_secs(60)), Duration::ZERO);
        scrub.preview(30.0);

        scrub.rebind(Some(Duration::from_secs(90)), Duration::from_secs(5));
        assert_eq!(scrub.commit(), None);
        assert_abs_diff_eq!(scrub.max_secs(), 90.0);
        assert_abs_diff_eq!(scrub.displayed_secs(), 5.0);
    }

    #[test]
    fn secs_to_duration_floors_invalid_values() {
        assert_eq!(secs_to_duration(-1.0), Duration::ZERO);
        assert_eq!(secs_to_duration(f64::NAN), Duration::ZERO);
        assert_eq!(secs_to_duration(1.5), Duration::from_millis(1500));
        assert_eq!(secs_to_duration(f64::INFINITY), Duration::MAX);
    }
}
