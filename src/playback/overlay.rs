// SPDX-License-Identifier: MPL-2.0
//! Visibility of the control overlay (scrub bar and time label).

/// Two-state toggle, independent of playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OverlayVisibility {
    Shown,
    #[default]
    Hidden,
}

impl OverlayVisibility {
    /// Flips between shown and hidden.
    pub fn toggle(&mut self) {
        *self = match self {
            Self::Shown => Self::Hidden,
            Self::Hidden => Self::Shown,
        };
    }

    #[must_use]
    pub fn is_shown(self) -> bool {
        matches!(self, Self::Shown)
    }
}
