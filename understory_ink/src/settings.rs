// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Controller configuration.

use crate::modulate::WidthModulation;
use crate::style::InkStyle;

/// Smallest width any command is drawn with, unless configured otherwise.
pub const DEFAULT_MIN_WIDTH: f64 = 0.5;

/// `min_width` if it is a usable lower bound, otherwise [`DEFAULT_MIN_WIDTH`].
pub(crate) fn valid_min_width(min_width: f64) -> f64 {
    if min_width.is_finite() && min_width > 0.0 {
        min_width
    } else {
        DEFAULT_MIN_WIDTH
    }
}

/// What to do with an event that does not fit the current gesture state,
/// such as a move without a preceding begin.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum SequencingPolicy {
    /// Panic in debug builds, recover silently in release builds.
    ///
    /// Dropping one frame of ink is preferable to crashing mid-interaction,
    /// but integration bugs should still surface during development.
    #[default]
    DebugAssert,
    /// Return [`InkError::OutOfSequence`](crate::InkError::OutOfSequence)
    /// and leave the controller untouched.
    Error,
    /// Log a warning and recover.
    Ignore,
}

/// Configuration for a [`StrokeController`](crate::StrokeController).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InkSettings {
    /// Initial tool style.
    pub style: InkStyle,
    /// Lower bound on every effective width.
    ///
    /// Non-positive or non-finite values are replaced by
    /// [`DEFAULT_MIN_WIDTH`] when the settings are handed to a controller.
    pub min_width: f64,
    /// How pointer velocity affects stroke width.
    pub modulation: WidthModulation,
    /// Handling of out-of-sequence gesture events.
    pub sequencing: SequencingPolicy,
}

impl InkSettings {
    /// Return settings with a different initial style.
    #[must_use]
    pub fn with_style(mut self, style: InkStyle) -> Self {
        self.style = style;
        self
    }

    /// Return settings with a different minimum width.
    ///
    /// Non-positive or non-finite values fall back to [`DEFAULT_MIN_WIDTH`].
    #[must_use]
    pub fn with_min_width(mut self, min_width: f64) -> Self {
        self.min_width = valid_min_width(min_width);
        self
    }

    /// Return settings with a different width modulation.
    #[must_use]
    pub fn with_modulation(mut self, modulation: WidthModulation) -> Self {
        self.modulation = modulation;
        self
    }

    /// Return settings with a different sequencing policy.
    #[must_use]
    pub fn with_sequencing(mut self, sequencing: SequencingPolicy) -> Self {
        self.sequencing = sequencing;
        self
    }
}

impl Default for InkSettings {
    fn default() -> Self {
        Self {
            style: InkStyle::default(),
            min_width: DEFAULT_MIN_WIDTH,
            modulation: WidthModulation::default(),
            sequencing: SequencingPolicy::default(),
        }
    }
}
