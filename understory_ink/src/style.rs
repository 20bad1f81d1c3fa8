// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ink style captured by each command at creation time.

use peniko::Color;

/// Color and nominal width of the active tool.
///
/// Commands copy the style when they are created, so changing the active
/// style never alters ink that has already been laid down.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct InkStyle {
    /// Paint color.
    pub color: Color,
    /// Line width in surface units. For taps this is the dot diameter.
    pub width: f64,
}

impl InkStyle {
    /// Create a style from a color and width.
    #[inline]
    pub const fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }

    /// Return a copy with a different color.
    #[inline]
    #[must_use]
    pub const fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Return a copy with a different width.
    #[inline]
    #[must_use]
    pub const fn with_width(self, width: f64) -> Self {
        Self { width, ..self }
    }
}

impl Default for InkStyle {
    fn default() -> Self {
        Self::new(Color::BLACK, 5.0)
    }
}
