// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Input events accepted by the controller.
//!
//! Hosts translate their own pointer and toolbar callbacks into [`InkEvent`]s
//! and feed them to [`StrokeController::handle`](crate::StrokeController::handle).

use kurbo::{Point, Vec2};
use peniko::Color;

/// One input event, in surface-local coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum InkEvent {
    /// A pan gesture started.
    StrokeBegin(Point),
    /// The pointer moved during a pan gesture.
    StrokeMove {
        /// New pointer position.
        point: Point,
        /// Pointer velocity in surface units per second, if the host tracks it.
        velocity: Option<Vec2>,
    },
    /// The pan gesture finished normally.
    StrokeEnd(Point),
    /// The host cancelled the pan gesture.
    StrokeCancelled(Point),
    /// A single tap.
    Tap(Point),
    /// The user picked a new ink color.
    ColorSelected(Color),
    /// The user picked a new nominal width.
    WidthChanged(f64),
    /// The user asked to undo the last stroke or tap.
    UndoRequested,
}

impl InkEvent {
    /// Short name used in logs and errors.
    pub fn name(&self) -> &'static str {
        match self {
            Self::StrokeBegin(_) => "begin",
            Self::StrokeMove { .. } => "move",
            Self::StrokeEnd(_) => "end",
            Self::StrokeCancelled(_) => "cancel",
            Self::Tap(_) => "tap",
            Self::ColorSelected(_) => "color",
            Self::WidthChanged(_) => "width",
            Self::UndoRequested => "undo",
        }
    }
}
