// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Drawing context: the small imaging vocabulary commands render with.
//!
//! Commands never touch pixels or buffers directly. They emit [`StateOp`]s to
//! configure paint and stroke, followed by [`DrawOp`]s that produce coverage.
//! Surfaces implement [`DrawContext`] on top of whatever rasterizer they use;
//! test doubles implement it by recording the ops.

use kurbo::{BezPath, Circle};
use peniko::Color;

/// Stroke style used by [`StateOp::SetStroke`].
///
/// This is a re-export of [`kurbo::Stroke`], which captures width, joins,
/// caps, and dashes.
pub type StrokeStyle = kurbo::Stroke;

/// Operations that mutate the current drawing state.
#[derive(Clone, Debug, PartialEq)]
pub enum StateOp {
    /// Set the solid color used by subsequent fills and strokes.
    SetPaint(Color),
    /// Set the stroke style used by [`DrawOp::StrokePath`].
    SetStroke(StrokeStyle),
}

/// Operations that produce pixels given the current state.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Stroke a path with the current stroke style and paint.
    StrokePath(BezPath),
    /// Fill a circle with the current paint.
    FillCircle(Circle),
}

/// Unified operation used by recordings.
#[derive(Clone, Debug, PartialEq)]
pub enum ContextOp {
    /// State-changing operation.
    State(StateOp),
    /// Drawing operation.
    Draw(DrawOp),
}

/// Target of a compositing pass.
///
/// A context is only meaningful inside a
/// [`CommandReceiver::execute_commands`](crate::CommandReceiver::execute_commands)
/// pass; what a context does with ops issued outside a pass is up to the
/// surface, and they must not be relied upon.
pub trait DrawContext {
    /// Apply a state operation.
    fn state(&mut self, op: StateOp);

    /// Apply a draw operation.
    fn draw(&mut self, op: DrawOp);

    /// Apply either kind of operation.
    #[inline]
    fn apply(&mut self, op: ContextOp) {
        match op {
            ContextOp::State(op) => self.state(op),
            ContextOp::Draw(op) => self.draw(op),
        }
    }
}
