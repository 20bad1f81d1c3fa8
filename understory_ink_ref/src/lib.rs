// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ink_ref --heading-base-level=0

//! Understory Ink Reference Surface.
//!
//! This crate provides [`RefSurface`], an implementation of [`Canvas`] and
//! [`CommandReceiver`] for **op recording and pass tracing**.
//!
//! It does not rasterize. Its "buffer" is the flattened list of context ops
//! issued by every pass since the last reset, which is enough to check the
//! structural guarantees of the ink engine:
//! - each compositing pass sees exactly the commands it was given,
//! - the buffer after an undo matches a fresh replay of the remaining history,
//! - the paint and stroke state in effect when each draw op was issued.
//!
//! [`Canvas`]: understory_ink::Canvas
//! [`CommandReceiver`]: understory_ink::CommandReceiver

#![no_std]

extern crate alloc;

use alloc::vec::Vec;

use peniko::Color;
use understory_ink::{
    Canvas, CommandReceiver, ContextOp, DrawCommand, DrawContext, DrawOp, StateOp, StrokeStyle,
    SurfaceError,
};

/// Snapshot of the drawing state inside a [`RefContext`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StateSnapshot {
    /// Current paint color, if set.
    pub paint: Option<Color>,
    /// Current stroke style, if set.
    pub stroke: Option<StrokeStyle>,
}

/// Event recorded by a [`RefContext`].
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    /// State operation and the resulting state snapshot.
    State {
        /// State operation that was applied.
        op: StateOp,
        /// Snapshot after applying the state operation.
        state: StateSnapshot,
    },
    /// Draw operation and the state snapshot used for drawing.
    Draw {
        /// Draw operation that was applied.
        op: DrawOp,
        /// Snapshot at the time of drawing.
        state: StateSnapshot,
    },
}

/// Drawing context that records ops instead of rasterizing them.
///
/// Each pass starts with default state, like a freshly created render context.
#[derive(Debug, Default)]
pub struct RefContext {
    events: Vec<Event>,
    ops: Vec<ContextOp>,
    state: StateSnapshot,
}

impl RefContext {
    /// Events recorded since the last clear.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Raw ops recorded since the last clear.
    pub fn ops(&self) -> &[ContextOp] {
        &self.ops
    }

    /// Forget recorded ops and return to default state.
    pub fn clear(&mut self) {
        self.events.clear();
        self.ops.clear();
        self.state = StateSnapshot::default();
    }
}

impl DrawContext for RefContext {
    fn state(&mut self, op: StateOp) {
        match &op {
            StateOp::SetPaint(color) => self.state.paint = Some(*color),
            StateOp::SetStroke(style) => self.state.stroke = Some(style.clone()),
        }
        self.ops.push(ContextOp::State(op.clone()));
        self.events.push(Event::State {
            op,
            state: self.state.clone(),
        });
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(ContextOp::Draw(op.clone()));
        self.events.push(Event::Draw {
            op,
            state: self.state.clone(),
        });
    }
}

/// One compositing pass run by a [`RefSurface`].
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    /// Number of buffer ops the pass started from. Zero after a reset.
    pub underlay: usize,
    /// Commands composited in this pass, in order.
    pub commands: Vec<DrawCommand>,
    /// Events the commands emitted.
    pub events: Vec<Event>,
}

/// Recording surface.
///
/// Every successful [`execute_commands`](CommandReceiver::execute_commands)
/// call appends a [`Frame`] and extends the buffer with the pass's ops.
/// [`reset`](Canvas::reset) drops the buffer.
#[derive(Debug, Default)]
pub struct RefSurface {
    context: RefContext,
    buffer: Option<Vec<ContextOp>>,
    frames: Vec<Frame>,
    resets: usize,
    fail_next: bool,
}

impl RefSurface {
    /// Create an empty surface.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flattened ops of every pass since the last reset, oldest first.
    ///
    /// Empty when nothing has been drawn since the last reset.
    pub fn buffer(&self) -> &[ContextOp] {
        self.buffer.as_deref().unwrap_or_default()
    }

    /// Returns `true` if a buffer is retained.
    pub fn has_buffer(&self) -> bool {
        self.buffer.is_some()
    }

    /// Passes run so far, oldest first.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of times [`reset`](Canvas::reset) was called.
    pub fn resets(&self) -> usize {
        self.resets
    }

    /// The context of the most recent pass.
    pub fn last_context(&self) -> &RefContext {
        &self.context
    }

    /// Make the next pass fail with [`SurfaceError::Unavailable`].
    pub fn fail_next_pass(&mut self) {
        self.fail_next = true;
    }

    /// Forget recorded frames but keep the buffer.
    pub fn clear_frames(&mut self) {
        self.frames.clear();
    }
}

impl Canvas for RefSurface {
    fn context(&mut self) -> &mut dyn DrawContext {
        &mut self.context
    }

    fn reset(&mut self) {
        self.buffer = None;
        self.context.clear();
        self.resets += 1;
        tracing::debug!(resets = self.resets, "reference surface reset");
    }
}

impl CommandReceiver for RefSurface {
    fn execute_commands(&mut self, commands: &[DrawCommand]) -> Result<(), SurfaceError> {
        if self.fail_next {
            self.fail_next = false;
            tracing::warn!("reference surface pass failed on request");
            return Err(SurfaceError::Unavailable);
        }
        self.context.clear();
        for command in commands {
            command.execute(self);
        }

        let mut buffer = self.buffer.take().unwrap_or_default();
        let underlay = buffer.len();
        buffer.extend_from_slice(self.context.ops());
        self.buffer = Some(buffer);
        self.frames.push(Frame {
            underlay,
            commands: commands.to_vec(),
            events: self.context.events().to_vec(),
        });
        tracing::trace!(commands = commands.len(), underlay, "reference pass");
        Ok(())
    }
}
