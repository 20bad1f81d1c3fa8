// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ink --heading-base-level=0

//! Understory Ink: freehand strokes, incremental compositing, and undo by replay.
//!
//! This crate turns a stream of pointer gestures into ink on a retained
//! raster surface. It is backend-agnostic: commands render through a small
//! drawing-context vocabulary, and surfaces implement two capability traits.
//!
//! # Core concepts
//!
//! - **Commands**: [`DrawCommand`] is a self-contained unit of ink. A
//!   [`LineCommand`] is one stroke segment, smoothed into a quadratic curve
//!   between segment midpoints. A [`CircleCommand`] is a tap. A
//!   [`CompositeCommand`] groups the segments of one stroke.
//! - **Drawing context**: commands emit [`StateOp`]s and [`DrawOp`]s into a
//!   [`DrawContext`] and never touch pixels directly.
//! - **Surfaces**: a [`Canvas`] hands out the context of the active pass and
//!   can [`reset`](Canvas::reset) to the background. A [`CommandReceiver`]
//!   runs a compositing pass: background, then the previous buffer, then the
//!   new commands.
//! - **History**: [`History`] is the ordered log of committed strokes and
//!   taps. It is the source of truth; the surface buffer is a cache of it.
//! - **Controller**: [`StrokeController`] is the gesture state machine. Each
//!   move composites exactly one new segment, so the cost of drawing does not
//!   grow with the amount of ink on the page. Undo resets the surface and
//!   replays the remaining history in one pass.
//!
//! Width follows pointer velocity through [`WidthModulation`]: faster strokes
//! draw thinner, never below the configured minimum width.
//!
//! # Example
//!
//! ```
//! use kurbo::Point;
//! use understory_ink::{
//!     Canvas, CommandReceiver, DrawCommand, DrawContext, DrawOp, StateOp,
//!     StrokeController, SurfaceError, UndoOutcome,
//! };
//!
//! // A surface that only counts what it is asked to draw.
//! #[derive(Default)]
//! struct Counting {
//!     draws: usize,
//! }
//!
//! impl DrawContext for Counting {
//!     fn state(&mut self, _: StateOp) {}
//!     fn draw(&mut self, _: DrawOp) {
//!         self.draws += 1;
//!     }
//! }
//!
//! impl Canvas for Counting {
//!     fn context(&mut self) -> &mut dyn DrawContext {
//!         self
//!     }
//!     fn reset(&mut self) {
//!         self.draws = 0;
//!     }
//! }
//!
//! impl CommandReceiver for Counting {
//!     fn execute_commands(&mut self, commands: &[DrawCommand]) -> Result<(), SurfaceError> {
//!         for command in commands {
//!             command.execute(self);
//!         }
//!         Ok(())
//!     }
//! }
//!
//! let mut ink = StrokeController::new(Counting::default());
//! ink.begin(Point::new(10.0, 10.0)).unwrap();
//! ink.move_to(Point::new(20.0, 10.0), None).unwrap();
//! ink.move_to(Point::new(30.0, 10.0), None).unwrap();
//! ink.end(Point::new(30.0, 10.0)).unwrap();
//! ink.tap(Point::new(50.0, 50.0)).unwrap();
//! assert_eq!(ink.history().len(), 2);
//!
//! // Undo drops the tap and replays the stroke: two segments.
//! assert_eq!(ink.undo().unwrap(), UndoOutcome::Undone { remaining: 1 });
//! assert_eq!(ink.surface().draws, 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`. Diagnostics go through
//! `tracing`; the crate never installs a subscriber.

#![no_std]

extern crate alloc;

mod command;
mod context;
mod controller;
mod error;
mod event;
mod geometry;
mod history;
pub mod modulate;
mod settings;
mod style;
mod surface;

pub use command::{CircleCommand, CompositeCommand, DrawCommand, LineCommand};
pub use context::{ContextOp, DrawContext, DrawOp, StateOp, StrokeStyle};
pub use controller::{ControllerState, StrokeController, UndoOutcome};
pub use error::{InkError, SurfaceError};
pub use event::InkEvent;
pub use geometry::{Segment, midpoint};
pub use history::History;
pub use modulate::WidthModulation;
pub use settings::{DEFAULT_MIN_WIDTH, InkSettings, SequencingPolicy};
pub use style::InkStyle;
pub use surface::{Canvas, CommandReceiver};
