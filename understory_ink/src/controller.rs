// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stroke controller: turns gesture events into committed ink.
//!
//! ## Usage
//!
//! 1) Wrap a surface that implements [`Canvas`] and [`CommandReceiver`] in a
//!    [`StrokeController`].
//! 2) Call [`StrokeController::begin`] when a pan gesture starts.
//! 3) On each pointer move, call [`StrokeController::move_to`]. Every move
//!    composites one smoothed segment onto the surface right away.
//! 4) Finish with [`StrokeController::end`] (or [`StrokeController::cancel`]);
//!    the whole stroke becomes one history entry.
//! 5) Taps draw a dot immediately and become their own history entry.
//! 6) [`StrokeController::undo`] drops the last entry and rebuilds the surface
//!    by replaying what is left.
//!
//! Hosts that already have an event enum can translate it to [`InkEvent`] and
//! call [`StrokeController::handle`] instead.
//!
//! ## Out-of-sequence events
//!
//! Hosts occasionally deliver a move without a begin, or a second begin while
//! a stroke is active. [`SequencingPolicy`] decides whether that is an error,
//! a debug assertion, or something to log and recover from. Recovery drops a
//! stray move, end, or cancel, and treats a begin or tap during a stroke as
//! ending the current stroke first.

use core::slice;

use kurbo::{Point, Vec2};
use peniko::Color;

use crate::command::{CircleCommand, CompositeCommand, DrawCommand, LineCommand};
use crate::error::InkError;
use crate::event::InkEvent;
use crate::geometry::Segment;
use crate::history::History;
use crate::modulate::{clamp_width, modulated_width};
use crate::settings::{InkSettings, SequencingPolicy, valid_min_width};
use crate::style::InkStyle;
use crate::surface::{Canvas, CommandReceiver};

/// Gesture state of a [`StrokeController`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ControllerState {
    /// No stroke in progress.
    Idle,
    /// A stroke has begun and not yet ended.
    Stroking,
}

/// Result of [`StrokeController::undo`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum UndoOutcome {
    /// The last entry was removed and the surface rebuilt.
    Undone {
        /// Entries left in history.
        remaining: usize,
    },
    /// History was empty; nothing changed.
    NothingToUndo,
    /// A stroke is in progress; nothing changed.
    RejectedWhileStroking,
}

#[derive(Debug)]
struct StrokeSession {
    composite: CompositeCommand,
    last_point: Point,
    last_segment: Option<Segment>,
}

/// Strip alpha from an ink color.
///
/// Incremental passes blend new ink over a copy of the previous buffer, while
/// a replay blends every command in one pass. The two only agree bit for bit
/// when ink is opaque.
fn opaque_ink(color: Color) -> Color {
    if color.components[3] < 1.0 {
        tracing::warn!(?color, "translucent ink forced opaque");
        color.with_alpha(1.0)
    } else {
        color
    }
}

/// Drives a surface from gesture events and keeps the undo history.
#[derive(Debug)]
pub struct StrokeController<S> {
    surface: S,
    settings: InkSettings,
    style: InkStyle,
    history: History,
    session: Option<StrokeSession>,
}

impl<S: Canvas + CommandReceiver> StrokeController<S> {
    /// Create a controller with default settings.
    pub fn new(surface: S) -> Self {
        Self::with_settings(surface, InkSettings::default())
    }

    /// Create a controller with the given settings.
    ///
    /// An unusable `min_width` falls back to
    /// [`DEFAULT_MIN_WIDTH`](crate::DEFAULT_MIN_WIDTH), and the initial style
    /// is clamped and made opaque the same way [`Self::set_style`] does.
    pub fn with_settings(surface: S, mut settings: InkSettings) -> Self {
        let min_width = valid_min_width(settings.min_width);
        if min_width != settings.min_width {
            tracing::warn!(
                requested = settings.min_width,
                min_width,
                "invalid minimum width replaced"
            );
            settings.min_width = min_width;
        }
        settings.style = InkStyle::new(
            opaque_ink(settings.style.color),
            clamp_width(settings.style.width, min_width),
        );
        let style = settings.style;
        Self {
            surface,
            settings,
            style,
            history: History::new(),
            session: None,
        }
    }

    /// Start a stroke at `point`.
    pub fn begin(&mut self, point: Point) -> Result<(), InkError> {
        if self.is_stroking() {
            self.out_of_sequence("begin")?;
            self.commit_stroke("restarted");
        }
        tracing::trace!(x = point.x, y = point.y, "stroke begin");
        self.session = Some(StrokeSession {
            composite: CompositeCommand::new(),
            last_point: point,
            last_segment: None,
        });
        Ok(())
    }

    /// Extend the current stroke to `point` and composite the new segment.
    ///
    /// `velocity` is the pointer velocity in surface units per second; it
    /// thins the segment according to the configured
    /// [`WidthModulation`](crate::WidthModulation).
    ///
    /// If the surface fails to composite, the segment is still recorded so a
    /// later undo replay includes it, and the surface error is returned.
    pub fn move_to(&mut self, point: Point, velocity: Option<Vec2>) -> Result<(), InkError> {
        if !self.is_stroking() {
            return self.out_of_sequence("move");
        }
        let Self {
            surface,
            settings,
            style,
            session,
            ..
        } = self;
        let Some(session) = session.as_mut() else {
            return Ok(());
        };

        let width = modulated_width(
            style.width,
            velocity,
            settings.modulation,
            settings.min_width,
        );
        let segment = Segment::new(session.last_point, point);
        let command = DrawCommand::Line(LineCommand::new(
            segment,
            session.last_segment,
            style.with_width(width),
        ));
        tracing::trace!(x = point.x, y = point.y, width, "stroke segment");

        let result = surface.execute_commands(slice::from_ref(&command));
        session.composite.push(command);
        session.last_point = point;
        session.last_segment = Some(segment);

        result.map_err(|err| {
            tracing::warn!(%err, "segment composite failed");
            InkError::from(err)
        })
    }

    /// Finish the current stroke and commit it to history.
    ///
    /// The end point itself is not drawn; the last move already reached it.
    pub fn end(&mut self, point: Point) -> Result<(), InkError> {
        if !self.is_stroking() {
            return self.out_of_sequence("end");
        }
        tracing::trace!(x = point.x, y = point.y, "stroke end");
        self.commit_stroke("ended");
        Ok(())
    }

    /// Finish the current stroke because the host cancelled the gesture.
    ///
    /// The ink is already on the surface, so the stroke is committed exactly
    /// like [`end`](Self::end) and stays undoable.
    pub fn cancel(&mut self, point: Point) -> Result<(), InkError> {
        if !self.is_stroking() {
            return self.out_of_sequence("cancel");
        }
        tracing::trace!(x = point.x, y = point.y, "stroke cancelled");
        self.commit_stroke("cancelled");
        Ok(())
    }

    /// Draw a dot at `point` and commit it to history.
    ///
    /// The dot's diameter is the current nominal width.
    pub fn tap(&mut self, point: Point) -> Result<(), InkError> {
        if self.is_stroking() {
            self.out_of_sequence("tap")?;
            self.commit_stroke("interrupted");
        }
        let circle = CircleCommand::from_style(point, self.style);
        let result = self
            .surface
            .execute_commands(&[DrawCommand::Circle(circle)]);
        self.history.push_tap(circle);
        tracing::debug!(
            x = point.x,
            y = point.y,
            entries = self.history.len(),
            "tap committed"
        );
        result.map_err(|err| {
            tracing::warn!(%err, "tap composite failed");
            InkError::from(err)
        })
    }

    /// Remove the most recent stroke or tap and rebuild the surface.
    ///
    /// The surface is reset and every remaining entry is replayed in a single
    /// compositing pass. When the last entry is undone there is nothing to
    /// replay, so the background-only image published by
    /// [`Canvas::reset`] is the final state. While a stroke is in progress nothing happens and
    /// [`UndoOutcome::RejectedWhileStroking`] is returned.
    pub fn undo(&mut self) -> Result<UndoOutcome, InkError> {
        if self.is_stroking() {
            tracing::warn!("undo rejected while stroking");
            return Ok(UndoOutcome::RejectedWhileStroking);
        }
        if self.history.pop().is_none() {
            tracing::debug!("nothing to undo");
            return Ok(UndoOutcome::NothingToUndo);
        }
        let remaining = self.history.len();
        tracing::debug!(remaining, "undo");
        self.surface.reset();
        if remaining > 0 {
            self.surface
                .execute_commands(self.history.as_slice())
                .map_err(|err| {
                    tracing::warn!(%err, "undo replay failed");
                    InkError::from(err)
                })?;
        }
        Ok(UndoOutcome::Undone { remaining })
    }

    /// Change the ink color for subsequent commands.
    ///
    /// Ink is always opaque; a translucent color is drawn at full alpha.
    pub fn set_color(&mut self, color: Color) {
        self.style.color = opaque_ink(color);
    }

    /// Change the nominal width for subsequent commands.
    ///
    /// Non-finite widths and widths below the configured minimum are clamped.
    pub fn set_width(&mut self, width: f64) {
        let clamped = clamp_width(width, self.settings.min_width);
        if clamped != width {
            tracing::warn!(requested = width, clamped, "width clamped");
        }
        self.style.width = clamped;
    }

    /// Change color and width together.
    pub fn set_style(&mut self, style: InkStyle) {
        self.set_color(style.color);
        self.set_width(style.width);
    }

    /// Dispatch one input event.
    pub fn handle(&mut self, event: InkEvent) -> Result<(), InkError> {
        match event {
            InkEvent::StrokeBegin(point) => self.begin(point),
            InkEvent::StrokeMove { point, velocity } => self.move_to(point, velocity),
            InkEvent::StrokeEnd(point) => self.end(point),
            InkEvent::StrokeCancelled(point) => self.cancel(point),
            InkEvent::Tap(point) => self.tap(point),
            InkEvent::ColorSelected(color) => {
                self.set_color(color);
                Ok(())
            }
            InkEvent::WidthChanged(width) => {
                self.set_width(width);
                Ok(())
            }
            InkEvent::UndoRequested => self.undo().map(|_| ()),
        }
    }

    /// Current gesture state.
    #[inline]
    pub fn state(&self) -> ControllerState {
        if self.session.is_some() {
            ControllerState::Stroking
        } else {
            ControllerState::Idle
        }
    }

    /// Returns `true` while a stroke is in progress.
    #[inline]
    pub fn is_stroking(&self) -> bool {
        self.session.is_some()
    }

    /// Committed entries.
    #[inline]
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Segments of the stroke in progress, if any.
    #[inline]
    pub fn current_stroke(&self) -> Option<&CompositeCommand> {
        self.session.as_ref().map(|session| &session.composite)
    }

    /// Style used for the next command.
    #[inline]
    pub fn style(&self) -> InkStyle {
        self.style
    }

    /// Settings the controller was created with.
    #[inline]
    pub fn settings(&self) -> &InkSettings {
        &self.settings
    }

    /// The wrapped surface.
    #[inline]
    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Mutable access to the wrapped surface.
    ///
    /// Resetting or drawing on the surface directly bypasses history; a later
    /// undo rebuilds the surface from history alone.
    #[inline]
    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Unwrap the surface, discarding history and any stroke in progress.
    #[inline]
    pub fn into_surface(self) -> S {
        self.surface
    }

    fn commit_stroke(&mut self, reason: &'static str) {
        let Some(session) = self.session.take() else {
            return;
        };
        if session.composite.is_empty() {
            tracing::debug!(reason, "empty stroke discarded");
            return;
        }
        let segments = session.composite.len();
        self.history.push_stroke(session.composite);
        tracing::debug!(
            reason,
            segments,
            entries = self.history.len(),
            "stroke committed"
        );
    }

    /// Apply the sequencing policy to an event that does not fit the current state.
    ///
    /// Returns `Ok(())` when the caller should recover.
    fn out_of_sequence(&self, event: &'static str) -> Result<(), InkError> {
        let state = self.state();
        match self.settings.sequencing {
            SequencingPolicy::DebugAssert => {
                debug_assert!(false, "{event} is not valid while {state:?}");
                tracing::warn!(event, ?state, "out-of-sequence event");
                Ok(())
            }
            SequencingPolicy::Error => Err(InkError::OutOfSequence { event, state }),
            SequencingPolicy::Ignore => {
                tracing::warn!(event, ?state, "out-of-sequence event");
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::{ContextOp, DrawContext, DrawOp, StateOp};
    use crate::error::SurfaceError;
    use crate::settings::DEFAULT_MIN_WIDTH;
    use alloc::vec::Vec;

    /// Minimal surface that records passes and resets.
    #[derive(Default)]
    struct Recording {
        passes: Vec<Vec<DrawCommand>>,
        ops: Vec<ContextOp>,
        resets: usize,
        fail: bool,
    }

    impl DrawContext for Recording {
        fn state(&mut self, op: StateOp) {
            self.ops.push(ContextOp::State(op));
        }

        fn draw(&mut self, op: DrawOp) {
            self.ops.push(ContextOp::Draw(op));
        }
    }

    impl Canvas for Recording {
        fn context(&mut self) -> &mut dyn DrawContext {
            self
        }

        fn reset(&mut self) {
            self.resets += 1;
            self.ops.clear();
        }
    }

    impl CommandReceiver for Recording {
        fn execute_commands(&mut self, commands: &[DrawCommand]) -> Result<(), SurfaceError> {
            if self.fail {
                return Err(SurfaceError::Unavailable);
            }
            for command in commands {
                command.execute(self);
            }
            self.passes.push(commands.to_vec());
            Ok(())
        }
    }

    fn p(x: f64, y: f64) -> Point {
        Point::new(x, y)
    }

    fn controller() -> StrokeController<Recording> {
        StrokeController::new(Recording::default())
    }

    fn controller_with(policy: SequencingPolicy) -> StrokeController<Recording> {
        StrokeController::with_settings(
            Recording::default(),
            InkSettings::default().with_sequencing(policy),
        )
    }

    fn draw_stroke(ink: &mut StrokeController<Recording>, points: &[Point]) {
        ink.begin(points[0]).unwrap();
        for &point in &points[1..] {
            ink.move_to(point, None).unwrap();
        }
        ink.end(points[points.len() - 1]).unwrap();
    }

    fn lines(command: &DrawCommand) -> Vec<LineCommand> {
        let DrawCommand::Composite(composite) = command else {
            panic!("expected a composite, got {command:?}");
        };
        composite
            .children()
            .iter()
            .map(|child| match child {
                DrawCommand::Line(line) => line.clone(),
                other => panic!("expected a line, got {other:?}"),
            })
            .collect()
    }

    #[test]
    fn new_controller_is_idle_and_empty() {
        let ink = controller();
        assert_eq!(ink.state(), ControllerState::Idle);
        assert!(ink.history().is_empty());
        assert_eq!(ink.style(), InkStyle::default());
    }

    #[test]
    fn stroke_commits_one_composite_of_chained_segments() {
        let mut ink = controller();
        draw_stroke(&mut ink, &[p(10.0, 10.0), p(20.0, 10.0), p(30.0, 10.0)]);

        assert_eq!(ink.state(), ControllerState::Idle);
        assert_eq!(ink.history().len(), 1);
        let lines = lines(&ink.history().as_slice()[0]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].previous(), None);
        assert_eq!(lines[0].current(), Segment::new(p(10.0, 10.0), p(20.0, 10.0)));
        assert_eq!(lines[1].previous(), Some(lines[0].current()));
        assert_eq!(lines[1].current(), Segment::new(p(20.0, 10.0), p(30.0, 10.0)));
    }

    #[test]
    fn each_move_composites_only_its_own_segment() {
        let mut ink = controller();
        draw_stroke(&mut ink, &[p(0.0, 0.0), p(5.0, 0.0), p(5.0, 5.0)]);

        let passes = &ink.surface().passes;
        assert_eq!(passes.len(), 2, "one pass per move, none for begin or end");
        let committed = lines(&ink.history().as_slice()[0]);
        for (pass, line) in passes.iter().zip(committed) {
            assert_eq!(pass.as_slice(), &[DrawCommand::Line(line)]);
        }
    }

    #[test]
    fn stroke_without_moves_is_not_committed() {
        let mut ink = controller();
        ink.begin(p(1.0, 1.0)).unwrap();
        ink.end(p(1.0, 1.0)).unwrap();
        assert!(ink.history().is_empty());
        assert!(ink.surface().passes.is_empty());
    }

    #[test]
    fn cancelled_stroke_is_committed() {
        let mut ink = controller();
        ink.begin(p(0.0, 0.0)).unwrap();
        ink.move_to(p(3.0, 4.0), None).unwrap();
        ink.cancel(p(3.0, 4.0)).unwrap();
        assert_eq!(ink.state(), ControllerState::Idle);
        assert_eq!(ink.history().len(), 1);
    }

    #[test]
    fn tap_draws_a_dot_immediately() {
        let mut ink = controller();
        ink.set_width(8.0);
        ink.tap(p(50.0, 50.0)).unwrap();

        let expected = CircleCommand::new(p(50.0, 50.0), 4.0, Color::BLACK);
        assert_eq!(ink.history().as_slice(), &[DrawCommand::Circle(expected)]);
        assert_eq!(
            ink.surface().passes,
            [Vec::from([DrawCommand::Circle(expected)])]
        );
    }

    #[test]
    fn velocity_thins_segments() {
        let mut ink = controller();
        ink.set_width(10.0);
        ink.begin(p(0.0, 0.0)).unwrap();
        ink.move_to(p(1.0, 0.0), Some(Vec2::new(600.0, 0.0))).unwrap();
        ink.move_to(p(2.0, 0.0), None).unwrap();
        ink.end(p(2.0, 0.0)).unwrap();

        let lines = lines(&ink.history().as_slice()[0]);
        assert_eq!(lines[0].style().width, 5.0);
        assert_eq!(lines[1].style().width, 10.0);
    }

    #[test]
    fn style_changes_apply_to_the_next_command_only() {
        let mut ink = controller();
        let red = Color::from_rgba8(255, 0, 0, 255);
        ink.begin(p(0.0, 0.0)).unwrap();
        ink.move_to(p(1.0, 0.0), None).unwrap();
        ink.set_color(red);
        ink.move_to(p(2.0, 0.0), None).unwrap();
        ink.end(p(2.0, 0.0)).unwrap();

        let lines = lines(&ink.history().as_slice()[0]);
        assert_eq!(lines[0].style().color, Color::BLACK);
        assert_eq!(lines[1].style().color, red);
    }

    #[test]
    fn degenerate_widths_are_clamped() {
        let mut ink = controller();
        ink.set_width(0.0);
        assert_eq!(ink.style().width, ink.settings().min_width);
        ink.set_width(f64::INFINITY);
        assert_eq!(ink.style().width, ink.settings().min_width);
        ink.set_style(InkStyle::new(Color::WHITE, 3.0));
        assert_eq!(ink.style(), InkStyle::new(Color::WHITE, 3.0));
    }

    #[test]
    fn invalid_min_width_in_settings_falls_back() {
        let settings = InkSettings {
            min_width: -2.0,
            ..InkSettings::default()
        };
        let mut ink = StrokeController::with_settings(Recording::default(), settings);
        assert_eq!(ink.settings().min_width, DEFAULT_MIN_WIDTH);

        ink.set_width(-3.0);
        assert_eq!(ink.style().width, DEFAULT_MIN_WIDTH);

        let settings = InkSettings {
            min_width: f64::NAN,
            style: InkStyle::new(Color::BLACK, 0.0),
            ..InkSettings::default()
        };
        let ink = StrokeController::with_settings(Recording::default(), settings);
        assert_eq!(ink.style().width, DEFAULT_MIN_WIDTH);
    }

    #[test]
    fn translucent_ink_is_drawn_opaque() {
        let translucent = Color::from_rgba8(20, 90, 200, 100);
        let opaque = Color::from_rgba8(20, 90, 200, 255);

        let mut ink = controller();
        ink.set_color(translucent);
        assert_eq!(ink.style().color, opaque);
        ink.tap(p(5.0, 5.0)).unwrap();
        let DrawCommand::Circle(dot) = &ink.history().as_slice()[0] else {
            panic!("expected a circle");
        };
        assert_eq!(dot.color(), opaque);

        let settings = InkSettings::default().with_style(InkStyle::new(translucent, 4.0));
        let ink = StrokeController::with_settings(Recording::default(), settings);
        assert_eq!(ink.style().color, opaque);
        assert_eq!(ink.settings().style.color, opaque);
    }

    #[test]
    fn undo_replays_remaining_history_after_reset() {
        let mut ink = controller();
        draw_stroke(&mut ink, &[p(10.0, 10.0), p(20.0, 10.0), p(30.0, 10.0)]);
        ink.tap(p(50.0, 50.0)).unwrap();
        let before = ink.surface().passes.len();

        assert_eq!(ink.undo().unwrap(), UndoOutcome::Undone { remaining: 1 });
        assert_eq!(ink.surface().resets, 1);
        let passes = &ink.surface().passes;
        assert_eq!(passes.len(), before + 1, "replay is one pass");
        assert_eq!(passes[before].as_slice(), ink.history().as_slice());
    }

    #[test]
    fn undoing_the_last_entry_only_resets() {
        let mut ink = controller();
        ink.tap(p(1.0, 1.0)).unwrap();
        assert_eq!(ink.undo().unwrap(), UndoOutcome::Undone { remaining: 0 });
        assert_eq!(ink.surface().resets, 1);
        assert_eq!(ink.surface().passes.len(), 1);
        assert!(ink.surface().ops.is_empty());
    }

    #[test]
    fn undo_on_empty_history_changes_nothing() {
        let mut ink = controller();
        assert_eq!(ink.undo().unwrap(), UndoOutcome::NothingToUndo);
        assert_eq!(ink.surface().resets, 0);
        assert!(ink.surface().passes.is_empty());
    }

    #[test]
    fn undo_while_stroking_is_rejected() {
        let mut ink = controller();
        ink.tap(p(1.0, 1.0)).unwrap();
        ink.begin(p(0.0, 0.0)).unwrap();
        ink.move_to(p(1.0, 0.0), None).unwrap();

        assert_eq!(ink.undo().unwrap(), UndoOutcome::RejectedWhileStroking);
        assert_eq!(ink.state(), ControllerState::Stroking);
        assert_eq!(ink.history().len(), 1);
        assert_eq!(ink.current_stroke().map(CompositeCommand::len), Some(1));
        assert_eq!(ink.surface().resets, 0);
    }

    #[test]
    fn failed_composite_still_records_the_segment() {
        let mut ink = controller();
        ink.begin(p(0.0, 0.0)).unwrap();
        ink.surface_mut().fail = true;
        let err = ink.move_to(p(1.0, 0.0), None).unwrap_err();
        assert_eq!(err, InkError::Surface(SurfaceError::Unavailable));
        ink.surface_mut().fail = false;
        ink.end(p(1.0, 0.0)).unwrap();

        assert_eq!(ink.history().len(), 1);
        assert!(ink.surface().passes.is_empty());
    }

    #[test]
    fn error_policy_rejects_without_changing_state() {
        let mut ink = controller_with(SequencingPolicy::Error);
        let err = ink.move_to(p(1.0, 1.0), None).unwrap_err();
        assert_eq!(
            err,
            InkError::OutOfSequence {
                event: "move",
                state: ControllerState::Idle
            }
        );
        assert!(ink.end(p(1.0, 1.0)).is_err());
        assert!(ink.cancel(p(1.0, 1.0)).is_err());

        ink.begin(p(0.0, 0.0)).unwrap();
        ink.move_to(p(1.0, 0.0), None).unwrap();
        assert!(ink.begin(p(5.0, 5.0)).is_err());
        assert!(ink.tap(p(5.0, 5.0)).is_err());
        assert_eq!(ink.state(), ControllerState::Stroking);
        assert_eq!(ink.current_stroke().map(CompositeCommand::len), Some(1));
        assert!(ink.history().is_empty());
    }

    #[test]
    fn ignore_policy_recovers() {
        let mut ink = controller_with(SequencingPolicy::Ignore);
        ink.move_to(p(1.0, 1.0), None).unwrap();
        ink.end(p(1.0, 1.0)).unwrap();
        assert!(ink.surface().passes.is_empty());

        ink.begin(p(0.0, 0.0)).unwrap();
        ink.move_to(p(1.0, 0.0), None).unwrap();
        ink.begin(p(9.0, 9.0)).unwrap();
        assert_eq!(ink.history().len(), 1, "first stroke committed");
        ink.move_to(p(9.0, 10.0), None).unwrap();
        ink.tap(p(20.0, 20.0)).unwrap();

        assert_eq!(ink.state(), ControllerState::Idle);
        assert_eq!(ink.history().len(), 3);
        assert!(matches!(
            ink.history().as_slice()[2],
            DrawCommand::Circle(_)
        ));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "move is not valid while Idle")]
    fn debug_assert_policy_panics_in_debug_builds() {
        let mut ink = controller();
        let _ = ink.move_to(p(1.0, 1.0), None);
    }

    #[test]
    fn handle_dispatches_events() {
        let mut ink = controller();
        let events = [
            InkEvent::ColorSelected(Color::WHITE),
            InkEvent::WidthChanged(2.0),
            InkEvent::StrokeBegin(p(10.0, 10.0)),
            InkEvent::StrokeMove {
                point: p(20.0, 10.0),
                velocity: None,
            },
            InkEvent::StrokeEnd(p(20.0, 10.0)),
            InkEvent::Tap(p(5.0, 5.0)),
            InkEvent::UndoRequested,
        ];
        for event in events {
            ink.handle(event).unwrap();
        }
        assert_eq!(ink.style(), InkStyle::new(Color::WHITE, 2.0));
        assert_eq!(ink.history().len(), 1);
        assert!(matches!(
            ink.history().as_slice()[0],
            DrawCommand::Composite(_)
        ));
    }
}
