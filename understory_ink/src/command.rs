// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draw commands: self-rendering units of ink.
//!
//! A command carries everything it needs to render (geometry and a captured
//! style), so executing the same command against a freshly reset surface of
//! the same size always yields the same pixels. That property is what lets
//! undo rebuild the buffer by replaying history.
//!
//! ```
//! use kurbo::Point;
//! use understory_ink::{DrawCommand, InkStyle, LineCommand, Segment};
//!
//! let ab = Segment::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
//! let bc = Segment::new(Point::new(10.0, 0.0), Point::new(20.0, 10.0));
//! let line = LineCommand::new(bc, Some(ab), InkStyle::default());
//!
//! // The smoothed segment starts at the previous segment's midpoint.
//! let first = line.path().elements()[0];
//! assert_eq!(first, kurbo::PathEl::MoveTo(Point::new(5.0, 0.0)));
//! # let _ = DrawCommand::Line(line);
//! ```

use alloc::vec::Vec;

use kurbo::{BezPath, Cap, Circle, Join, Point};
use peniko::Color;

use crate::context::{DrawContext, DrawOp, StateOp, StrokeStyle};
use crate::geometry::Segment;
use crate::style::InkStyle;
use crate::surface::Canvas;

/// One segment of a stroke.
///
/// Without a previous segment this draws a straight line from `a` to `b`.
/// With one, it draws a quadratic curve from the previous midpoint, through
/// `current.a` as control point, to the current midpoint. Consecutive curves
/// therefore share endpoints and tangents, hiding the angular joints between
/// short segments.
#[derive(Clone, Debug, PartialEq)]
pub struct LineCommand {
    current: Segment,
    previous: Option<Segment>,
    style: InkStyle,
}

impl LineCommand {
    /// Create a line command.
    #[inline]
    pub fn new(current: Segment, previous: Option<Segment>, style: InkStyle) -> Self {
        Self {
            current,
            previous,
            style,
        }
    }

    /// The segment this command draws.
    #[inline]
    pub fn current(&self) -> Segment {
        self.current
    }

    /// The segment used for curve smoothing, if any.
    #[inline]
    pub fn previous(&self) -> Option<Segment> {
        self.previous
    }

    /// Style captured when the command was created.
    #[inline]
    pub fn style(&self) -> InkStyle {
        self.style
    }

    /// Path geometry handed to the context.
    pub fn path(&self) -> BezPath {
        let mut path = BezPath::new();
        match self.previous {
            None => {
                path.move_to(self.current.a());
                path.line_to(self.current.b());
            }
            Some(previous) => {
                path.move_to(previous.midpoint());
                path.quad_to(self.current.a(), self.current.midpoint());
            }
        }
        path
    }

    /// Stroke style handed to the context: the captured width with round caps and joins.
    pub fn stroke(&self) -> StrokeStyle {
        StrokeStyle::new(self.style.width)
            .with_caps(Cap::Round)
            .with_join(Join::Round)
    }

    fn render(&self, cx: &mut dyn DrawContext) {
        cx.state(StateOp::SetPaint(self.style.color));
        cx.state(StateOp::SetStroke(self.stroke()));
        cx.draw(DrawOp::StrokePath(self.path()));
    }
}

/// A filled dot, used for taps.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CircleCommand {
    center: Point,
    radius: f64,
    color: Color,
}

impl CircleCommand {
    /// Create a dot of the given radius.
    #[inline]
    pub fn new(center: Point, radius: f64, color: Color) -> Self {
        Self {
            center,
            radius,
            color,
        }
    }

    /// Create a dot whose diameter is the style's width.
    #[inline]
    pub fn from_style(center: Point, style: InkStyle) -> Self {
        Self::new(center, style.width / 2.0, style.color)
    }

    /// Center of the dot.
    #[inline]
    pub fn center(&self) -> Point {
        self.center
    }

    /// Radius of the dot.
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Fill color.
    #[inline]
    pub fn color(&self) -> Color {
        self.color
    }

    fn render(&self, cx: &mut dyn DrawContext) {
        cx.state(StateOp::SetPaint(self.color));
        cx.draw(DrawOp::FillCircle(Circle::new(self.center, self.radius)));
    }
}

/// An ordered group of commands that is undone and replayed as one unit.
///
/// The controller collects every segment of a stroke into one composite.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompositeCommand {
    children: Vec<DrawCommand>,
}

impl CompositeCommand {
    /// Create an empty composite.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a child command.
    #[inline]
    pub fn push(&mut self, command: DrawCommand) {
        self.children.push(command);
    }

    /// Child commands in insertion order.
    #[inline]
    pub fn children(&self) -> &[DrawCommand] {
        &self.children
    }

    /// Number of direct children.
    #[inline]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    fn render(&self, cx: &mut dyn DrawContext) {
        for child in &self.children {
            child.render(cx);
        }
    }
}

impl FromIterator<DrawCommand> for CompositeCommand {
    fn from_iter<I: IntoIterator<Item = DrawCommand>>(iter: I) -> Self {
        Self {
            children: iter.into_iter().collect(),
        }
    }
}

/// A unit of ink that knows how to render itself.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    /// A straight or smoothed stroke segment.
    Line(LineCommand),
    /// A filled dot.
    Circle(CircleCommand),
    /// A group of commands forming one undo unit.
    Composite(CompositeCommand),
}

impl DrawCommand {
    /// Render onto `canvas` through its active drawing context.
    ///
    /// This must only be called from inside a compositing pass.
    #[inline]
    pub fn execute<C: Canvas + ?Sized>(&self, canvas: &mut C) {
        self.render(canvas.context());
    }

    /// Render directly into a drawing context.
    pub fn render(&self, cx: &mut dyn DrawContext) {
        match self {
            Self::Line(line) => line.render(cx),
            Self::Circle(circle) => circle.render(cx),
            Self::Composite(composite) => composite.render(cx),
        }
    }

    /// Number of non-composite commands reachable from this one.
    pub fn leaf_count(&self) -> usize {
        match self {
            Self::Line(_) | Self::Circle(_) => 1,
            Self::Composite(composite) => composite.children.iter().map(Self::leaf_count).sum(),
        }
    }
}

impl From<LineCommand> for DrawCommand {
    fn from(line: LineCommand) -> Self {
        Self::Line(line)
    }
}

impl From<CircleCommand> for DrawCommand {
    fn from(circle: CircleCommand) -> Self {
        Self::Circle(circle)
    }
}

impl From<CompositeCommand> for DrawCommand {
    fn from(composite: CompositeCommand) -> Self {
        Self::Composite(composite)
    }
}
