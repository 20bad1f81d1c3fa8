// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point and segment math used to build stroke geometry.
//!
//! Everything here is pure. Non-finite coordinates are not rejected; they
//! propagate through the arithmetic and it is up to the event source to
//! deliver finite positions.

use kurbo::Point;

/// Midpoint of `a` and `b`, computed as `((a.x + b.x) / 2, (a.y + b.y) / 2)`.
#[inline]
pub fn midpoint(a: Point, b: Point) -> Point {
    Point::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0)
}

/// An ordered pair of pointer samples bridging two consecutive positions.
///
/// The midpoint is derived once at construction. Consecutive segments are
/// joined by a quadratic curve running from the previous segment's midpoint
/// to the current one's, with the shared sample as control point.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Segment {
    a: Point,
    b: Point,
    midpoint: Point,
}

impl Segment {
    /// Create a segment from `a` to `b`.
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Self {
            a,
            b,
            midpoint: midpoint(a, b),
        }
    }

    /// Start of the segment.
    #[inline]
    pub fn a(&self) -> Point {
        self.a
    }

    /// End of the segment.
    #[inline]
    pub fn b(&self) -> Point {
        self.b
    }

    /// Midpoint between [`Segment::a`] and [`Segment::b`].
    #[inline]
    pub fn midpoint(&self) -> Point {
        self.midpoint
    }

    /// Euclidean length of the segment.
    #[inline]
    pub fn length(&self) -> f64 {
        self.a.distance(self.b)
    }

    /// Returns `true` if both endpoints coincide.
    ///
    /// Degenerate segments still render; with round caps they show up as a dot.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.a == self.b
    }
}
