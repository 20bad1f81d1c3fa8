// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered log of committed ink.
//!
//! History is the source of truth for what has been drawn: the surface
//! buffer is a cache that can always be rebuilt by replaying it. Entries are
//! only ever appended at the end or removed from the end.

use alloc::vec::Vec;

use crate::command::{CircleCommand, CompositeCommand, DrawCommand};

/// Top-level commands in the order they were committed.
///
/// Each entry is one undo unit: a tap (a circle) or a stroke (a composite).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct History {
    entries: Vec<DrawCommand>,
}

impl History {
    /// Create an empty history.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a tap.
    pub fn push_tap(&mut self, circle: CircleCommand) {
        self.entries.push(DrawCommand::Circle(circle));
    }

    /// Append a completed stroke.
    pub fn push_stroke(&mut self, stroke: CompositeCommand) {
        self.entries.push(DrawCommand::Composite(stroke));
    }

    /// Remove and return the most recent entry.
    #[inline]
    pub fn pop(&mut self) -> Option<DrawCommand> {
        self.entries.pop()
    }

    /// The most recent entry.
    #[inline]
    pub fn last(&self) -> Option<&DrawCommand> {
        self.entries.last()
    }

    /// All entries, oldest first. This is the order to replay them in.
    #[inline]
    pub fn as_slice(&self) -> &[DrawCommand] {
        &self.entries
    }

    /// Iterate entries, oldest first.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, DrawCommand> {
        self.entries.iter()
    }

    /// Number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been committed.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
