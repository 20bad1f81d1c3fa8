// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error types.

use thiserror::Error;

use crate::controller::ControllerState;

/// A compositing pass could not run.
///
/// When a pass fails, the surface keeps its previous buffer untouched.
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum SurfaceError {
    /// The surface bounds cannot back a raster buffer.
    #[error("surface size {width}x{height} cannot be rendered")]
    InvalidSize {
        /// Requested width in pixels.
        width: u32,
        /// Requested height in pixels.
        height: u32,
    },
    /// The surface is not currently able to render.
    #[error("surface is unavailable")]
    Unavailable,
}

/// Errors reported by the [`StrokeController`](crate::StrokeController).
#[derive(Error, Copy, Clone, Debug, PartialEq, Eq)]
pub enum InkError {
    /// A compositing pass failed. The command that triggered it is still recorded.
    #[error(transparent)]
    Surface(#[from] SurfaceError),
    /// A gesture event arrived in a state that cannot accept it.
    ///
    /// Only returned under [`SequencingPolicy::Error`](crate::SequencingPolicy::Error).
    #[error("{event} is not valid while {state:?}")]
    OutOfSequence {
        /// Name of the rejected event.
        event: &'static str,
        /// Controller state at the time.
        state: ControllerState,
    },
}
