// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Surface capabilities consumed by the controller.
//!
//! A surface owns a retained buffer holding every committed piece of ink.
//! New ink is added through compositing passes: each pass paints the
//! background, then the previous buffer, then the new commands, and captures
//! the result as the next buffer.
//!
//! Surfaces are expected to implement both traits. The controller only
//! depends on the traits, so tests can drive it with a recording surface and
//! applications with a pixel surface.

use crate::command::DrawCommand;
use crate::context::DrawContext;
use crate::error::SurfaceError;

/// A drawable area with a retained buffer.
pub trait Canvas {
    /// The drawing context of the active compositing pass.
    ///
    /// Commands call this from [`DrawCommand::execute`]. Ops issued outside a
    /// pass are discarded when the next pass begins.
    fn context(&mut self) -> &mut dyn DrawContext;

    /// Discard the retained buffer and present a background-only image.
    ///
    /// The next pass starts from an empty buffer.
    fn reset(&mut self);
}

/// Something that can composite a batch of commands into its buffer.
pub trait CommandReceiver {
    /// Run one compositing pass over `commands`, in order.
    ///
    /// On error the pass is skipped and the previous buffer is kept.
    fn execute_commands(&mut self, commands: &[DrawCommand]) -> Result<(), SurfaceError>;
}
