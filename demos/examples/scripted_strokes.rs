// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless ink demo.
//!
//! Plays a scripted gesture session through a [`StrokeController`] backed by
//! a Vello CPU surface, then undoes the last few entries. Writes:
//!   - `ink_session.png`: everything drawn
//!   - `ink_after_undo.png`: after undoing the taps and the second stroke
//!
//! Set `RUST_LOG=understory_ink=trace` to see every segment.

use std::cell::Cell;

use peniko::Color;
use understory_ink::{StrokeController, UndoOutcome};
use understory_ink_demos::{init_tracing, scripted_session, write_png};
use understory_ink_vello_cpu::{Buffer, VelloCpuSurface};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let frames = Cell::new(0_usize);
    let surface = VelloCpuSurface::new(320, 256, Color::from_rgba8(250, 248, 240, 255))?
        .with_presenter(|_: &Buffer| frames.set(frames.get() + 1));
    let mut ink = StrokeController::new(surface);

    for event in scripted_session() {
        ink.handle(event)?;
    }
    eprintln!(
        "{} history entries, {} frames presented",
        ink.history().len(),
        frames.get()
    );
    if let Some(buffer) = ink.surface().buffer() {
        write_png("ink_session.png", buffer)?;
    }

    // Four taps, then the second stroke.
    let mut remaining = ink.history().len();
    for _ in 0..5 {
        if let UndoOutcome::Undone { remaining: left } = ink.undo()? {
            remaining = left;
        }
    }
    eprintln!("{remaining} history entries after undo");
    if let Some(buffer) = ink.surface().buffer() {
        write_png("ink_after_undo.png", buffer)?;
    }
    Ok(())
}
