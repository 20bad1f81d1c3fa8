// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_ink_vello_cpu --heading-base-level=0

//! Vello CPU raster surface for Understory Ink.
//!
//! This crate implements [`Canvas`] and [`CommandReceiver`] on top of the
//! sparse-strips [`vello_cpu::RenderContext`]. [`VelloCpuSurface`] retains
//! the rendered image as an immutable [`Buffer`] and republishes it through a
//! [`Presenter`] after every pass.
//!
//! Each pass paints the opaque background, then the previous buffer with
//! nearest-neighbor sampling at identity, then the new commands. With an
//! opaque background and the `u8` pipeline, that copy is exact, so drawing a
//! stroke one segment at a time yields the same bytes as replaying it in one
//! pass.
//!
//! ```
//! use kurbo::Point;
//! use peniko::Color;
//! use understory_ink::StrokeController;
//! use understory_ink_vello_cpu::VelloCpuSurface;
//!
//! let surface = VelloCpuSurface::new(64, 64, Color::WHITE).unwrap();
//! let mut ink = StrokeController::new(surface);
//! ink.tap(Point::new(32.0, 32.0)).unwrap();
//!
//! let buffer = ink.surface().buffer().unwrap();
//! assert_eq!(buffer.pixel(32, 32), Some([0, 0, 0, 255]));
//! ```
//!
//! [`Canvas`]: understory_ink::Canvas
//! [`CommandReceiver`]: understory_ink::CommandReceiver

#![no_std]

extern crate alloc;

mod buffer;
mod context;
mod surface;

pub use buffer::{Buffer, NoPresenter, Presenter};
pub use surface::VelloCpuSurface;
