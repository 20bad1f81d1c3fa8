// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Published buffers and the presenter port.

use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vello_cpu::Pixmap;

/// An immutable snapshot of a surface's rendered image.
///
/// Buffers are cheap to clone; each compositing pass produces a new one
/// rather than mutating the previous one in place.
#[derive(Clone)]
pub struct Buffer {
    pixmap: Arc<Pixmap>,
}

impl Buffer {
    pub(crate) fn new(pixmap: Pixmap) -> Self {
        Self {
            pixmap: Arc::new(pixmap),
        }
    }

    pub(crate) fn shared_pixmap(&self) -> Arc<Pixmap> {
        Arc::clone(&self.pixmap)
    }

    /// Width in pixels.
    pub fn width(&self) -> u16 {
        self.pixmap.width()
    }

    /// Height in pixels.
    pub fn height(&self) -> u16 {
        self.pixmap.height()
    }

    /// The underlying pixmap.
    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }

    /// Premultiplied RGBA8 pixel at `(x, y)`, or `None` if out of bounds.
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.width() || y >= self.height() {
            return None;
        }
        let index = usize::from(y) * usize::from(self.width()) + usize::from(x);
        self.pixmap
            .data()
            .get(index)
            .map(|p| [p.r, p.g, p.b, p.a])
    }

    /// Row-major premultiplied RGBA8 bytes.
    pub fn to_premul_rgba8(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.pixmap.data().len() * 4);
        for p in self.pixmap.data() {
            data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
        }
        data
    }

    /// Row-major straight-alpha RGBA8 bytes, suitable for PNG encoding.
    pub fn to_rgba8(&self) -> Vec<u8> {
        let unpremultiply = |c: u8, a: u8| -> u8 {
            if a == 0 {
                return 0;
            }
            let value = (u32::from(c) * 255 + u32::from(a) / 2) / u32::from(a);
            u8::try_from(value.min(255)).unwrap_or(u8::MAX)
        };
        let mut data = Vec::with_capacity(self.pixmap.data().len() * 4);
        for p in self.pixmap.data() {
            data.extend_from_slice(&[
                unpremultiply(p.r, p.a),
                unpremultiply(p.g, p.a),
                unpremultiply(p.b, p.a),
                p.a,
            ]);
        }
        data
    }
}

impl PartialEq for Buffer {
    fn eq(&self, other: &Self) -> bool {
        self.width() == other.width()
            && self.height() == other.height()
            && self
                .pixmap
                .data()
                .iter()
                .zip(other.pixmap.data())
                .all(|(a, b)| [a.r, a.g, a.b, a.a] == [b.r, b.g, b.b, b.a])
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("width", &self.width())
            .field("height", &self.height())
            .finish_non_exhaustive()
    }
}

/// Receives every buffer a surface produces.
///
/// This is where a host hands the image to its window or view.
pub trait Presenter {
    /// Show `buffer`. Called after every compositing pass and every reset.
    fn publish(&mut self, buffer: &Buffer);
}

/// Presenter that discards buffers.
#[derive(Copy, Clone, Debug, Default)]
pub struct NoPresenter;

impl Presenter for NoPresenter {
    fn publish(&mut self, _buffer: &Buffer) {}
}

impl<F: FnMut(&Buffer)> Presenter for F {
    fn publish(&mut self, buffer: &Buffer) {
        self(buffer);
    }
}
