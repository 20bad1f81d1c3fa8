// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The retained raster surface.

use core::fmt;

use peniko::Color;
use understory_ink::{Canvas, CommandReceiver, DrawCommand, DrawContext, SurfaceError};
use vello_cpu::kurbo::{Affine as CpuAffine, Rect};
use vello_cpu::peniko::{ImageQuality, ImageSampler};
use vello_cpu::{Image, ImageSource, Pixmap};

use crate::buffer::{Buffer, NoPresenter, Presenter};
use crate::context::VelloCpuContext;

/// A raster surface that keeps its committed ink in a retained [`Buffer`].
///
/// Each pass renders into a fresh pixmap: the opaque background, then the
/// previous buffer copied 1:1, then the new commands. The result replaces
/// the buffer and is handed to the [`Presenter`].
pub struct VelloCpuSurface<P = NoPresenter> {
    context: VelloCpuContext,
    width: u16,
    height: u16,
    background: Color,
    buffer: Option<Buffer>,
    presenter: P,
}

impl<P> fmt::Debug for VelloCpuSurface<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VelloCpuSurface")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("background", &self.background)
            .field("buffer", &self.buffer)
            .finish_non_exhaustive()
    }
}

fn checked_size(width: u32, height: u32) -> Result<(u16, u16), SurfaceError> {
    let invalid = SurfaceError::InvalidSize { width, height };
    let w = u16::try_from(width).map_err(|_| invalid)?;
    let h = u16::try_from(height).map_err(|_| invalid)?;
    if w == 0 || h == 0 {
        return Err(invalid);
    }
    Ok((w, h))
}

impl VelloCpuSurface<NoPresenter> {
    /// Create a surface of `width` by `height` pixels.
    ///
    /// The background must be opaque so that copying the buffer back in is
    /// exact; a translucent color is made opaque. Sizes of zero or beyond
    /// `u16::MAX` are rejected.
    pub fn new(width: u32, height: u32, background: Color) -> Result<Self, SurfaceError> {
        let (w, h) = checked_size(width, height)?;
        let background = if background.components[3] < 1.0 {
            tracing::warn!(?background, "translucent background forced opaque");
            background.with_alpha(1.0)
        } else {
            background
        };
        Ok(Self {
            context: VelloCpuContext::new(w, h),
            width: w,
            height: h,
            background,
            buffer: None,
            presenter: NoPresenter,
        })
    }
}

impl<P: Presenter> VelloCpuSurface<P> {
    /// Replace the presenter.
    pub fn with_presenter<Q: Presenter>(self, presenter: Q) -> VelloCpuSurface<Q> {
        VelloCpuSurface {
            context: self.context,
            width: self.width,
            height: self.height,
            background: self.background,
            buffer: self.buffer,
            presenter,
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Opaque background color.
    pub fn background(&self) -> Color {
        self.background
    }

    /// The retained buffer, or `None` if nothing has been composited since
    /// creation or the last reset.
    pub fn buffer(&self) -> Option<&Buffer> {
        self.buffer.as_ref()
    }

    /// The presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Mutable access to the presenter.
    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    /// Change the bounds used by subsequent passes.
    ///
    /// The retained buffer is kept and drawn at the origin without scaling,
    /// so growing the surface reveals background and shrinking it crops.
    /// Replaying history after a resize draws at the same coordinates.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<(), SurfaceError> {
        let (w, h) = checked_size(width, height)?;
        if (w, h) == (self.width, self.height) {
            return Ok(());
        }
        tracing::debug!(width = w, height = h, "surface resized");
        self.width = w;
        self.height = h;
        self.context = VelloCpuContext::new(w, h);
        Ok(())
    }

    /// Start a pass: background, then the previous buffer if requested.
    fn begin_pass(&mut self, with_buffer: bool) {
        let ctx = &mut self.context.ctx;
        ctx.reset();
        ctx.set_transform(CpuAffine::IDENTITY);
        ctx.set_paint_transform(CpuAffine::IDENTITY);
        ctx.set_paint(self.background);
        ctx.fill_rect(&Rect::new(
            0.0,
            0.0,
            f64::from(self.width),
            f64::from(self.height),
        ));

        if let Some(buffer) = self.buffer.as_ref().filter(|_| with_buffer) {
            ctx.set_paint(Image {
                image: ImageSource::Pixmap(buffer.shared_pixmap()),
                sampler: ImageSampler {
                    quality: ImageQuality::Low,
                    ..ImageSampler::default()
                },
            });
            ctx.fill_rect(&Rect::new(
                0.0,
                0.0,
                f64::from(buffer.width().min(self.width)),
                f64::from(buffer.height().min(self.height)),
            ));
        }
    }

    fn finish_pass(&mut self) -> Buffer {
        let mut pixmap = Pixmap::new(self.width, self.height);
        let ctx = &mut self.context.ctx;
        ctx.flush();
        ctx.render_to_pixmap(&mut pixmap);
        Buffer::new(pixmap)
    }
}

impl<P: Presenter> Canvas for VelloCpuSurface<P> {
    fn context(&mut self) -> &mut dyn DrawContext {
        &mut self.context
    }

    fn reset(&mut self) {
        self.buffer = None;
        self.begin_pass(false);
        let blank = self.finish_pass();
        self.presenter.publish(&blank);
        tracing::debug!("surface reset");
    }
}

impl<P: Presenter> CommandReceiver for VelloCpuSurface<P> {
    fn execute_commands(&mut self, commands: &[DrawCommand]) -> Result<(), SurfaceError> {
        self.begin_pass(true);
        for command in commands {
            command.execute(self);
        }
        let buffer = self.finish_pass();
        self.presenter.publish(&buffer);
        self.buffer = Some(buffer);
        tracing::trace!(commands = commands.len(), "pass composited");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WHITE: [u8; 4] = [255, 255, 255, 255];

    #[test]
    fn zero_and_oversized_bounds_are_rejected() {
        assert_eq!(
            VelloCpuSurface::new(0, 10, Color::WHITE).unwrap_err(),
            SurfaceError::InvalidSize {
                width: 0,
                height: 10
            }
        );
        assert!(VelloCpuSurface::new(70_000, 10, Color::WHITE).is_err());

        let mut surface = VelloCpuSurface::new(4, 4, Color::WHITE).unwrap();
        assert!(surface.resize(4, 0).is_err());
        assert_eq!((surface.width(), surface.height()), (4, 4));
    }

    #[test]
    fn translucent_background_is_forced_opaque() {
        let surface = VelloCpuSurface::new(2, 2, Color::from_rgba8(10, 20, 30, 128)).unwrap();
        assert_eq!(surface.background().components[3], 1.0);
    }

    #[test]
    fn empty_pass_paints_the_background() {
        let mut surface = VelloCpuSurface::new(3, 2, Color::WHITE).unwrap();
        assert!(surface.buffer().is_none());
        surface.execute_commands(&[]).unwrap();

        let buffer = surface.buffer().unwrap();
        assert_eq!((buffer.width(), buffer.height()), (3, 2));
        assert!(buffer.to_rgba8().chunks_exact(4).all(|px| px == WHITE));
        assert_eq!(buffer.pixel(3, 0), None);
    }

    #[test]
    fn reset_publishes_without_retaining() {
        let mut published = 0;
        {
            let mut surface = VelloCpuSurface::new(2, 2, Color::WHITE)
                .unwrap()
                .with_presenter(|_: &Buffer| published += 1);
            surface.execute_commands(&[]).unwrap();
            surface.reset();
            assert!(surface.buffer().is_none());
        }
        assert_eq!(published, 2);
    }

    #[test]
    fn resize_keeps_the_buffer_at_the_origin() {
        let mut surface = VelloCpuSurface::new(2, 2, Color::WHITE).unwrap();
        surface.execute_commands(&[]).unwrap();
        surface.resize(4, 3).unwrap();
        surface.execute_commands(&[]).unwrap();

        let buffer = surface.buffer().unwrap();
        assert_eq!((buffer.width(), buffer.height()), (4, 3));
        assert_eq!(buffer.pixel(3, 2), Some(WHITE));
    }
}
