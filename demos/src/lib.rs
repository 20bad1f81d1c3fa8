// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared helpers for the Understory Ink demos.

use std::error::Error;
use std::f64::consts::TAU;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use kurbo::{Point, Vec2};
use peniko::Color;
use png::{BitDepth, ColorType, Encoder};
use tracing_subscriber::EnvFilter;
use understory_ink::InkEvent;
use understory_ink_vello_cpu::Buffer;

/// Install a `tracing` subscriber that honors `RUST_LOG`, defaulting to `debug`
/// for the ink crates.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("understory_ink=debug,understory_ink_vello_cpu=debug"));
    // A second call in the same process is harmless.
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Write a buffer to `path` as an 8-bit RGBA PNG.
pub fn write_png(path: impl AsRef<Path>, buffer: &Buffer) -> Result<(), Box<dyn Error>> {
    let path = path.as_ref();
    let file = BufWriter::new(File::create(path)?);
    let mut encoder = Encoder::new(file, u32::from(buffer.width()), u32::from(buffer.height()));
    encoder.set_color(ColorType::Rgba);
    encoder.set_depth(BitDepth::Eight);
    let mut writer = encoder.write_header()?;
    writer.write_image_data(&buffer.to_rgba8())?;
    eprintln!("Wrote {}", path.display());
    Ok(())
}

/// Pointer samples of a stroke along a sine wave, `samples` moves long.
///
/// Velocities speed up toward the middle of the wave, so the stroke thins
/// there and thickens again at the ends.
pub fn wave_stroke(origin: Point, length: f64, amplitude: f64, samples: usize) -> Vec<InkEvent> {
    let mut events = Vec::with_capacity(samples + 2);
    events.push(InkEvent::StrokeBegin(origin));
    let step = length / samples as f64;
    let mut last = origin;
    for i in 1..=samples {
        let t = i as f64 / samples as f64;
        let point = origin + Vec2::new(step * i as f64, amplitude * (t * TAU).sin());
        // Samples are 1/120 s apart.
        let speed_boost = 1.0 + 3.0 * (t * std::f64::consts::PI).sin();
        let velocity = (point - last) * 120.0 * speed_boost;
        events.push(InkEvent::StrokeMove {
            point,
            velocity: Some(velocity),
        });
        last = point;
    }
    events.push(InkEvent::StrokeEnd(last));
    events
}

/// A small scripted session: two strokes in different colors and a few taps.
pub fn scripted_session() -> Vec<InkEvent> {
    let mut events = vec![InkEvent::WidthChanged(10.0)];
    events.extend(wave_stroke(Point::new(30.0, 80.0), 260.0, 40.0, 48));
    events.push(InkEvent::ColorSelected(Color::from_rgba8(30, 90, 200, 255)));
    events.push(InkEvent::WidthChanged(6.0));
    events.extend(wave_stroke(Point::new(30.0, 160.0), 260.0, -25.0, 32));
    events.push(InkEvent::ColorSelected(Color::from_rgba8(210, 40, 40, 255)));
    for x in [60.0, 120.0, 180.0, 240.0] {
        events.push(InkEvent::Tap(Point::new(x, 220.0)));
    }
    events
}
