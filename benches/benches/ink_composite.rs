// Copyright 2026 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for `understory_ink`: per-move compositing vs. undo replay.
//!
//! A move composites one segment on top of the retained buffer, so its cost
//! should stay flat as history grows. Undo replays everything, so its cost
//! grows with history.

use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use kurbo::{Point, Vec2};
use peniko::Color;
use understory_ink::{Canvas, CommandReceiver, DrawCommand, StrokeController};
use understory_ink_ref::RefSurface;
use understory_ink_vello_cpu::VelloCpuSurface;

const SIZE: u32 = 256;

/// Draw `strokes` zig-zag strokes of 32 segments each.
fn fill_history<S: Canvas + CommandReceiver>(ink: &mut StrokeController<S>, strokes: usize) {
    for s in 0..strokes {
        let y = 8.0 + (s % 30) as f64 * 8.0;
        ink.begin(Point::new(4.0, y)).unwrap();
        for i in 1..=32 {
            let x = 4.0 + f64::from(i) * 7.5;
            let wiggle = if i % 2 == 0 { 3.0 } else { -3.0 };
            ink.move_to(Point::new(x, y + wiggle), Some(Vec2::new(400.0, 0.0)))
                .unwrap();
        }
        ink.end(Point::new(244.0, y)).unwrap();
    }
}

fn vello_surface() -> VelloCpuSurface {
    VelloCpuSurface::new(SIZE, SIZE, Color::WHITE).unwrap()
}

fn bench_move(c: &mut Criterion) {
    let mut group = c.benchmark_group("ink/move");
    for strokes in [0_usize, 16, 64] {
        group.bench_function(BenchmarkId::new("vello_cpu", strokes), |b| {
            let mut ink = StrokeController::new(vello_surface());
            fill_history(&mut ink, strokes);
            ink.begin(Point::new(10.0, 10.0)).unwrap();
            let mut x = 10.0;
            b.iter(|| {
                x = if x > 240.0 { 10.0 } else { x + 3.0 };
                ink.move_to(black_box(Point::new(x, 128.0)), None).unwrap();
            });
        });
    }
    group.finish();
}

fn bench_undo(c: &mut Criterion) {
    let mut group = c.benchmark_group("ink/undo");
    for strokes in [1_usize, 16, 64] {
        group.bench_function(BenchmarkId::new("vello_cpu", strokes), |b| {
            b.iter_batched(
                || {
                    let mut ink = StrokeController::new(vello_surface());
                    fill_history(&mut ink, strokes);
                    ink
                },
                |mut ink| black_box(ink.undo().unwrap()),
                BatchSize::LargeInput,
            );
        });
        group.bench_function(BenchmarkId::new("ref", strokes), |b| {
            b.iter_batched(
                || {
                    let mut ink = StrokeController::new(RefSurface::new());
                    fill_history(&mut ink, strokes);
                    ink
                },
                |mut ink| black_box(ink.undo().unwrap()),
                BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let mut ink = StrokeController::new(RefSurface::new());
    fill_history(&mut ink, 16);
    let history: Vec<DrawCommand> = ink.history().as_slice().to_vec();
    let leaves: usize = history.iter().map(DrawCommand::leaf_count).sum();

    c.bench_function(&format!("ink/record_ops/{leaves}"), |b| {
        b.iter_batched(
            RefSurface::new,
            |mut surface| {
                surface.execute_commands(&history).unwrap();
                black_box(surface.buffer().len())
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(benches, bench_move, bench_undo, bench_render);
criterion_main!(benches);
