// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for the pointer-to-rectangle path taken on every pointer move.

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use hotspot_editor::{Editor, EditorOptions};
use hotspot_geometry::{ClampMode, DrawState, normalize_position};
use kurbo::{Point, Rect};

const SURFACE: Rect = Rect::new(40.0, 80.0, 1320.0, 800.0);

/// A pointer path sweeping around the press point so every quadrant is hit.
fn pointer_path(len: usize) -> Vec<Point> {
    let center = SURFACE.center();
    (0..len)
        .map(|i| {
            let angle = i as f64 / len as f64 * core::f64::consts::TAU;
            let radius = 50.0 + (i % 7) as f64 * 40.0;
            center + kurbo::Vec2::from_angle(angle) * radius
        })
        .collect()
}

fn bench_normalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/normalize");
    let path = pointer_path(1_024);
    group.throughput(Throughput::Elements(path.len() as u64));

    for (name, clamp) in [
        ("pass_through", ClampMode::PassThrough),
        ("clamp", ClampMode::Clamp),
    ] {
        group.bench_function(name, |b| {
            b.iter(|| {
                for &p in &path {
                    black_box(normalize_position(p, SURFACE, clamp));
                }
            });
        });
    }

    group.finish();
}

fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometry/draw");
    let path = pointer_path(1_024);
    group.throughput(Throughput::Elements(path.len() as u64));

    group.bench_function("draw_state", |b| {
        b.iter(|| {
            let mut draw = DrawState::new();
            draw.start(Point::new(50.0, 50.0));
            for &p in &path {
                let pos = normalize_position(p, SURFACE, ClampMode::PassThrough);
                if let Some(pos) = pos {
                    black_box(draw.update(pos));
                }
            }
            black_box(draw.end())
        });
    });

    group.bench_function("editor_gesture", |b| {
        b.iter(|| {
            let mut editor = Editor::new(EditorOptions::new(SURFACE));
            editor.pointer_down(SURFACE.center());
            for &p in &path {
                black_box(editor.pointer_move(p));
            }
            black_box(editor.pointer_up())
        });
    });

    group.finish();
}

criterion_group!(benches, bench_normalize, bench_draw);
criterion_main!(benches);
