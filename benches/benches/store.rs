// Copyright 2026 the Hotspot Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Benchmarks for hotspot store edits and lookups.
//!
//! Trees are built with a fixed fan-out: each hotspot gets `fan` sections, each
//! section `fan` sub-sections, and each sub-section `fan` products.

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use hotspot_geometry::Rectangle;
use hotspot_tree::{NodeId, NodePath, Store};
use kurbo::Point;

fn rect(i: usize) -> Rectangle {
    let x = (i % 10) as f64 * 10.0;
    let y = (i / 10 % 10) as f64 * 10.0;
    Rectangle::from_drag(Point::new(x, y), Point::new(x + 5.0, y + 5.0))
}

fn build(hotspots: usize, fan: usize) -> Store {
    let mut store = Store::new();
    for i in 0..hotspots {
        let root = store.append_hotspot(rect(i));
        for _ in 0..fan {
            let Ok(section) = store.add_child([root]) else {
                continue;
            };
            for _ in 0..fan {
                let Ok(sub) = store.add_child(section) else {
                    continue;
                };
                for _ in 0..fan {
                    let _ = store.add_product(sub);
                }
            }
        }
    }
    store
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/build");

    for hotspots in [16usize, 64, 256] {
        let fan = 4;
        let nodes = hotspots * (1 + fan + fan * fan + fan * fan * fan);
        group.throughput(Throughput::Elements(nodes as u64));
        group.bench_with_input(BenchmarkId::from_parameter(hotspots), &hotspots, |b, &n| {
            b.iter(|| black_box(build(n, fan)));
        });
    }

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/resolve");
    let store = build(64, 4);
    let paths: Vec<NodePath> = store.walk().map(|(path, _)| path).collect();
    let ids: Vec<NodeId> = store.walk().map(|(_, node)| node.id()).collect();
    group.throughput(Throughput::Elements(paths.len() as u64));

    group.bench_function("path", |b| {
        b.iter(|| {
            for path in &paths {
                black_box(store.resolve(path));
            }
        });
    });

    group.bench_function("id", |b| {
        b.iter(|| {
            for &id in &ids {
                black_box(store.resolve(id));
            }
        });
    });

    group.bench_function("path_of", |b| {
        b.iter(|| {
            for &id in &ids {
                black_box(store.path_of(id));
            }
        });
    });

    group.finish();
}

fn bench_exclusivity(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/exclusivity");

    // Worst case for the sibling scan: a wide `subs` of one family.
    for width in [8usize, 64, 512] {
        let mut store = Store::new();
        store.append_hotspot(rect(0));
        for _ in 0..width {
            let _ = store.add_product([0]);
        }
        group.bench_with_input(BenchmarkId::new("can_add_child", width), &store, |b, s| {
            b.iter(|| black_box(s.can_add_child([0])));
        });
        group.bench_with_input(BenchmarkId::new("actions", width), &store, |b, s| {
            b.iter(|| black_box(s.actions([0])));
        });
    }

    group.finish();
}

fn bench_remove_first_root(c: &mut Criterion) {
    let mut group = c.benchmark_group("store/remove_first_root");

    for hotspots in [16usize, 256] {
        group.bench_with_input(
            BenchmarkId::from_parameter(hotspots),
            &hotspots,
            |b, &n| {
                b.iter_batched(
                    || build(n, 3),
                    |mut store| {
                        black_box(store.remove_node([0]).ok());
                        store
                    },
                    BatchSize::LargeInput,
                );
            },
        );
    }

    group.finish();
}

fn bench_snapshots(c: &mut Criterion) {
    let store = build(64, 4);
    c.bench_function("store/snapshots", |b| {
        b.iter(|| black_box(store.snapshots()));
    });
}

criterion_group!(
    benches,
    bench_build,
    bench_resolve,
    bench_exclusivity,
    bench_remove_first_root,
    bench_snapshots,
);
criterion_main!(benches);
