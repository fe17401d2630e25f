// SPDX-License-Identifier: MPL-2.0
//! Benchmarks for map operations.
//!
//! Measures the performance of:
//! - Parsing the bundled map into hit-testable shapes
//! - Hit-testing pointer positions against those shapes
//! - A full pointer sweep through the hover controller

use criterion::{criterion_group, criterion_main, Criterion};
use iced::Point;
use iced_atlas::config::StaleResponsePolicy;
use iced_atlas::hover::{HoverController, PanelLabels};
use iced_atlas::map::{CountryMap, BUNDLED_MAP};
use std::hint::black_box;

/// Points spread over the document on a regular grid.
fn sample_points(map: &CountryMap, per_axis: usize) -> Vec<Point> {
    let size = map.size();
    (0..per_axis)
        .flat_map(|row| {
            (0..per_axis).map(move |col| {
                Point::new(
                    size.width * (col as f32 + 0.5) / per_axis as f32,
                    size.height * (row as f32 + 0.5) / per_axis as f32,
                )
            })
        })
        .collect()
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");

    group.bench_function("parse_bundled", |b| {
        b.iter(|| {
            let map = CountryMap::from_svg_data(black_box(BUNDLED_MAP)).unwrap();
            black_box(map);
        });
    });

    group.finish();
}

fn bench_hit_test(c: &mut Criterion) {
    let mut group = c.benchmark_group("map");
    let map = CountryMap::bundled().unwrap();
    let points = sample_points(&map, 32);

    group.bench_function("hit_test_grid_32x32", |b| {
        b.iter(|| {
            for point in &points {
                black_box(map.hit_test(black_box(*point)));
            }
        });
    });

    group.finish();
}

/// Pointer sweep: hit-test, then leave/enter whenever the country changes.
fn bench_pointer_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("hover");
    let map = CountryMap::bundled().unwrap();
    let points = sample_points(&map, 32);

    group.bench_function("pointer_sweep", |b| {
        b.iter(|| {
            let mut hover = HoverController::new(
                iced::Color::from_rgb8(0xff, 0xcc, 0x00),
                StaleResponsePolicy::Discard,
                PanelLabels::default(),
            );
            hover.register_paths(map.shapes());
            let mut current = None;
            for point in &points {
                let hit = map.hit_test(*point).map(|shape| shape.code().clone());
                if hit != current {
                    if let Some(left) = &current {
                        hover.on_pointer_leave(left);
                    }
                    if let Some(entered) = &hit {
                        black_box(hover.on_pointer_enter(entered));
                    }
                    current = hit;
                }
            }
            black_box(hover);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_parse, bench_hit_test, bench_pointer_sweep);
criterion_main!(benches);
