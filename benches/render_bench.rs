//! Criterion benchmarks for the heatmap rasterizer

use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use heatgrid::parsers::parse_levels;
use heatgrid::render::{render, HeatmapGrid, TOTAL_DAYS};
use heatgrid::types::{date_key, DateLevelMap};
use std::hint::black_box;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 10).unwrap()
}

/// A full window of data with every level represented
fn full_levels() -> DateLevelMap {
    (0..TOTAL_DAYS as i64)
        .map(|i| (date_key(today() - Duration::days(i)), i % 6))
        .collect()
}

fn bench_parse_payload(c: &mut Criterion) {
    let payload = serde_json::to_string(&full_levels()).unwrap();

    let mut group = c.benchmark_group("parser");
    group.throughput(Throughput::Bytes(payload.len() as u64));
    group.bench_function("parse_levels", |b| {
        b.iter(|| parse_levels(black_box(Some(payload.as_str()))));
    });
    group.finish();
}

fn bench_build_grid(c: &mut Criterion) {
    let levels = full_levels();

    c.bench_function("build_grid", |b| {
        b.iter(|| HeatmapGrid::build(black_box(&levels), black_box(today())));
    });
}

fn bench_render(c: &mut Criterion) {
    let levels = full_levels();

    let mut group = c.benchmark_group("render");
    for scale in [1.0f32, 2.0, 3.0] {
        group.bench_with_input(BenchmarkId::from_parameter(scale), &scale, |b, &scale| {
            b.iter(|| render(black_box(&levels), today(), scale));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_parse_payload, bench_build_grid, bench_render);
criterion_main!(benches);
