//! Benchmarks for the plate check

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use plate_check::prelude::*;

fn benchmark_compute(c: &mut Criterion) {
    let input = PlateInput::default();
    c.bench_function("compute_default_plate", |b| {
        b.iter(|| black_box(compute(black_box(&input))))
    });
}

fn benchmark_validated_check(c: &mut Criterion) {
    let input = PlateInput::default().with_geometry(900.0, 10.0);
    c.bench_function("run_check_non_compact", |b| {
        b.iter(|| black_box(run_check(black_box(input)).unwrap()))
    });
}

fn benchmark_report(c: &mut Criterion) {
    let result = compute(&PlateInput::default());
    c.bench_function("report_to_text", |b| {
        b.iter(|| black_box(Report::from_result(black_box(&result)).to_string()))
    });
}

criterion_group!(
    benches,
    benchmark_compute,
    benchmark_validated_check,
    benchmark_report,
);

criterion_main!(benches);
