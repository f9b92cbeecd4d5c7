//! Criterion benchmarks for the quadrature kernel.
//!
//! Measures sequential and parallel midpoint summation across interval
//! counts to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use quadrature_core::{EstimatorConfig, PiEstimator};

fn estimator(intervals: u64, threads: Option<usize>) -> PiEstimator {
    let mut builder = EstimatorConfig::builder().intervals(intervals);
    if let Some(t) = threads {
        builder = builder.threads(t);
    }
    PiEstimator::new(builder.build().unwrap()).unwrap()
}

/// Benchmark the parallel reduction at the default thread count.
fn bench_parallel_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("parallel_estimate");

    for intervals in [100_000u64, 1_000_000, 10_000_000] {
        let est = estimator(intervals, None);
        group.bench_with_input(
            BenchmarkId::from_parameter(intervals),
            &est,
            |b, est| {
                b.iter(|| black_box(est.estimate()));
            },
        );
    }

    group.finish();
}

/// Benchmark the single-threaded reference path.
fn bench_sequential_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequential_estimate");

    for intervals in [100_000u64, 1_000_000] {
        let est = estimator(intervals, Some(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(intervals),
            &est,
            |b, est| {
                b.iter(|| black_box(est.estimate_sequential()));
            },
        );
    }

    group.finish();
}

/// Benchmark thread scaling at a fixed interval count.
fn bench_thread_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("thread_scaling");

    for threads in [1usize, 2, 4, 8] {
        let est = estimator(1_000_000, Some(threads));
        group.bench_with_input(
            BenchmarkId::from_parameter(threads),
            &est,
            |b, est| {
                b.iter(|| black_box(est.estimate()));
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parallel_estimate,
    bench_sequential_estimate,
    bench_thread_scaling
);
criterion_main!(benches);
