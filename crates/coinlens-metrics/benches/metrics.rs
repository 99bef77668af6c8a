//! Benchmarks for derived-series computations.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use coinlens_core::traits::Metric;
use coinlens_metrics::{CumulativeReturn, RollingMean, SimpleReturns};

fn generate_test_data(size: usize) -> Vec<f64> {
    (0..size)
        .map(|i| 100.0 + (i as f64 * 0.1).sin() * 10.0)
        .collect()
}

fn benchmark_rolling_mean(c: &mut Criterion) {
    let mut group = c.benchmark_group("RollingMean");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("window100", size), &data, |b, data| {
            let mean = RollingMean::new(100).with_min_periods(0);
            b.iter(|| mean.calculate(black_box(data)))
        });
    }

    group.finish();
}

fn benchmark_returns(c: &mut Criterion) {
    let mut group = c.benchmark_group("Returns");

    for size in [1000, 10000, 100000].iter() {
        let data = generate_test_data(*size);

        group.bench_with_input(BenchmarkId::new("simple", size), &data, |b, data| {
            b.iter(|| SimpleReturns.calculate(black_box(data)))
        });

        let returns = SimpleReturns.calculate(&data);
        group.bench_with_input(BenchmarkId::new("cumulative", size), &returns, |b, rets| {
            b.iter(|| CumulativeReturn.calculate(black_box(rets)))
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_rolling_mean, benchmark_returns);
criterion_main!(benches);
