use criterion::{criterion_group, BenchmarkId, Criterion};
use ksmooth::{kernel_regression, uniform_time_series_smooth, Domain};

// The kernel table against the general windowed regression on the same series
fn table_vs_general(c: &mut Criterion) {
    let mut group = c.benchmark_group("time series");
    let t: Vec<f64> = (0..100_000).map(|i| f64::from(i) * 1e-3).collect();
    let y: Vec<f64> = t.iter().map(|t| (7. * t).sin()).collect();

    for &bw in &[0.005, 0.05] {
        group.bench_with_input(BenchmarkId::new("table", bw), &bw, |b, &bw| {
            b.iter(|| uniform_time_series_smooth(&t, &y, bw))
        });
        group.bench_with_input(BenchmarkId::new("general", bw), &bw, |b, &bw| {
            b.iter(|| kernel_regression(&t, &y, Domain::Points(t.clone()), Some(bw), 1))
        });
    }
    group.finish();
}

criterion_group!(benches, table_vs_general);
