use criterion::{criterion_group, BenchmarkId, Criterion};
use ksmooth::{density_estimate, math};

// One output uses the sliding windows, two force a scan of the whole sample
fn windowed_vs_full_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("density");

    for &size in &[1_000, 10_000] {
        let (x, _) = super::scattered(size);
        let domain = math::linspace(0., 100., 1_000);

        group.bench_with_input(BenchmarkId::new("windowed", size), &x, |b, x| {
            b.iter(|| density_estimate(x, &domain, 0.5, 1))
        });
        group.bench_with_input(BenchmarkId::new("full scan", size), &x, |b, x| {
            b.iter(|| density_estimate(x, &domain, 0.5, 2))
        });
    }
    group.finish();
}

criterion_group!(benches, windowed_vs_full_scan);
