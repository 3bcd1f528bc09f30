use criterion::{criterion_group, BenchmarkId, Criterion};
use ksmooth::{kernel_regression, Config, Domain, KernelRegression};

fn bandwidths(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression");
    let (x, y) = super::scattered(100_000);

    for &bw in &[0.1, 1., 10.] {
        group.bench_with_input(BenchmarkId::new("bandwidth", bw), &bw, |b, &bw| {
            b.iter(|| kernel_regression(&x, &y, Domain::Count(1_000), Some(bw), 3))
        });
    }
    group.bench_function("silverman", |b| {
        b.iter(|| kernel_regression(&x, &y, Domain::Count(1_000), None, 3))
    });
    group.finish();
}

fn threads(c: &mut Criterion) {
    let mut group = c.benchmark_group("regression threads");
    let (x, y) = super::scattered(100_000);

    for &threads in &[1, 2, 4] {
        let regression = KernelRegression::new()
            .config(Config::default().threads(threads))
            .x(&x)
            .y(&y)
            .domain(Domain::Count(10_000))
            .bandwidth(1.);

        group.bench_with_input(BenchmarkId::from_parameter(threads), &regression, |b, r| {
            b.iter(|| r.run())
        });
    }
    group.finish();
}

criterion_group!(benches, bandwidths, threads);
