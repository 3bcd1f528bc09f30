use rand::prelude::*;
use rand::rngs::StdRng;

pub mod density;
pub mod regression;
pub mod timeseries;

/// Noisy samples of a sine wave at random, unsorted abscissae
pub fn scattered(n: usize) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let x: Vec<f64> = (0..n).map(|_| rng.gen_range(0.0..100.0)).collect();
    let y = x
        .iter()
        .map(|x| (x / 10.).sin() + rng.gen_range(-0.2..0.2))
        .collect();

    (x, y)
}
