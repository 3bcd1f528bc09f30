//! Windowed kernel evaluator
//!
//! Shared by the density and regression estimators. Window bounds are computed up front (see
//! `crate::window`), after which every domain point is independent: the kernel sums run in
//! parallel, each worker producing its own output slots. The optional error pass starts once
//! every estimate is known.

use crate::kernel::Kernel;
use crate::window::{Window, Windows};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// What the kernel sums are turned into
#[derive(Clone, Copy)]
pub enum Mode<'a> {
    /// Kernel density of the samples
    Density,
    /// Kernel-weighted mean of the responses, aligned with the samples
    Regression(&'a [f64]),
}

/// Kernel sums over one window
#[derive(Clone, Copy, Debug, Default)]
struct Sums {
    weight: f64,
    weighted_y: f64,
}

/// Point estimates and, when requested, their errors
pub struct Evaluation {
    pub estimate: Vec<f64>,
    pub error: Option<Vec<f64>>,
}

/// Evaluator over a sorted, finite sample
pub struct Evaluator<'a, K>
where
    K: Kernel,
{
    kernel: K,
    xs: &'a [f64],
    mode: Mode<'a>,
}

impl<'a, K> Evaluator<'a, K>
where
    K: Kernel,
{
    /// # Panics
    ///
    /// Panics if the responses and `xs` have different lengths
    pub fn new(kernel: K, xs: &'a [f64], mode: Mode<'a>) -> Evaluator<'a, K> {
        if let Mode::Regression(ys) = mode {
            assert_eq!(xs.len(), ys.len());
        }

        Evaluator { kernel, xs, mode }
    }

    /// Evaluates the estimator at every point of `domain`, restricting the kernel sum of point
    /// `i` to `windows[i]`
    ///
    /// - Multithreaded
    /// - Time: `O(windows.work())`
    pub fn evaluate(&self, domain: &[f64], windows: &Windows, with_error: bool) -> Evaluation {
        debug_assert_eq!(domain.len(), windows.len());

        #[cfg(feature = "rayon")]
        let iter = domain.par_iter().zip(windows.par_iter());
        #[cfg(not(feature = "rayon"))]
        let iter = domain.iter().zip(windows.iter());

        let sums: Vec<Sums> = iter.map(|(&mu, w)| self.sums(mu, w)).collect();

        let estimate: Vec<f64> = sums.iter().map(|s| self.finish(s)).collect();

        let error = if with_error {
            #[cfg(feature = "rayon")]
            let iter = windows.par_iter().zip(sums.par_iter()).zip(estimate.par_iter());
            #[cfg(not(feature = "rayon"))]
            let iter = windows.iter().zip(sums.iter()).zip(estimate.iter());

            Some(iter.map(|((w, s), &e)| self.error(w, s, e)).collect())
        } else {
            None
        };

        Evaluation { estimate, error }
    }

    fn sums(&self, mu: f64, w: &Window) -> Sums {
        let xs = &self.xs[w.range()];

        match self.mode {
            Mode::Density => Sums {
                weight: xs.iter().map(|&x| self.kernel.weight(x - mu)).sum(),
                weighted_y: 0.,
            },
            Mode::Regression(ys) => {
                xs.iter()
                    .zip(&ys[w.range()])
                    .fold(Sums::default(), |acc, (&x, &y)| {
                        let k = self.kernel.weight(x - mu);

                        Sums {
                            weight: acc.weight + k,
                            weighted_y: acc.weighted_y + k * y,
                        }
                    })
            }
        }
    }

    fn finish(&self, s: &Sums) -> f64 {
        match self.mode {
            Mode::Density => {
                let m = self.xs.len() as f64;
                let density = s.weight / self.kernel.norm() / m;

                if density > 0. {
                    density
                } else {
                    0.
                }
            }
            Mode::Regression(_) => {
                if s.weight > 0. {
                    s.weighted_y / s.weight
                } else {
                    0.
                }
            }
        }
    }

    fn error(&self, w: &Window, s: &Sums, estimate: f64) -> f64 {
        if !(s.weight > 0.) {
            return 0.;
        }

        match self.mode {
            // Spread of the samples around the estimate
            Mode::Density => {
                let m = self.xs.len() as f64;
                let ss = squares(&self.xs[w.range()], estimate);

                (ss / m).sqrt()
            }
            // Residuals normalized by the kernel mass
            Mode::Regression(ys) => {
                let ss = squares(&ys[w.range()], estimate);

                ss.sqrt() / s.weight
            }
        }
    }
}

fn squares(values: &[f64], center: f64) -> f64 {
    values
        .iter()
        .map(|&v| {
            let d = v - center;
            d * d
        })
        .sum()
}
