//! Gaussian kernel regression (Nadaraya-Watson)

use crate::bandwidth::Bandwidth;
use crate::config::Config;
use crate::domain::Domain;
use crate::engine::{Evaluator, Mode};
use crate::error::{check_outputs, Error, Result};
use crate::estimate::{Estimate, Kind};
use crate::kernel::{Gaussian, Kernel};
use crate::sample::Pairs;
use crate::window::Windows;

/// Kernel-weighted average of `y` as a function of `x`
///
/// Only `x` and `y` are required. The domain defaults to 100 points spanning the range of `x`
/// and the bandwidth to Silverman's rule (also used when the given bandwidth is not positive
/// and finite).
///
/// The number of outputs picks what is computed: `1` the estimate, `2` the domain and the
/// estimate, `3` the domain, the estimate and its error. Domain points with no sample within
/// three bandwidths get an estimate and error of `0`.
///
/// ```rust
/// use ksmooth::{Domain, KernelRegression};
///
/// let x = [0., 1., 2., 3., 4., 5.];
/// let y = [0., 1., 4., 9., 16., 25.];
/// let fit = KernelRegression::new()
///     .x(&x)
///     .y(&y)
///     .domain(Domain::Count(11))
///     .bandwidth(1.)
///     .outputs(3)
///     .run()
///     .unwrap();
///
/// assert_eq!(fit.domain.len(), 11);
/// assert!(fit.error.is_some());
/// ```
#[derive(Clone, Debug)]
pub struct KernelRegression<'a> {
    config: Config,
    x: Option<&'a [f64]>,
    y: Option<&'a [f64]>,
    domain: Domain,
    bandwidth: Option<f64>,
    outputs: usize,
}

impl<'a> Default for KernelRegression<'a> {
    fn default() -> KernelRegression<'a> {
        KernelRegression {
            config: Config::default(),
            x: None,
            y: None,
            domain: Domain::Default,
            bandwidth: None,
            outputs: 1,
        }
    }
}

impl<'a> KernelRegression<'a> {
    pub fn new() -> KernelRegression<'a> {
        KernelRegression::default()
    }

    pub fn config(mut self, config: Config) -> KernelRegression<'a> {
        self.config = config;
        self
    }

    /// Predictor values
    pub fn x(mut self, x: &'a [f64]) -> KernelRegression<'a> {
        self.x = Some(x);
        self
    }

    /// Responses, paired element-wise with `x`
    pub fn y(mut self, y: &'a [f64]) -> KernelRegression<'a> {
        self.y = Some(y);
        self
    }

    pub fn domain<D: Into<Domain>>(mut self, domain: D) -> KernelRegression<'a> {
        self.domain = domain.into();
        self
    }

    pub fn bandwidth(mut self, bw: f64) -> KernelRegression<'a> {
        self.bandwidth = Some(bw);
        self
    }

    pub fn outputs(mut self, n: usize) -> KernelRegression<'a> {
        self.outputs = n;
        self
    }

    pub fn run(&self) -> Result<Estimate> {
        check_outputs(self.outputs, Kind::Regression.max_outputs())?;

        let x = self.x.ok_or(Error::MissingArgument("x"))?;
        let y = self.y.ok_or(Error::MissingArgument("y"))?;

        let pairs = Pairs::new(x, y)?;
        if pairs.dropped() > 0 {
            debug!("Dropped {} records with non-finite values", pairs.dropped());
        }
        let domain = self.domain.build(pairs.x())?;

        let bw = Bandwidth::from(self.bandwidth).resolve(pairs.x())?;
        let kernel = Gaussian::new(bw);
        let with_error = self.outputs >= 3;

        let windows = Windows::sliding(pairs.x(), &domain, kernel.radius());
        trace!(
            "{} kernel evaluations over {} domain points",
            windows.work(),
            domain.len()
        );

        let evaluation = self.config.install(|| {
            Evaluator::new(kernel, pairs.x(), Mode::Regression(pairs.y())).evaluate(
                &domain,
                &windows,
                with_error,
            )
        })?;

        Ok(Estimate {
            kind: Kind::Regression,
            outputs: self.outputs.max(1),
            bandwidth: bw,
            domain,
            estimate: evaluation.estimate,
            error: evaluation.error,
        })
    }
}

/// Regresses `y` on `x` over `domain`
///
/// `bw` of `None` selects Silverman's rule. See `KernelRegression` for details.
pub fn kernel_regression<D: Into<Domain>>(
    x: &[f64],
    y: &[f64],
    domain: D,
    bw: Option<f64>,
    outputs: usize,
) -> Result<Estimate> {
    let mut regression = KernelRegression::new().x(x).y(y).domain(domain).outputs(outputs);
    if let Some(bw) = bw {
        regression = regression.bandwidth(bw);
    }

    regression.run()
}

#[cfg(test)]
mod test {
    use std::f64::{INFINITY, NAN};

    use approx::relative_eq;
    use quickcheck::quickcheck;
    use quickcheck::TestResult;

    use super::{kernel_regression, KernelRegression};
    use crate::domain::{Domain, DEFAULT_DOMAIN_POINTS};
    use crate::error::Error;
    use crate::kernel::{Gaussian, Kernel};
    use crate::math;

    // Record by record over the unsorted input, with the same `[mu - r, mu + r)` cut
    fn brute_force(x: &[f64], y: &[f64], domain: &[f64], bw: f64) -> Vec<f64> {
        let k = Gaussian::new(bw);
        let r = k.radius();

        domain
            .iter()
            .map(|&mu| {
                let (sw, swy) = x
                    .iter()
                    .zip(y)
                    .filter(|&(&x, _)| mu - r <= x && x < mu + r)
                    .fold((0., 0.), |(sw, swy), (&x, &y)| {
                        let w = k.weight(x - mu);
                        (sw + w, swy + w * y)
                    });

                if sw > 0. {
                    swy / sw
                } else {
                    0.
                }
            })
            .collect()
    }

    #[test]
    fn parabola() {
        let x = [0., 1., 2., 3., 4., 5.];
        let y = [0., 1., 4., 9., 16., 25.];

        let fit = kernel_regression(&x, &y, vec![0., 2.5, 5.], Some(1.), 1).unwrap();

        assert_eq!(fit.domain, vec![0., 2.5, 5.]);
        assert!(fit.estimate[1] >= 4. && fit.estimate[1] <= 9.);

        // every sample is within three bandwidths of 2.5, paired symmetrically
        let (a, b, c) = ((-0.125f64).exp(), (-1.125f64).exp(), (-3.125f64).exp());
        let expected = (a * (4. + 9.) + b * (1. + 16.) + c * (0. + 25.)) / (2. * (a + b + c));
        assert!(relative_eq!(fit.estimate[1], expected, epsilon = 1e-9));
    }

    #[test]
    fn defaults() {
        let x: Vec<f64> = (1..=10).map(f64::from).collect();
        let y: Vec<f64> = x.iter().map(|x| 2. * x).collect();

        let fit = KernelRegression::new().x(&x).y(&y).run().unwrap();

        assert_eq!(fit.domain.len(), DEFAULT_DOMAIN_POINTS);
        assert!(relative_eq!(fit.bandwidth, 1.719286404692283, epsilon = 1e-6));
        assert!(fit.error.is_none());
        assert_eq!(fit.into_outputs().len(), 1);
    }

    #[test]
    fn non_finite_records_are_ignored() {
        let clean = kernel_regression(&[1., 2.], &[10., 20.], vec![1.5], Some(1.), 1).unwrap();
        let dirty = kernel_regression(
            &[1., 2., NAN, 4.],
            &[10., 20., 30., INFINITY],
            vec![1.5],
            Some(1.),
            1,
        )
        .unwrap();

        assert_eq!(clean.estimate, dirty.estimate);
    }

    #[test]
    fn far_domain_points_are_zero() {
        let fit = kernel_regression(&[0., 1., 2.], &[3., 4., 5.], vec![-50., 1., 50.], Some(0.5), 3)
            .unwrap();
        let error = fit.error.unwrap();

        assert_eq!(fit.estimate[0], 0.);
        assert_eq!(fit.estimate[2], 0.);
        assert_eq!(error[0], 0.);
        assert_eq!(error[2], 0.);
    }

    #[test]
    fn failures() {
        match KernelRegression::new().x(&[1.]).run() {
            Err(Error::MissingArgument("y")) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match kernel_regression(&[1., 2.], &[1.], Domain::Default, None, 1) {
            Err(Error::DimensionMismatch { x: 2, y: 1 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match kernel_regression(&[1., 2.], &[1., 2.], Domain::Default, None, 4) {
            Err(Error::TooManyOutputs { requested: 4, max: 3 }) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match kernel_regression(&[NAN], &[1.], Domain::Default, None, 1) {
            Err(Error::InsufficientValidPairs) => {}
            other => panic!("unexpected result: {:?}", other),
        }
        match kernel_regression(&[1.], &[1.], Domain::Default, None, 1) {
            Err(Error::InsufficientDataForBandwidth(1)) => {}
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn tiny_bandwidth() {
        let fit = kernel_regression(&[0., 1.], &[3., 4.], vec![0.], Some(1e-200), 3).unwrap();

        assert_eq!(fit.estimate, vec![3.]);
        assert_eq!(fit.error, Some(vec![0.]));
    }

    quickcheck! {
        fn unsorted_input_matches_brute_force(
            size: u8,
            points: u8,
            bw: u8,
            seed: u64
        ) -> TestResult {
            if size == 0 {
                return TestResult::discard();
            }

            let (x, y) = crate::test::scattered(size as usize, seed);
            let order: Vec<usize> = crate::test::shuffled(&(0..x.len()).collect::<Vec<_>>(), seed);
            let xs: Vec<f64> = order.iter().map(|&i| x[i]).collect();
            let ys: Vec<f64> = order.iter().map(|&i| y[i]).collect();

            // grid points, sample points and a repeated point, in random order
            let mut domain = math::linspace(x[0] - 1., x[x.len() - 1] + 1., points as usize % 32);
            domain.extend_from_slice(&x[..x.len().min(4)]);
            domain.push(x[0]);
            let domain = crate::test::shuffled(&domain, seed.wrapping_add(1));
            let bw = 0.05 + f64::from(bw) / 255. * 5.;

            let fit = kernel_regression(&xs, &ys, domain.clone(), Some(bw), 1).unwrap();
            let expected = brute_force(&xs, &ys, &fit.domain, bw);

            let mut sorted = domain;
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());

            TestResult::from_bool(
                fit.domain == sorted
                    && fit.estimate.len() == expected.len()
                    && fit.estimate.iter().zip(&expected).all(|(&a, &b)| {
                        relative_eq!(a, b, epsilon = 1e-9, max_relative = 1e-9)
                    }),
            )
        }
    }

    quickcheck! {
        fn deterministic(size: u8, seed: u64) -> TestResult {
            if size < 2 {
                return TestResult::discard();
            }

            let (x, y) = crate::test::scattered(size as usize, seed);
            let a = kernel_regression(&x, &y, Domain::Count(64), None, 3).unwrap();
            let b = kernel_regression(&x, &y, Domain::Count(64), None, 3).unwrap();

            TestResult::from_bool(a == b)
        }
    }

    quickcheck! {
        fn estimate_within_response_range(size: u8, seed: u64) -> TestResult {
            if size < 2 {
                return TestResult::discard();
            }

            let (x, y) = crate::test::scattered(size as usize, seed);
            let lo = y.iter().cloned().fold(INFINITY, f64::min);
            let hi = y.iter().cloned().fold(-INFINITY, f64::max);
            let fit = kernel_regression(&x, &y, Domain::Default, None, 1).unwrap();

            TestResult::from_bool(fit.estimate.iter().all(|&e| {
                e == 0. || (e >= lo - 1e-9 && e <= hi + 1e-9)
            }))
        }
    }
}
