//! Kernel density estimation

use crate::bandwidth::Bandwidth;
use crate::config::Config;
use crate::engine::{Evaluator, Mode};
use crate::error::{check_outputs, Error, Result};
use crate::estimate::{Estimate, Kind};
use crate::kernel::{Gaussian, Kernel};
use crate::sample::Sample;
use crate::window::Windows;

/// Gaussian kernel density estimator
///
/// The sample, the domain and the bandwidth are all required. A bandwidth that is not positive
/// and finite is replaced by Silverman's rule.
///
/// Asking for two outputs adds a per-point error. That error is computed against the whole
/// sample rather than the local window, and so is the estimate that accompanies it: such calls
/// cost `O(domain * sample)` instead of `O(domain + sample)`.
///
/// ```rust
/// use ksmooth::DensityEstimate;
///
/// let x = [1., 2., 2.5, 3., 7.];
/// let d = [0., 2., 4., 6., 8.];
/// let fit = DensityEstimate::new().x(&x).domain(&d).bandwidth(0.5).run().unwrap();
///
/// assert_eq!(fit.estimate.len(), 5);
/// assert!(fit.estimate.iter().all(|&p| p >= 0.));
/// ```
#[derive(Clone, Debug)]
pub struct DensityEstimate<'a> {
    config: Config,
    x: Option<&'a [f64]>,
    domain: Option<&'a [f64]>,
    bandwidth: Option<f64>,
    outputs: usize,
}

impl<'a> Default for DensityEstimate<'a> {
    fn default() -> DensityEstimate<'a> {
        DensityEstimate {
            config: Config::default(),
            x: None,
            domain: None,
            bandwidth: None,
            outputs: 1,
        }
    }
}

impl<'a> DensityEstimate<'a> {
    pub fn new() -> DensityEstimate<'a> {
        DensityEstimate::default()
    }

    pub fn config(mut self, config: Config) -> DensityEstimate<'a> {
        self.config = config;
        self
    }

    /// Sample whose density is estimated
    pub fn x(mut self, x: &'a [f64]) -> DensityEstimate<'a> {
        self.x = Some(x);
        self
    }

    /// Points at which the density is evaluated
    pub fn domain(mut self, domain: &'a [f64]) -> DensityEstimate<'a> {
        self.domain = Some(domain);
        self
    }

    pub fn bandwidth(mut self, bw: f64) -> DensityEstimate<'a> {
        self.bandwidth = Some(bw);
        self
    }

    /// `1` for the estimate only, `2` to add the error
    pub fn outputs(mut self, n: usize) -> DensityEstimate<'a> {
        self.outputs = n;
        self
    }

    pub fn run(&self) -> Result<Estimate> {
        check_outputs(self.outputs, Kind::Density.max_outputs())?;

        let x = self.x.ok_or(Error::MissingArgument("x"))?;
        let domain = self.domain.ok_or(Error::MissingArgument("d"))?;
        let bandwidth = self.bandwidth.ok_or(Error::MissingArgument("bw"))?;

        if x.is_empty() {
            return Err(Error::EmptyInput("x"));
        }
        if domain.is_empty() {
            return Err(Error::EmptyInput("d"));
        }

        let sample = Sample::new(x, "x")?;
        if sample.dropped() > 0 {
            debug!("Dropped {} non-finite samples", sample.dropped());
        }
        let domain = Sample::new(domain, "d")?.into_vec();

        let bw = Bandwidth::from(bandwidth).resolve(&sample)?;
        let kernel = Gaussian::new(bw);
        let with_error = self.outputs >= 2;

        let windows = if with_error {
            debug!("Error requested, scanning the whole sample for every domain point");
            Windows::full(sample.len(), domain.len())
        } else {
            Windows::sliding(&sample, &domain, kernel.radius())
        };
        trace!(
            "{} kernel evaluations over {} domain points",
            windows.work(),
            domain.len()
        );

        let evaluation = self.config.install(|| {
            Evaluator::new(kernel, &sample, Mode::Density).evaluate(&domain, &windows, with_error)
        })?;

        Ok(Estimate {
            kind: Kind::Density,
            outputs: self.outputs.max(1),
            bandwidth: bw,
            domain,
            estimate: evaluation.estimate,
            error: evaluation.error,
        })
    }
}

/// Estimates the density of `x` at the points of `domain`
///
/// See `DensityEstimate` for the meaning of each argument.
pub fn density_estimate(x: &[f64], domain: &[f64], bw: f64, outputs: usize) -> Result<Estimate> {
    DensityEstimate::new()
        .x(x)
        .domain(domain)
        .bandwidth(bw)
        .outputs(outputs)
        .run()
}
