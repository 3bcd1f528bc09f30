//! Kernel smoothing of uniformly sampled time series
//!
//! When the samples are equally spaced every point sees the same kernel, so the weights are
//! tabulated once. Near either end of the series the window is cut short and the estimate is
//! renormalized by the mass of the part of the kernel that remains.

use crate::bandwidth;
use crate::config::Config;
use crate::error::{check_outputs, Error, Result};
use crate::kernel::{Gaussian, KernelTable, RADIUS_BANDWIDTHS};
#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Gaussian smoother for a time series `y` sampled at equally spaced, ascending times `x`
///
/// `x` and `y` are *not* checked for NaNs, infinities, ordering or uneven spacing; only `x[0]`
/// and `x[1]` are read, to get the sampling interval. Unlike the other estimators, the bandwidth
/// is required and an invalid one is an error.
///
/// ```rust
/// use ksmooth::TimeSeriesSmoother;
///
/// let t: Vec<f64> = (0..500).map(|i| i as f64 * 0.002).collect();
/// let y: Vec<f64> = t.iter().map(|t| (10. * t).sin()).collect();
///
/// let smooth = TimeSeriesSmoother::new().x(&t).y(&y).bandwidth(0.01).run().unwrap();
///
/// assert_eq!(smooth.len(), y.len());
/// ```
#[derive(Clone, Debug)]
pub struct TimeSeriesSmoother<'a> {
    config: Config,
    x: Option<&'a [f64]>,
    y: Option<&'a [f64]>,
    bandwidth: Option<f64>,
    outputs: usize,
}

impl<'a> Default for TimeSeriesSmoother<'a> {
    fn default() -> TimeSeriesSmoother<'a> {
        TimeSeriesSmoother {
            config: Config::default(),
            x: None,
            y: None,
            bandwidth: None,
            outputs: 1,
        }
    }
}

impl<'a> TimeSeriesSmoother<'a> {
    pub fn new() -> TimeSeriesSmoother<'a> {
        TimeSeriesSmoother::default()
    }

    pub fn config(mut self, config: Config) -> TimeSeriesSmoother<'a> {
        self.config = config;
        self
    }

    /// Sample times
    pub fn x(mut self, x: &'a [f64]) -> TimeSeriesSmoother<'a> {
        self.x = Some(x);
        self
    }

    /// Sample values
    pub fn y(mut self, y: &'a [f64]) -> TimeSeriesSmoother<'a> {
        self.y = Some(y);
        self
    }

    /// Bandwidth, in the units of `x`
    pub fn bandwidth(mut self, bw: f64) -> TimeSeriesSmoother<'a> {
        self.bandwidth = Some(bw);
        self
    }

    /// The smoother has a single output
    pub fn outputs(mut self, n: usize) -> TimeSeriesSmoother<'a> {
        self.outputs = n;
        self
    }

    /// Returns the smoothed series, one value per sample
    ///
    /// - Multithreaded
    /// - Time: `O(length * nbin)`
    pub fn run(&self) -> Result<Vec<f64>> {
        check_outputs(self.outputs, 1)?;

        let x = self.x.ok_or(Error::MissingArgument("x"))?;
        let y = self.y.ok_or(Error::MissingArgument("y"))?;
        let bw = self.bandwidth.ok_or(Error::MissingArgument("bw"))?;

        if x.is_empty() {
            return Err(Error::EmptyInput("x"));
        }
        if y.is_empty() {
            return Err(Error::EmptyInput("y"));
        }
        if x.len() != y.len() {
            return Err(Error::DimensionMismatch {
                x: x.len(),
                y: y.len(),
            });
        }
        if !bandwidth::is_valid(bw) {
            return Err(Error::InvalidBandwidth(bw));
        }

        let dt = if x.len() > 1 { x[1] - x[0] } else { 0. };
        let nbin = bin_count(bw, dt, x.len());
        debug!(
            "Kernel spans {} samples on either side (dt = {}, bw = {})",
            nbin, dt, bw
        );

        let table = KernelTable::new(Gaussian::new(bw), dt, nbin);

        self.config.install(|| smooth(&table, y))
    }
}

/// Smooths the uniformly sampled series `(x, y)` with bandwidth `bw`
///
/// See `TimeSeriesSmoother` for the preconditions on `x`.
pub fn uniform_time_series_smooth(x: &[f64], y: &[f64], bw: f64) -> Result<Vec<f64>> {
    TimeSeriesSmoother::new().x(x).y(y).bandwidth(bw).run()
}

/// Number of samples the kernel reaches on either side, at most `n - 1`
fn bin_count(bw: f64, dt: f64, n: usize) -> usize {
    let widest = n - 1;

    match cast::usize((bw / dt * RADIUS_BANDWIDTHS).round()) {
        Ok(nbin) => nbin.min(widest),
        Err(cast::Error::Overflow) | Err(cast::Error::Infinite) => widest,
        Err(_) => 0,
    }
}

fn smooth(table: &KernelTable, y: &[f64]) -> Vec<f64> {
    let n = y.len();
    let nbin = table.nbin();
    let weights = table.weights();

    #[cfg(feature = "rayon")]
    let iter = (0..n).into_par_iter();
    #[cfg(not(feature = "rayon"))]
    let iter = 0..n;

    iter.map(|i| {
        let lo = i.saturating_sub(nbin);
        let hi = (i + nbin + 1).min(n);
        // offsets of `lo` and `hi` into the table
        let (from, to) = (lo + nbin - i, hi + nbin - i);

        let sum: f64 = weights[from..to]
            .iter()
            .zip(&y[lo..hi])
            .map(|(&w, &y)| w * y)
            .sum();

        sum / table.mass(from, to)
    })
    .collect()
}
