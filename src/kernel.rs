//! Kernels

use std::f64::consts::PI;

/// Smoothing range in units of bandwidth
pub const RADIUS_BANDWIDTHS: f64 = 3.;

/// Kernel function
pub trait Kernel: Copy + Sync {
    /// Unnormalized weight of a sample at distance `diff` from the evaluation point
    fn weight(&self, diff: f64) -> f64;

    /// Integral of `weight` over the real line
    fn norm(&self) -> f64;

    /// Distance beyond which samples are ignored
    fn radius(&self) -> f64;
}

/// Gaussian kernel `exp(-d^2 / (2 * bw^2))`
#[derive(Clone, Copy, Debug)]
pub struct Gaussian {
    bandwidth: f64,
}

impl Gaussian {
    pub fn new(bandwidth: f64) -> Gaussian {
        Gaussian { bandwidth }
    }

    pub fn bandwidth(&self) -> f64 {
        self.bandwidth
    }
}

impl Kernel for Gaussian {
    // Scaled before squaring: `2 * bw^2` underflows for bandwidths below ~1e-162
    fn weight(&self, diff: f64) -> f64 {
        let z = diff / self.bandwidth;

        (-(z * z) / 2.).exp()
    }

    fn norm(&self) -> f64 {
        self.bandwidth * (2. * PI).sqrt()
    }

    fn radius(&self) -> f64 {
        self.bandwidth * RADIUS_BANDWIDTHS
    }
}

/// Kernel weights precomputed on a uniform grid of `2 * nbin + 1` offsets, with the running
/// mass used to renormalize truncated windows
pub struct KernelTable {
    nbin: usize,
    weights: Box<[f64]>,
    // cumulative[k] = weights[0] + ... + weights[k - 1]
    cumulative: Box<[f64]>,
}

impl KernelTable {
    /// Tabulates `kernel` at offsets `-nbin * step ..= nbin * step`
    ///
    /// - Time: `O(nbin)`
    pub fn new<K: Kernel>(kernel: K, step: f64, nbin: usize) -> KernelTable {
        let weights: Box<[f64]> = (0..=2 * nbin)
            .map(|k| kernel.weight((k as f64 - nbin as f64) * step))
            .collect();

        let mut acc = 0.;
        let cumulative = std::iter::once(0.)
            .chain(weights.iter().map(|&w| {
                acc += w;
                acc
            }))
            .collect();

        KernelTable {
            nbin,
            weights,
            cumulative,
        }
    }

    /// Half width of the table in grid steps
    pub fn nbin(&self) -> usize {
        self.nbin
    }

    /// Weights for offsets `-nbin ..= nbin`
    pub fn weights(&self) -> &[f64] {
        &self.weights
    }

    /// Total weight of table entries `[from, to)`
    pub fn mass(&self, from: usize, to: usize) -> f64 {
        self.cumulative[to] - self.cumulative[from]
    }
}
