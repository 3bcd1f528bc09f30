//! Empirical CDF on a fixed grid, used for the interquartile range

use crate::math::{self, LinSpace};

/// Number of grid points the ECDF is evaluated on
pub const ECDF_POINTS: usize = 100;

/// Empirical cumulative distribution of a sorted sample, evaluated on
/// `linspace(min, max, ECDF_POINTS)`
///
/// The value at grid point `d[i]` is the proportion of the sample that lies at or below
/// `d[i] + h`, where `h` is half the grid spacing, i.e. every grid point owns the bin centred on
/// it.
pub struct Ecdf {
    grid: Vec<f64>,
    cdf: Vec<f64>,
}

impl Ecdf {
    /// Builds the ECDF of `sorted`
    ///
    /// - Time: `O(length + ECDF_POINTS)`
    ///
    /// # Panics
    ///
    /// Panics if `sorted` is empty
    pub fn new(sorted: &[f64]) -> Ecdf {
        debug_assert!(sorted.windows(2).all(|w| w[0] <= w[1]));

        let n = sorted.len();
        let (lo, hi) = (math::min(sorted), math::max(sorted));
        let grid: Vec<f64> = LinSpace::new(lo, hi, ECDF_POINTS).collect();
        let half = (grid[1] - grid[0]) / 2.;

        let mut count = 0;
        let cdf = grid
            .iter()
            .map(|&d| {
                while count < n && sorted[count] <= d + half {
                    count += 1;
                }
                count as f64 / n as f64
            })
            .collect();

        Ecdf { grid, cdf }
    }

    /// Inverts the ECDF at proportion `p` by linear interpolation between grid points
    ///
    /// Falls back to the top of the grid when the cumulative proportion never reaches `p`.
    pub fn quantile(&self, p: f64) -> f64 {
        match self.cdf.iter().position(|&f| f >= p) {
            Some(0) => self.grid[0],
            Some(i) => {
                let (f0, f1) = (self.cdf[i - 1], self.cdf[i]);
                let (d0, d1) = (self.grid[i - 1], self.grid[i]);

                d0 + (p - f0) / (f1 - f0) * (d1 - d0)
            }
            None => self.grid[self.grid.len() - 1],
        }
    }

    /// Returns the interquartile range
    pub fn iqr(&self) -> f64 {
        self.quantile(0.75) - self.quantile(0.25)
    }
}

/// Interquartile range of a sorted sample via ECDF inversion
pub fn iqr(sorted: &[f64]) -> f64 {
    Ecdf::new(sorted).iqr()
}
