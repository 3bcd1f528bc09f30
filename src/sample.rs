use std::ops;

use crate::error::{Error, Result};
use crate::math;

/// Sorted copy of a data array with every NaN and infinity removed
///
/// Invariants:
///
/// - The sample contains at least one data point
/// - The sample contains no `NaN`s or infinities
/// - The data points are in ascending order
#[derive(Clone, Debug)]
pub struct Sample {
    data: Box<[f64]>,
    dropped: usize,
}

impl Sample {
    /// Sanitizes and sorts `xs`
    ///
    /// `name` identifies the argument in errors.
    ///
    /// - Time: `O(N log N)`
    pub fn new(xs: &[f64], name: &'static str) -> Result<Sample> {
        if xs.is_empty() {
            return Err(Error::EmptyInput(name));
        }

        let mut data: Vec<f64> = xs.iter().cloned().filter(|x| x.is_finite()).collect();
        let dropped = xs.len() - data.len();

        if data.is_empty() {
            return Err(Error::InsufficientValidData(name));
        }

        if !is_sorted(&data) {
            data = math::sort_with_permutation(&data).0;
        }

        Ok(Sample {
            data: data.into_boxed_slice(),
            dropped,
        })
    }

    /// Number of non-finite values that were removed
    pub fn dropped(&self) -> usize {
        self.dropped
    }

    /// Returns the smallest element in the sample
    pub fn min(&self) -> f64 {
        self.data[0]
    }

    /// Returns the biggest element in the sample
    pub fn max(&self) -> f64 {
        self.data[self.data.len() - 1]
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.data.into_vec()
    }
}

impl ops::Deref for Sample {
    type Target = [f64];

    fn deref(&self) -> &[f64] {
        &self.data
    }
}

/// Paired `(x, y)` records sorted by `x`, with every record that has a non-finite coordinate
/// removed
///
/// Invariants:
///
/// - At least one record
/// - `x` and `y` have the same length and are finite
/// - `x` is in ascending order; `y[i]` is the response originally paired with `x[i]`
#[derive(Clone, Debug)]
pub struct Pairs {
    x: Sample,
    y: Box<[f64]>,
}

impl Pairs {
    /// Sanitizes and co-sorts `xs` and `ys`
    ///
    /// - Time: `O(N log N)`
    pub fn new(xs: &[f64], ys: &[f64]) -> Result<Pairs> {
        if xs.is_empty() {
            return Err(Error::EmptyInput("x"));
        }
        if ys.is_empty() {
            return Err(Error::EmptyInput("y"));
        }
        if xs.len() != ys.len() {
            return Err(Error::DimensionMismatch {
                x: xs.len(),
                y: ys.len(),
            });
        }

        let (valid_x, valid_y): (Vec<f64>, Vec<f64>) = xs
            .iter()
            .cloned()
            .zip(ys.iter().cloned())
            .filter(|&(x, y)| x.is_finite() && y.is_finite())
            .unzip();
        let dropped = xs.len() - valid_x.len();

        if valid_x.is_empty() {
            return Err(Error::InsufficientValidPairs);
        }

        let (x, perm) = math::sort_with_permutation(&valid_x);
        let y: Vec<f64> = perm.into_iter().map(|i| valid_y[i]).collect();

        Ok(Pairs {
            x: Sample {
                data: x.into_boxed_slice(),
                dropped,
            },
            y: y.into_boxed_slice(),
        })
    }

    /// Returns the sorted predictor values
    pub fn x(&self) -> &Sample {
        &self.x
    }

    /// Returns the responses, aligned with `x()`
    pub fn y(&self) -> &[f64] {
        &self.y
    }

    pub fn len(&self) -> usize {
        self.y.len()
    }

    pub fn is_empty(&self) -> bool {
        self.y.is_empty()
    }

    /// Number of records that were removed
    pub fn dropped(&self) -> usize {
        self.x.dropped
    }

    /// Iterate over the `(x, y)` records in ascending `x`
    pub fn iter(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x.iter().cloned().zip(self.y.iter().cloned())
    }
}

fn is_sorted(xs: &[f64]) -> bool {
    xs.windows(2).all(|w| w[0] <= w[1])
}
