//! Kernel bandwidth selection

use crate::error::{Error, Result};
use crate::math::{self, ecdf};

/// Method to obtain the kernel bandwidth
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Bandwidth {
    /// Use the given value
    Fixed(f64),
    /// Use Silverman's rule of thumb to estimate the bandwidth from the sample
    Silverman,
}

impl Default for Bandwidth {
    fn default() -> Bandwidth {
        Bandwidth::Silverman
    }
}

impl From<f64> for Bandwidth {
    /// Zero, negative, NaN and infinite values select Silverman's rule
    fn from(bw: f64) -> Bandwidth {
        if is_valid(bw) {
            Bandwidth::Fixed(bw)
        } else {
            Bandwidth::Silverman
        }
    }
}

impl From<Option<f64>> for Bandwidth {
    fn from(bw: Option<f64>) -> Bandwidth {
        bw.map_or(Bandwidth::Silverman, Bandwidth::from)
    }
}

impl Bandwidth {
    /// Returns the concrete bandwidth for the sorted, finite `sample`
    pub fn resolve(self, sample: &[f64]) -> Result<f64> {
        match self {
            Bandwidth::Fixed(bw) if is_valid(bw) => Ok(bw),
            _ => {
                let bw = silverman(sample)?;
                debug!("Selected bandwidth {} with Silverman's rule", bw);
                Ok(bw)
            }
        }
    }
}

/// `true` for positive, finite bandwidths
pub fn is_valid(bw: f64) -> bool {
    bw > 0. && bw.is_finite()
}

/// Silverman's rule of thumb: `0.9 * min(std_dev, iqr / 1.34) * n ^ (-1/5)`
///
/// `sorted` must be ascending and finite. When one of the two spread measures is zero the other
/// one is used.
///
/// - Time: `O(length)`
pub fn silverman(sorted: &[f64]) -> Result<f64> {
    let n = sorted.len();

    if n < 2 {
        return Err(Error::InsufficientDataForBandwidth(n));
    }

    let sigma = math::std_dev(sorted, None);
    let iqr = ecdf::iqr(sorted) / 1.34;

    let spread = match (sigma > 0., iqr > 0.) {
        (true, true) => sigma.min(iqr),
        (true, false) => sigma,
        (false, true) => iqr,
        (false, false) => return Err(Error::InsufficientDataForBandwidth(n)),
    };

    Ok(0.9 * spread * (n as f64).powf(-0.2))
}
