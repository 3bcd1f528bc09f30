use crate::error::Result;
use crate::math;
use crate::sample::Sample;

/// Number of points of a domain that was not specified
pub const DEFAULT_DOMAIN_POINTS: usize = 100;

/// Points at which an estimator is evaluated
#[derive(Clone, Debug, PartialEq)]
pub enum Domain {
    /// `DEFAULT_DOMAIN_POINTS` evenly spaced points between the smallest and biggest sample
    Default,
    /// The given number of evenly spaced points between the smallest and biggest sample; `0`
    /// means `DEFAULT_DOMAIN_POINTS`
    Count(usize),
    /// Exactly these points. NaNs and infinities are dropped and the rest is sorted. An empty
    /// list means `Default`
    Points(Vec<f64>),
}

impl Default for Domain {
    fn default() -> Domain {
        Domain::Default
    }
}

impl From<usize> for Domain {
    fn from(n: usize) -> Domain {
        Domain::Count(n)
    }
}

impl From<Vec<f64>> for Domain {
    fn from(points: Vec<f64>) -> Domain {
        Domain::Points(points)
    }
}

impl<'a> From<&'a [f64]> for Domain {
    fn from(points: &'a [f64]) -> Domain {
        Domain::Points(points.to_vec())
    }
}

impl Domain {
    /// Materializes the domain as ascending, finite points over the range of `sample`
    pub fn build(&self, sample: &Sample) -> Result<Vec<f64>> {
        let n = match self {
            Domain::Points(points) if !points.is_empty() => {
                let points = Sample::new(points, "d")?;
                if points.dropped() > 0 {
                    debug!("Dropped {} non-finite domain points", points.dropped());
                }
                return Ok(points.into_vec());
            }
            Domain::Count(n) if *n > 0 => *n,
            _ => DEFAULT_DOMAIN_POINTS,
        };

        Ok(math::linspace(sample.min(), sample.max(), n))
    }
}
