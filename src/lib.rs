//! Gaussian kernel smoothing of scattered samples.
//!
//! Three estimators share one windowed evaluator:
//!
//! - [`density_estimate`] / [`DensityEstimate`]: kernel density of a sample
//! - [`kernel_regression`] / [`KernelRegression`]: kernel-weighted mean of `y` given `x`
//! - [`uniform_time_series_smooth`] / [`TimeSeriesSmoother`]: the same regression for equally
//!   spaced samples, using a precomputed kernel table
//!
//! Samples and domain points are sorted first, so the set of samples within three bandwidths of
//! each domain point can be tracked with two cursors that only move forward. Estimates therefore
//! cost `O(domain + sample)` kernel evaluations rather than `O(domain * sample)`. The per-point
//! sums run on rayon's pool when the `rayon` feature (on by default) is enabled.
//!
//! ```rust
//! use ksmooth::{kernel_regression, Domain};
//!
//! let x = [0., 1., 2., 3., 4., 5.];
//! let y = [0., 1., 4., 9., 16., 25.];
//!
//! let fit = kernel_regression(&x, &y, vec![0., 2.5, 5.], Some(1.), 1).unwrap();
//!
//! assert!(fit.estimate[1] > 4. && fit.estimate[1] < 9.);
//! ```
//!
//! Nothing is logged unless the application installs a `log` implementation; the estimators
//! report dropped records and the selected bandwidth at `debug` level.

#![warn(bare_trait_objects)]

#[macro_use]
extern crate log;
#[macro_use]
extern crate serde_derive;


pub mod bandwidth;
pub mod engine;
pub mod kernel;
pub mod math;
pub mod sample;
pub mod window;

mod config;
mod density;
mod domain;
mod error;
mod estimate;
mod regression;
mod timeseries;

pub use crate::bandwidth::Bandwidth;
pub use crate::config::Config;
pub use crate::density::{density_estimate, DensityEstimate};
pub use crate::domain::{Domain, DEFAULT_DOMAIN_POINTS};
pub use crate::error::{Error, Result};
pub use crate::estimate::{Estimate, Kind};
pub use crate::regression::{kernel_regression, KernelRegression};
pub use crate::timeseries::{uniform_time_series_smooth, TimeSeriesSmoother};
