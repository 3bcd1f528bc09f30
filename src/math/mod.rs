//! Numeric helpers shared by the estimators
//!
//! All functions assume finite input; the sanitizer in `crate::sample` is responsible for that.

pub mod ecdf;
mod linspace;

use std::ops::Add;

pub use self::linspace::LinSpace;

/// Returns `n` evenly spaced points over `[start, end]`
///
/// A single point is `start`.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    LinSpace::new(start, end, n).collect()
}

/// Returns the smallest element of `xs`
///
/// - Time: `O(length)`
///
/// # Panics
///
/// Panics if `xs` is empty
pub fn min(xs: &[f64]) -> f64 {
    let mut elems = xs.iter();

    match elems.next() {
        Some(&head) => elems.fold(head, |a, &b| a.min(b)),
        None => panic!("min of an empty slice"),
    }
}

/// Returns the biggest element of `xs`
///
/// - Time: `O(length)`
///
/// # Panics
///
/// Panics if `xs` is empty
pub fn max(xs: &[f64]) -> f64 {
    let mut elems = xs.iter();

    match elems.next() {
        Some(&head) => elems.fold(head, |a, &b| a.max(b)),
        None => panic!("max of an empty slice"),
    }
}

/// Returns the arithmetic average of `xs`
///
/// - Time: `O(length)`
pub fn mean(xs: &[f64]) -> f64 {
    xs.iter().cloned().fold(0., Add::add) / xs.len() as f64
}

/// Returns the sample standard deviation (`n - 1` denominator)
///
/// The `mean` can be optionally passed along to skip a pass over the data. The result is NaN
/// for fewer than two elements.
///
/// - Time: `O(length)`
pub fn std_dev(xs: &[f64], mean: Option<f64>) -> f64 {
    let mean = mean.unwrap_or_else(|| self::mean(xs));

    let sum = xs
        .iter()
        .map(|&x| {
            let d = x - mean;
            d * d
        })
        .fold(0., Add::add);

    (sum / (xs.len() as f64 - 1.)).sqrt()
}

/// Stable sort of `xs` that also returns the permutation applied
///
/// `sorted[k] == xs[perm[k]]`. Equal values keep their input order. Uses the IEEE total order,
/// which only differs from `<` on finite values in placing `-0.0` before `0.0`.
///
/// - Time: `O(N log N)`
/// - Memory: `O(N)`
pub fn sort_with_permutation(xs: &[f64]) -> (Vec<f64>, Vec<usize>) {
    let mut pairs: Vec<(f64, usize)> = xs.iter().cloned().zip(0..).collect();

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0));

    pairs.into_iter().unzip()
}
