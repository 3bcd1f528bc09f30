//! Per-domain-point ranges of samples that contribute to the kernel sum

use std::ops::Range;

/// Half-open bounds `[lo, hi)` into the sorted sample
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Window {
    pub lo: usize,
    pub hi: usize,
}

impl Window {
    pub fn range(&self) -> Range<usize> {
        self.lo..self.hi
    }

    pub fn len(&self) -> usize {
        self.hi - self.lo
    }

    pub fn is_empty(&self) -> bool {
        self.hi == self.lo
    }
}

/// One window per domain point
pub struct Windows(Box<[Window]>);

impl Windows {
    /// Sliding windows covering `[mu - radius, mu + radius)` for every point of `domain`
    ///
    /// Both `xs` and `domain` must be ascending. The two cursors only ever move forward, so the
    /// pass is sequential.
    ///
    /// - Time: `O(domain + xs)`
    pub fn sliding(xs: &[f64], domain: &[f64], radius: f64) -> Windows {
        debug_assert!(xs.windows(2).all(|w| w[0] <= w[1]));
        debug_assert!(domain.windows(2).all(|w| w[0] <= w[1]));

        let m = xs.len();
        let (mut lo, mut hi) = (0, 0);

        let windows = domain
            .iter()
            .map(|&mu| {
                let (lower, upper) = (mu - radius, mu + radius);

                while hi < m && xs[hi] < upper {
                    hi += 1;
                }
                while lo < hi && xs[lo] < lower {
                    lo += 1;
                }

                Window { lo, hi }
            })
            .collect();

        Windows(windows)
    }

    /// Windows spanning the whole sample for every domain point
    pub fn full(m: usize, n: usize) -> Windows {
        Windows(vec![Window { lo: 0, hi: m }; n].into_boxed_slice())
    }

    /// Total number of kernel evaluations the windows imply
    pub fn work(&self) -> usize {
        self.0.iter().map(Window::len).sum()
    }
}

impl std::ops::Deref for Windows {
    type Target = [Window];

    fn deref(&self) -> &[Window] {
        &self.0
    }
}
