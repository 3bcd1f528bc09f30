/// Iterator over `n` evenly spaced points in `[start, end]`
///
/// Points are computed as `start + i * step` rather than by accumulation, so the last point
/// does not drift.
pub struct LinSpace {
    start: f64,
    step: f64,
    state: usize,
    stop: usize,
}

impl LinSpace {
    pub fn new(start: f64, end: f64, n: usize) -> LinSpace {
        let step = if n > 1 {
            (end - start) / (n - 1) as f64
        } else {
            0.
        };

        LinSpace {
            start,
            step,
            state: 0,
            stop: n,
        }
    }
}

impl Iterator for LinSpace {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        if self.state < self.stop {
            let curr = self.start + self.state as f64 * self.step;
            self.state += 1;

            Some(curr)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.stop - self.state;
        (left, Some(left))
    }
}

impl ExactSizeIterator for LinSpace {}
