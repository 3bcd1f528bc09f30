use crate::error::Result;

/// Execution settings shared by all estimators
///
/// ```rust
/// use ksmooth::Config;
///
/// let config = Config::default().threads(2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    threads: Option<usize>,
}

impl Config {
    /// Changes the number of worker threads used for the per-point kernel sums
    ///
    /// By default the global rayon pool is used, which has one worker per available CPU. A value
    /// of `0` restores that default. Without the `rayon` feature evaluation is sequential and
    /// this setting has no effect.
    pub fn threads(mut self, n: usize) -> Config {
        self.threads = if n == 0 { None } else { Some(n) };
        self
    }

    /// Returns the configured number of worker threads, `None` for the default
    pub fn get_threads(&self) -> Option<usize> {
        self.threads
    }

    /// Runs `op` on the configured workers
    pub(crate) fn install<OP, R>(&self, op: OP) -> Result<R>
    where
        OP: FnOnce() -> R + Send,
        R: Send,
    {
        #[cfg(feature = "rayon")]
        {
            if let Some(n) = self.threads {
                let pool = rayon::ThreadPoolBuilder::new().num_threads(n).build()?;
                trace!("Running on a dedicated pool of {} workers", n);

                return Ok(pool.install(op));
            }
        }

        Ok(op())
    }
}

#[cfg(test)]
mod test {
    use super::Config;

    #[test]
    fn zero_threads_means_default() {
        assert_eq!(Config::default().threads(0).get_threads(), None);
        assert_eq!(Config::default().threads(3).get_threads(), Some(3));
    }

    #[test]
    fn install_runs_the_operation() {
        let out = Config::default().threads(2).install(|| 40 + 2).unwrap();

        assert_eq!(out, 42);
    }

    #[cfg(feature = "rayon")]
    #[test]
    fn dedicated_pool_size() {
        let n = Config::default()
            .threads(3)
            .install(rayon::current_num_threads)
            .unwrap();

        assert_eq!(n, 3);
    }
}
