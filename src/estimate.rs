/// Which estimator produced an `Estimate`
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Kind {
    Density,
    Regression,
}

impl Kind {
    /// Most outputs the estimator can return
    pub fn max_outputs(self) -> usize {
        match self {
            Kind::Density => 2,
            Kind::Regression => 3,
        }
    }
}

/// Result of a density or regression call
///
/// `estimate` (and `error`, when computed) are aligned with `domain`, which is the sanitized,
/// ascending evaluation domain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    pub kind: Kind,
    /// Number of outputs the caller asked for, at least 1
    pub outputs: usize,
    /// Bandwidth that was used, either the given one or Silverman's
    pub bandwidth: f64,
    pub domain: Vec<f64>,
    pub estimate: Vec<f64>,
    pub error: Option<Vec<f64>>,
}

impl Estimate {
    /// Returns the requested outputs in positional order
    ///
    /// - density: `[estimate]`, `[estimate, error]`
    /// - regression: `[estimate]`, `[domain, estimate]`, `[domain, estimate, error]`
    ///
    /// Values follow the sanitized, ascending `domain`, not the order the points were passed in.
    /// Density outputs never include the domain, so callers that passed an unsorted or
    /// non-finite domain should read `Estimate::domain` (or sort their points first) to match
    /// values to points.
    pub fn into_outputs(self) -> Vec<Vec<f64>> {
        let Estimate {
            kind,
            outputs,
            domain,
            estimate,
            error,
            ..
        } = self;

        let mut out = Vec::with_capacity(outputs);
        if kind == Kind::Regression && outputs > 1 {
            out.push(domain);
        }
        out.push(estimate);
        out.extend(error);
        out
    }
}
