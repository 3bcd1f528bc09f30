use std::fmt;

/// Violated precondition of a smoothing call
///
/// Every variant is detected before any kernel is evaluated; a failed call never produces a
/// partial result.
#[derive(Debug)]
pub enum Error {
    /// A required input was never supplied to a builder
    MissingArgument(&'static str),
    /// A required array was empty
    EmptyInput(&'static str),
    /// `x` and `y` have different lengths
    DimensionMismatch { x: usize, y: usize },
    /// Every value of the named input was NaN or infinite
    InsufficientValidData(&'static str),
    /// Every `(x, y)` record had a NaN or infinite coordinate
    InsufficientValidPairs,
    /// Silverman's rule needs at least two distinct samples
    InsufficientDataForBandwidth(usize),
    /// The time series smoother requires a positive, finite bandwidth
    InvalidBandwidth(f64),
    /// More outputs were requested than the routine produces
    TooManyOutputs { requested: usize, max: usize },
    /// The configured worker pool could not be created
    #[cfg(feature = "rayon")]
    ThreadPool(rayon::ThreadPoolBuildError),
}

#[cfg(feature = "rayon")]
impl From<rayon::ThreadPoolBuildError> for Error {
    fn from(other: rayon::ThreadPoolBuildError) -> Self {
        Error::ThreadPool(other)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingArgument(name) => write!(f, "Missing required argument '{}'", name),
            Error::EmptyInput(name) => write!(f, "Empty array passed to argument '{}'", name),
            Error::DimensionMismatch { x, y } => write!(
                f,
                "Dimension mismatch between arguments 'x' ({} elements) and 'y' ({} elements)",
                x, y
            ),
            Error::InsufficientValidData(name) => {
                write!(f, "Insufficient valid (finite) data in '{}'", name)
            }
            Error::InsufficientValidPairs => {
                f.write_str("Insufficient valid (finite) records in 'x' and 'y'")
            }
            Error::InsufficientDataForBandwidth(n) => write!(
                f,
                "Cannot estimate a bandwidth from {} sample(s); pass one explicitly",
                n
            ),
            Error::InvalidBandwidth(bw) => write!(
                f,
                "Argument 'bw' must be a positive, finite scalar (got {})",
                bw
            ),
            Error::TooManyOutputs { requested, max } => write!(
                f,
                "Cannot return more than {} outputs ({} requested)",
                max, requested
            ),
            #[cfg(feature = "rayon")]
            Error::ThreadPool(error) => write!(f, "Failed to build worker pool: {}", error),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "rayon")]
            Error::ThreadPool(err) => Some(err),
            _ => None,
        }
    }
}

pub type Result<T> = ::std::result::Result<T, Error>;

/// Rejects output counts above `max`
pub(crate) fn check_outputs(requested: usize, max: usize) -> Result<()> {
    if requested > max {
        Err(Error::TooManyOutputs { requested, max })
    } else {
        Ok(())
    }
}
