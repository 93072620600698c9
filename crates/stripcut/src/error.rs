//! Error type shared by the sampler and its geometry helpers.

use thiserror::Error;

/// Failures of a sampling request. None of them leaves partial output behind.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StripError {
    /// A sampling region produced no Monte-Carlo points (`density * area` rounds to 0).
    #[error("degenerate sampling region: area {area} at density {density} yields no points")]
    DegenerateRegion { area: f64, density: f64 },

    /// A sampling region would need more points than a single draw allows.
    #[error("sampling region needs {requested} points, limit is {limit}")]
    TooManyPoints { requested: f64, limit: usize },

    /// The strip configuration cannot produce valid geometry for this image.
    #[error("invalid strip configuration: {reason}")]
    InvalidConfiguration { reason: String },

    /// Pixel buffer length disagrees with the declared dimensions.
    #[error("image size mismatch: expected {expected} bytes, got {actual}")]
    ImageSizeMismatch { expected: usize, actual: usize },
}

impl StripError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}
