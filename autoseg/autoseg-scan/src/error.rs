//! Error types for point cloud generation.

use autoseg_types::RegionError;
use thiserror::Error;

/// Result type for point cloud generation.
pub type ScanResult<T> = Result<T, ScanError>;

/// Errors that can occur while generating a point cloud.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ScanError {
    /// Point density was zero, negative, or not finite.
    #[error("point density must be finite and positive, got {0}")]
    InvalidDensity(f64),

    /// The sampler could not produce points.
    #[error("sampling failed: {reason}")]
    Sampling {
        /// Description of why sampling failed.
        reason: String,
    },

    /// The points could not be written to the output region.
    #[error(transparent)]
    Region(#[from] RegionError),
}

impl ScanError {
    /// Create a sampling error.
    #[must_use]
    pub fn sampling(reason: impl Into<String>) -> Self {
        Self::Sampling {
            reason: reason.into(),
        }
    }
}
