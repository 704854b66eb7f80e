//! Error types for volume operations.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for volume operations.
pub type VolumeResult<T> = Result<T, VolumeError>;

/// Errors that can occur while loading or deriving volume data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum VolumeError {
    /// The image source yielded no resources.
    #[error("image source contains no images")]
    NoImages,

    /// The image source could not be listed.
    #[error("cannot list images in {path}: {source}")]
    Io {
        /// Directory that was being listed.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// An image resource was missing or could not be decoded.
    #[error("cannot read image {resource}: {source}")]
    ImageLoad {
        /// Name of the failing resource.
        resource: String,
        /// Underlying decoder error.
        source: image::ImageError,
    },

    /// A slice has a different size from the first slice.
    #[error("slice {slice} is {actual:?} pixels, expected {expected:?}")]
    InconsistentDimensions {
        /// Zero-based slice index.
        slice: usize,
        /// Width and height of the first slice.
        expected: (u32, u32),
        /// Width and height of this slice.
        actual: (u32, u32),
    },

    /// A slice has a different number of color components from the first slice.
    #[error("slice {slice} has {actual} components, expected {expected}")]
    InconsistentComponents {
        /// Zero-based slice index.
        slice: usize,
        /// Component count of the first slice.
        expected: usize,
        /// Component count of this slice.
        actual: usize,
    },

    /// The volume has zero voxels or a sample buffer of the wrong length.
    #[error("invalid volume: {0}")]
    InvalidVolume(String),

    /// A scale factor was zero, negative, or not finite.
    #[error("scale factors must be finite and positive, got {0:?}")]
    InvalidScale([f64; 3]),

    /// Invalid parameters.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),
}

impl VolumeError {
    /// Create an invalid volume error.
    #[must_use]
    pub fn invalid_volume(details: impl Into<String>) -> Self {
        Self::InvalidVolume(details.into())
    }

    /// Create an invalid params error.
    #[must_use]
    pub fn invalid_params(details: impl Into<String>) -> Self {
        Self::InvalidParams(details.into())
    }

    /// Returns true for failures to read image resources.
    ///
    /// These are permanent for the given input and are reported to the user
    /// rather than retried.
    #[must_use]
    pub const fn is_image_load_error(&self) -> bool {
        matches!(
            self,
            Self::NoImages
                | Self::Io { .. }
                | Self::ImageLoad { .. }
                | Self::InconsistentDimensions { .. }
                | Self::InconsistentComponents { .. }
        )
    }
}
