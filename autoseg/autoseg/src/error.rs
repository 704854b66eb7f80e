//! Error type for the auto-segmentation model.

use autoseg_geometry::GeometryError;
use autoseg_plane::PlaneError;
use autoseg_scan::ScanError;
use autoseg_types::RegionError;
use autoseg_volume::VolumeError;
use thiserror::Error;

/// Result type alias for model operations.
pub type SegmentationResult<T> = Result<T, SegmentationError>;

/// Any failure surfaced by [`AutoSegmentationModel`](crate::AutoSegmentationModel).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SegmentationError {
    /// Loading the images or deriving the volume fields failed.
    #[error(transparent)]
    Volume(#[from] VolumeError),

    /// Building or moving the detection plane failed.
    #[error(transparent)]
    Plane(#[from] PlaneError),

    /// Point generation failed.
    #[error(transparent)]
    Scan(#[from] ScanError),

    /// A geometry utility rejected its input.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// A region edit failed.
    #[error(transparent)]
    Region(#[from] RegionError),
}

impl SegmentationError {
    /// Returns true if the images could not be read.
    #[must_use]
    pub const fn is_image_load_error(&self) -> bool {
        match self {
            Self::Volume(err) => err.is_image_load_error(),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: SegmentationError = VolumeError::NoImages.into();
        assert_eq!(format!("{err}"), "image source contains no images");
        assert!(err.is_image_load_error());

        let err: SegmentationError = ScanError::InvalidDensity(0.0).into();
        assert!(format!("{err}").contains("density"));
        assert!(!err.is_image_load_error());
    }
}
