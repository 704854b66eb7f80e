//! Error types for detection plane operations.

use autoseg_geometry::GeometryError;
use autoseg_types::RegionError;
use thiserror::Error;

/// Result type alias for detection plane operations.
pub type PlaneResult<T> = Result<T, PlaneError>;

/// Errors that can occur while building or moving the detection plane.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum PlaneError {
    /// The plane normal or surface geometry was degenerate.
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// The detection surface could not be written to its region.
    #[error(transparent)]
    Region(#[from] RegionError),

    /// The detection surface would have zero or non-finite size.
    #[error("detection surface side must be finite and positive, got {0}")]
    InvalidSide(f64),
}

impl PlaneError {
    /// Returns true if the failure came from a degenerate normal or axis.
    #[must_use]
    pub const fn is_degenerate(&self) -> bool {
        matches!(self, Self::Geometry(GeometryError::DegenerateGeometry { .. }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err: PlaneError = GeometryError::degenerate("zero-length normal").into();
        assert!(format!("{err}").contains("zero-length normal"));
        assert!(err.is_degenerate());

        let err = PlaneError::InvalidSide(0.0);
        assert!(format!("{err}").contains("positive"));
        assert!(!err.is_degenerate());
    }
}
