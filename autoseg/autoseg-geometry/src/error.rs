//! Error types for geometry operations.

use thiserror::Error;

/// Result type for geometry operations.
pub type GeometryResult<T> = Result<T, GeometryError>;

/// Errors that can occur in geometry utilities.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// An operation that needs at least one input got none.
    #[error("empty input: {operation} needs at least one point")]
    EmptyInput {
        /// Name of the operation that was called.
        operation: &'static str,
    },

    /// A zero-length vector or axis made the result undefined.
    #[error("degenerate geometry: {reason}")]
    DegenerateGeometry {
        /// What was degenerate.
        reason: String,
    },
}

impl GeometryError {
    /// Create an empty input error for `operation`.
    #[must_use]
    pub const fn empty_input(operation: &'static str) -> Self {
        Self::EmptyInput { operation }
    }

    /// Create a degenerate geometry error.
    #[must_use]
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = GeometryError::empty_input("calculate_centroid");
        assert!(format!("{err}").contains("calculate_centroid"));

        let err = GeometryError::degenerate("zero-length axis");
        assert!(format!("{err}").contains("zero-length axis"));
    }
}
