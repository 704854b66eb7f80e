//! Parameters for point cloud generation.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Parameters for point cloud generation.
///
/// # Example
///
/// ```
/// use autoseg_scan::PointCloudParams;
///
/// let params = PointCloudParams::default();
/// assert!((params.density - 100.0).abs() < f64::EPSILON);
///
/// let sparse = PointCloudParams::with_density(10.0);
/// assert!((sparse.density - 10.0).abs() < f64::EPSILON);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloudParams {
    /// Points per unit area handed to the sampler.
    pub density: f64,
}

impl Default for PointCloudParams {
    fn default() -> Self {
        Self { density: 100.0 }
    }
}

impl PointCloudParams {
    /// Params with a custom density.
    #[must_use]
    pub const fn with_density(density: f64) -> Self {
        Self { density }
    }

    /// Set the density.
    #[must_use]
    pub const fn density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Returns true if the density is finite and positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.density.is_finite() && self.density > 0.0
    }
}
