//! Parameters for building a volume field model.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::histogram::DEFAULT_BIN_COUNT;

/// Parameters for building a [`VolumeFieldModel`](crate::VolumeFieldModel).
///
/// # Example
///
/// ```
/// use autoseg_volume::VolumeParams;
///
/// let params = VolumeParams::default();
/// assert_eq!(params.bin_count, 100);
/// assert_eq!(params.scale, [1.0, 1.0, 1.0]);
///
/// // Anisotropic CT stack: 0.5 mm pixels, 2 mm slices
/// let ct = VolumeParams::default().scale([0.5, 0.5, 2.0]);
/// assert_eq!(ct.scale[2], 2.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VolumeParams {
    /// Number of histogram bins.
    pub bin_count: usize,

    /// Initial per-axis scale of the bounding mesh.
    pub scale: [f64; 3],
}

impl Default for VolumeParams {
    fn default() -> Self {
        Self {
            bin_count: DEFAULT_BIN_COUNT,
            scale: [1.0; 3],
        }
    }
}

impl VolumeParams {
    /// Params with a custom histogram bin count and unit scale.
    #[must_use]
    pub const fn with_bin_count(bin_count: usize) -> Self {
        Self {
            bin_count,
            scale: [1.0; 3],
        }
    }

    /// Params with a coarse 10 bin histogram, for previews.
    #[must_use]
    pub const fn coarse() -> Self {
        Self::with_bin_count(10)
    }

    /// Set the histogram bin count.
    #[must_use]
    pub const fn bin_count(mut self, bin_count: usize) -> Self {
        self.bin_count = bin_count;
        self
    }

    /// Set the initial scale.
    #[must_use]
    pub const fn scale(mut self, scale: [f64; 3]) -> Self {
        self.scale = scale;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_params() {
        let params = VolumeParams::default();
        assert_eq!(params.bin_count, 100);
        assert!(params.scale.iter().all(|s| (s - 1.0).abs() < f64::EPSILON));
    }

    #[test]
    fn test_builder_pattern() {
        let params = VolumeParams::coarse().scale([2.0, 2.0, 1.0]).bin_count(20);
        assert_eq!(params.bin_count, 20);
        assert_eq!(params.scale, [2.0, 2.0, 1.0]);
        assert_eq!(VolumeParams::with_bin_count(7).bin_count, 7);
    }
}
