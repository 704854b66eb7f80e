//! Normalized intensity histogram over every voxel of a volume.

// Voxel counts and bin counts fit in f64; rounded bin indices are non-negative
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scalar_field::ScalarField;
use crate::volume::ImageVolume;
use crate::{VolumeError, VolumeResult};

/// Number of bins used when no count is configured.
pub const DEFAULT_BIN_COUNT: usize = 100;

/// Normalized frequency of scalar field values.
///
/// Each bin holds the fraction of voxels whose value falls in it, so the bins
/// sum to 1.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Histogram {
    bins: Vec<f64>,
    sample_count: usize,
}

impl Histogram {
    /// Bin frequencies.
    #[must_use]
    pub fn bins(&self) -> &[f64] {
        &self.bins
    }

    /// Number of bins.
    #[must_use]
    pub fn bin_count(&self) -> usize {
        self.bins.len()
    }

    /// Number of samples that were binned.
    #[must_use]
    pub const fn sample_count(&self) -> usize {
        self.sample_count
    }

    /// Sum of all bins.
    #[must_use]
    pub fn total(&self) -> f64 {
        self.bins.iter().sum()
    }

    /// Bin of `value`: `round(value · bin_count)` clamped to the last bin.
    #[must_use]
    pub fn bin_index(value: f64, bin_count: usize) -> usize {
        let scaled = (value * bin_count as f64).round();
        if scaled.is_nan() || scaled <= 0.0 {
            0
        } else {
            (scaled as usize).min(bin_count - 1)
        }
    }
}

impl From<Histogram> for Vec<f64> {
    fn from(histogram: Histogram) -> Self {
        histogram.bins
    }
}

/// Bin the scalar field over every voxel of `volume`.
///
/// The field is sampled at each voxel center, `xi = (i + 0.5) / n` per axis,
/// and counts are divided by the total voxel count.
///
/// # Errors
///
/// Returns [`VolumeError::InvalidParams`] if `bin_count` is zero.
///
/// # Example
///
/// ```
/// use autoseg_volume::{Components, ImageVolume, compute_histogram, derive_scalar_field};
///
/// let volume = ImageVolume::from_samples([2, 1, 1], Components::Gray, vec![0.0, 1.0]).unwrap();
/// let field = derive_scalar_field(&volume);
/// let histogram = compute_histogram(&volume, &field, 10).unwrap();
///
/// assert_eq!(histogram.bins()[0], 0.5);
/// assert_eq!(histogram.bins()[9], 0.5);
/// ```
pub fn compute_histogram(
    volume: &ImageVolume,
    field: &ScalarField,
    bin_count: usize,
) -> VolumeResult<Histogram> {
    if bin_count == 0 {
        return Err(VolumeError::invalid_params("bin count must be at least 1"));
    }

    let [nx, ny, nz] = volume.size_in_pixels();
    let mut counts = vec![0_usize; bin_count];
    for k in 0..nz {
        let zk = (k as f64 + 0.5) / nz as f64;
        for j in 0..ny {
            let yj = (j as f64 + 0.5) / ny as f64;
            for i in 0..nx {
                let xi = (i as f64 + 0.5) / nx as f64;
                let value = field.sample([xi, yj, zk]);
                counts[Histogram::bin_index(value, bin_count)] += 1;
            }
        }
    }

    let sample_count = nx * ny * nz;
    let total = sample_count as f64;
    let bins = counts.into_iter().map(|c| c as f64 / total).collect();
    debug!(bin_count, sample_count, "Computed histogram");

    Ok(Histogram { bins, sample_count })
}
