//! Single-channel intensity field derived from an image volume.

// Voxel indices fit in f64; floor of a clamped non-negative value fits in usize
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]

use tracing::debug;

use crate::volume::{Components, ImageVolume};

/// PAL/NTSC luma weights for red, green, and blue.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// Luminance of an RGB sample: `0.299 r + 0.587 g + 0.114 b`.
///
/// # Example
///
/// ```
/// use autoseg_volume::luminance;
///
/// assert!((luminance(1.0, 1.0, 1.0) - 1.0).abs() < 1e-12);
/// assert!((luminance(0.0, 1.0, 0.0) - 0.587).abs() < 1e-12);
/// ```
#[inline]
#[must_use]
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    LUMINANCE_WEIGHTS[2].mul_add(b, LUMINANCE_WEIGHTS[1].mul_add(g, LUMINANCE_WEIGHTS[0] * r))
}

/// Intensity in `[0, 1]` over the volume.
///
/// Immutable once derived. Values can be read per voxel, or sampled at a
/// normalized location `xi ∈ [0, 1]³` with trilinear interpolation and clamp
/// to edge. Voxel centers sit at `xi = (i + 0.5) / n`.
#[derive(Debug, Clone)]
pub struct ScalarField {
    size: [usize; 3],
    values: Vec<f32>,
}

impl ScalarField {
    /// Derive the field from `volume`. See [`derive_scalar_field`].
    #[must_use]
    pub fn derive(volume: &ImageVolume) -> Self {
        let values: Vec<f32> = match volume.components() {
            Components::Gray => volume.samples().iter().map(|v| v.clamp(0.0, 1.0)).collect(),
            Components::Rgb => volume
                .samples()
                .chunks_exact(3)
                .map(|rgb| {
                    let l = luminance(f64::from(rgb[0]), f64::from(rgb[1]), f64::from(rgb[2]));
                    l.clamp(0.0, 1.0) as f32
                })
                .collect(),
        };
        debug!(
            voxels = values.len(),
            converted = volume.components() == Components::Rgb,
            "Derived scalar field"
        );
        Self {
            size: volume.size_in_pixels(),
            values,
        }
    }

    /// Grid size in voxels.
    #[must_use]
    pub const fn size(&self) -> [usize; 3] {
        self.size
    }

    /// All values, X fastest.
    #[must_use]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// Value of voxel `(i, j, k)`.
    ///
    /// # Panics
    ///
    /// Panics if the voxel is outside the grid.
    #[must_use]
    pub fn value(&self, i: usize, j: usize, k: usize) -> f64 {
        f64::from(self.values[(k * self.size[1] + j) * self.size[0] + i])
    }

    /// Trilinearly interpolated value at normalized location `xi`.
    ///
    /// Locations outside `[0, 1]³` take the value of the nearest edge.
    #[must_use]
    pub fn sample(&self, xi: [f64; 3]) -> f64 {
        let mut lower = [0_usize; 3];
        let mut upper = [0_usize; 3];
        let mut t = [0.0_f64; 3];
        for axis in 0..3 {
            let n = self.size[axis];
            let p = xi[axis].mul_add(n as f64, -0.5).clamp(0.0, (n - 1) as f64);
            let p = if p.is_nan() { 0.0 } else { p };
            lower[axis] = p.floor() as usize;
            upper[axis] = (lower[axis] + 1).min(n - 1);
            t[axis] = p - lower[axis] as f64;
        }

        let mut result = 0.0;
        for corner in 0..8 {
            let mut weight = 1.0;
            let mut index = [0_usize; 3];
            for axis in 0..3 {
                if corner >> axis & 1 == 1 {
                    weight *= t[axis];
                    index[axis] = upper[axis];
                } else {
                    weight *= 1.0 - t[axis];
                    index[axis] = lower[axis];
                }
            }
            if weight > 0.0 {
                result += weight * self.value(index[0], index[1], index[2]);
            }
        }
        result
    }

    /// Smallest and largest value in the field.
    #[must_use]
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(f64::from(v)), hi.max(f64::from(v)))
            })
    }
}

/// Derive the single-channel scalar field of `volume`.
///
/// Three component volumes go through [`luminance`]; single component volumes
/// pass through unchanged.
#[must_use]
pub fn derive_scalar_field(volume: &ImageVolume) -> ScalarField {
    ScalarField::derive(volume)
}
