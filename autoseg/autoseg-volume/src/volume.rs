//! Image volume: a stack of equally sized slices.

// Pixel dimensions fit comfortably in f64 and u32
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]

use image::DynamicImage;
use tracing::{debug, info, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::source::ImageSource;
use crate::{VolumeError, VolumeResult};

/// Number of color components per voxel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Components {
    /// Single intensity channel.
    Gray,
    /// Red, green, and blue channels.
    Rgb,
}

impl Components {
    /// Number of samples stored per voxel.
    #[inline]
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Gray => 1,
            Self::Rgb => 3,
        }
    }

    fn of(image: &DynamicImage) -> Self {
        if image.color().has_color() {
            Self::Rgb
        } else {
            Self::Gray
        }
    }
}

/// A 3D grid of normalized image samples.
///
/// Samples are in `[0, 1]`, stored with the components of a voxel adjacent and
/// X varying fastest, then Y, then Z (slice):
/// `index = ((k * height + j) * width + i) * components + c`.
///
/// The size in pixels is fixed when the volume is created. The per-axis scale
/// may change afterwards.
#[derive(Debug, Clone)]
pub struct ImageVolume {
    size: [usize; 3],
    components: Components,
    samples: Vec<f32>,
    scale: [f64; 3],
}

impl ImageVolume {
    /// Create a volume from raw normalized samples.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidVolume`] if any axis is zero or the sample
    /// count does not match `size` and `components`.
    ///
    /// # Example
    ///
    /// ```
    /// use autoseg_volume::{Components, ImageVolume};
    ///
    /// let volume = ImageVolume::from_samples([2, 2, 1], Components::Gray, vec![0.0, 0.25, 0.5, 1.0]).unwrap();
    /// assert_eq!(volume.voxel_count(), 4);
    /// assert_eq!(volume.voxel(1, 1, 0), &[1.0]);
    /// ```
    pub fn from_samples(
        size: [usize; 3],
        components: Components,
        samples: Vec<f32>,
    ) -> VolumeResult<Self> {
        if size.contains(&0) {
            return Err(VolumeError::invalid_volume(format!(
                "size {size:?} has an empty axis"
            )));
        }
        let expected = size[0] * size[1] * size[2] * components.count();
        if samples.len() != expected {
            return Err(VolumeError::invalid_volume(format!(
                "size {size:?} with {} components needs {expected} samples, got {}",
                components.count(),
                samples.len()
            )));
        }
        Ok(Self {
            size,
            components,
            samples,
            scale: [1.0; 3],
        })
    }

    /// Size in pixels as `[width, height, slices]`.
    #[must_use]
    pub const fn size_in_pixels(&self) -> [usize; 3] {
        self.size
    }

    /// Color components per voxel.
    #[must_use]
    pub const fn components(&self) -> Components {
        self.components
    }

    /// Total number of voxels.
    #[must_use]
    pub const fn voxel_count(&self) -> usize {
        self.size[0] * self.size[1] * self.size[2]
    }

    /// All samples in storage order.
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }

    /// Components of voxel `(i, j, k)`.
    ///
    /// # Panics
    ///
    /// Panics if the voxel is outside the volume.
    #[must_use]
    pub fn voxel(&self, i: usize, j: usize, k: usize) -> &[f32] {
        let c = self.components.count();
        let start = ((k * self.size[1] + j) * self.size[0] + i) * c;
        &self.samples[start..start + c]
    }

    /// Per-axis scale factors.
    #[must_use]
    pub const fn scale(&self) -> [f64; 3] {
        self.scale
    }

    /// Replace the per-axis scale factors.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidScale`] unless every factor is finite and positive.
    pub fn set_scale(&mut self, scale: [f64; 3]) -> VolumeResult<()> {
        validate_scale(scale)?;
        self.scale = scale;
        Ok(())
    }
}

pub(crate) fn validate_scale(scale: [f64; 3]) -> VolumeResult<()> {
    if scale.iter().all(|s| s.is_finite() && *s > 0.0) {
        Ok(())
    } else {
        Err(VolumeError::InvalidScale(scale))
    }
}

/// Read every resource of `source` into a volume, one slice per resource.
///
/// Gray images become single component volumes; color images become
/// three component volumes. Alpha channels are dropped. 8 and 16 bit
/// samples are normalized to `[0, 1]`.
///
/// # Errors
///
/// - [`VolumeError::NoImages`] if the source is empty
/// - [`VolumeError::ImageLoad`] if a resource is missing or unreadable
/// - [`VolumeError::InconsistentDimensions`] / [`VolumeError::InconsistentComponents`]
///   if a slice does not match the first one
pub fn load_volume<S: ImageSource + ?Sized>(source: &S) -> VolumeResult<ImageVolume> {
    let resources = source.image_resources()?;
    if resources.is_empty() {
        return Err(VolumeError::NoImages);
    }

    let mut first: Option<((u32, u32), Components)> = None;
    let mut samples = Vec::new();

    for (slice, resource) in resources.iter().enumerate() {
        let image = resource.decode()?;
        let dims = (image.width(), image.height());
        let components = Components::of(&image);

        match first {
            None => {
                first = Some((dims, components));
                samples.reserve(
                    dims.0 as usize * dims.1 as usize * components.count() * resources.len(),
                );
            }
            Some((expected, _)) if expected != dims => {
                return Err(VolumeError::InconsistentDimensions {
                    slice,
                    expected,
                    actual: dims,
                });
            }
            Some((_, expected)) if expected != components => {
                return Err(VolumeError::InconsistentComponents {
                    slice,
                    expected: expected.count(),
                    actual: components.count(),
                });
            }
            Some(_) => {}
        }

        if image.color().has_alpha() {
            warn!(resource = %resource.name(), "Dropping alpha channel");
        }

        match components {
            Components::Gray => samples.extend(image.to_luma32f().into_raw()),
            Components::Rgb => samples.extend(image.to_rgb32f().into_raw()),
        }
        debug!(slice, resource = %resource.name(), "Read slice");
    }

    let Some(((width, height), components)) = first else {
        return Err(VolumeError::NoImages);
    };
    let size = [width as usize, height as usize, resources.len()];
    info!(size = ?size, components = components.count(), "Loaded image volume");

    ImageVolume::from_samples(size, components, samples)
}
