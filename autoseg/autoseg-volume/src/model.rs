//! The volume field model: everything derived from one image volume.

use autoseg_types::Region;
use tracing::{debug, info};

use crate::field::FieldProvider;
use crate::hex::BoundingMesh;
use crate::histogram::{Histogram, compute_histogram};
use crate::params::VolumeParams;
use crate::scalar_field::{ScalarField, derive_scalar_field};
use crate::source::ImageSource;
use crate::volume::{Components, ImageVolume, load_volume};
use crate::VolumeResult;

/// Name of the auxiliary segmentation mesh region.
pub const SEGMENTATION_MESH_REGION: &str = "segmentation_mesh";

/// Owns an image volume and the geometry and fields derived from it.
///
/// The scalar field and histogram are computed once at construction. The
/// bounding mesh follows the volume scale.
#[derive(Debug, Clone)]
pub struct VolumeFieldModel {
    volume: ImageVolume,
    scalar_field: ScalarField,
    mesh: BoundingMesh,
    histogram: Histogram,
    segmentation_mesh: Region,
}

impl VolumeFieldModel {
    /// Build the model from a loaded volume.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidScale`](crate::VolumeError::InvalidScale) or
    /// [`VolumeError::InvalidParams`](crate::VolumeError::InvalidParams) for bad params.
    pub fn new(mut volume: ImageVolume, params: &VolumeParams) -> VolumeResult<Self> {
        volume.set_scale(params.scale)?;
        let scalar_field = derive_scalar_field(&volume);
        let histogram = compute_histogram(&volume, &scalar_field, params.bin_count)?;
        let mesh = BoundingMesh::new(volume.size_in_pixels(), params.scale)?;

        info!(
            dims = ?volume.size_in_pixels(),
            components = volume.components().count(),
            bins = histogram.bin_count(),
            "Built volume field model"
        );

        Ok(Self {
            volume,
            scalar_field,
            mesh,
            histogram,
            segmentation_mesh: Region::new(SEGMENTATION_MESH_REGION),
        })
    }

    /// Load the volume from `source` and build the model.
    ///
    /// # Errors
    ///
    /// Returns image loading errors from [`load_volume`], or parameter errors
    /// from [`new`](Self::new).
    pub fn from_source<S: ImageSource + ?Sized>(
        source: &S,
        params: &VolumeParams,
    ) -> VolumeResult<Self> {
        Self::new(load_volume(source)?, params)
    }

    /// Change the per-axis scale and move the bounding mesh nodes to match.
    ///
    /// Idempotent. The histogram and scalar field do not depend on scale.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidScale`](crate::VolumeError::InvalidScale);
    /// the model is left unchanged.
    pub fn set_scale(&mut self, scale: [f64; 3]) -> VolumeResult<()> {
        self.mesh.set_scale(scale)?;
        self.volume.set_scale(scale)?;
        debug!(scale = ?scale, "Volume scale changed");
        Ok(())
    }

    /// Current per-axis scale.
    #[must_use]
    pub const fn scale(&self) -> [f64; 3] {
        self.volume.scale()
    }

    /// Volume size in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> [usize; 3] {
        self.volume.size_in_pixels()
    }

    /// Color components of the source images.
    #[must_use]
    pub const fn components(&self) -> Components {
        self.volume.components()
    }

    /// The source image volume.
    #[must_use]
    pub const fn source_volume(&self) -> &ImageVolume {
        &self.volume
    }

    /// The cached histogram.
    #[must_use]
    pub const fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    /// The auxiliary segmentation mesh region.
    #[must_use]
    pub const fn segmentation_mesh(&self) -> &Region {
        &self.segmentation_mesh
    }

    /// Mutable access to the segmentation mesh region, for mesh producers.
    pub fn segmentation_mesh_mut(&mut self) -> &mut Region {
        &mut self.segmentation_mesh
    }

    /// Destroy all elements, then all nodes, of the segmentation mesh.
    ///
    /// Not reversible.
    pub fn clear_mesh(&mut self) {
        let elements = self.segmentation_mesh.destroy_all_elements();
        let nodes = self.segmentation_mesh.destroy_all_nodes();
        debug!(elements, nodes, "Cleared segmentation mesh");
    }
}

impl FieldProvider for VolumeFieldModel {
    fn scalar_field(&self) -> &ScalarField {
        &self.scalar_field
    }

    fn bounding_mesh(&self) -> &BoundingMesh {
        &self.mesh
    }
}
