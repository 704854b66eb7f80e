//! The auto-segmentation model: regions, fields, plane, and point output.

use std::path::{Path, PathBuf};

use autoseg_geometry::Plane;
use autoseg_plane::{DetectionPlaneController, PlaneHandle, PlaneResult, VisibilityField};
use autoseg_scan::{OUTPUT_REGION, PointCloud, PointCloudGenerator, PointSampler, RenderTarget};
use autoseg_types::{Point3, Region, Vector3};
use autoseg_volume::{
    BoundingMesh, Components, FieldProvider, Histogram, ImageSource, ImageVolume, ScalarField,
    VolumeFieldModel,
};
use tracing::{debug, info};

use crate::params::SegmentationParams;
use crate::SegmentationResult;

/// Name of the root region holding the bounding mesh.
pub const ROOT_REGION: &str = "root";

/// Owns every piece of state behind the segmentation view.
///
/// Four regions exist for the lifetime of the model:
///
/// | Region | Contents |
/// |--------|----------|
/// | root | the bounding hexahedron |
/// | `segmentation_mesh` | auxiliary mesh, cleared on request |
/// | `detection` | the detection surface |
/// | `output` | the generated point cloud |
///
/// # Example
///
/// ```
/// use autoseg::prelude::*;
///
/// let volume = ImageVolume::from_samples([100, 80, 60], Components::Gray, vec![0.5; 480_000]).unwrap();
/// let mut model = AutoSegmentationModel::new(volume, &SegmentationParams::default()).unwrap();
///
/// assert_eq!(model.dimensions(), [100, 80, 60]);
/// assert_eq!(model.plane_nodes_coordinates().len(), 4);
///
/// model.set_scale([1.0, 1.0, 2.0]).unwrap();
/// assert_eq!(model.root_region().node_positions()[7].z, 119.5);
/// ```
#[derive(Debug)]
pub struct AutoSegmentationModel {
    root: Region,
    fields: VolumeFieldModel,
    detection: DetectionPlaneController,
    output: Region,
    generator: PointCloudGenerator,
    output_filename: Option<PathBuf>,
}

impl AutoSegmentationModel {
    /// Build the model around a loaded volume.
    ///
    /// # Errors
    ///
    /// Returns an error if the params are invalid or the detection surface
    /// cannot be built.
    pub fn new(volume: ImageVolume, params: &SegmentationParams) -> SegmentationResult<Self> {
        let fields = VolumeFieldModel::new(volume, &params.volume)?;

        let mut root = Region::new(ROOT_REGION);
        fields.bounding_mesh().write_to(&mut root)?;

        let detection = DetectionPlaneController::create(fields.bounding_mesh())?;

        info!(
            dims = ?fields.dimensions(),
            density = params.point_cloud.density,
            "Created auto-segmentation model"
        );

        Ok(Self {
            root,
            fields,
            detection,
            output: Region::new(OUTPUT_REGION),
            generator: PointCloudGenerator::new(params.point_cloud.clone()),
            output_filename: None,
        })
    }

    /// Load the images from `source` and build the model.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::Volume`](crate::SegmentationError::Volume)
    /// if the images cannot be read, or any error from [`new`](Self::new).
    pub fn from_source<S: ImageSource + ?Sized>(
        source: &S,
        params: &SegmentationParams,
    ) -> SegmentationResult<Self> {
        Self::new(autoseg_volume::load_volume(source)?, params)
    }

    // =========================================================================
    // Volume and bounding mesh
    // =========================================================================

    /// Volume size in pixels.
    #[must_use]
    pub const fn dimensions(&self) -> [usize; 3] {
        self.fields.dimensions()
    }

    /// Current per-axis scale.
    #[must_use]
    pub const fn scale(&self) -> [f64; 3] {
        self.fields.scale()
    }

    /// Color components of the source images.
    #[must_use]
    pub const fn components(&self) -> Components {
        self.fields.components()
    }

    /// Rescale the bounding mesh, reassigning the root region's nodes in place.
    ///
    /// Idempotent. The detection plane is not moved.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidScale`](autoseg_volume::VolumeError::InvalidScale)
    /// unless every factor is finite and positive; nothing changes.
    pub fn set_scale(&mut self, scale: [f64; 3]) -> SegmentationResult<()> {
        self.fields.set_scale(scale)?;

        let ids: Vec<_> = self.root.nodes().iter().map(|node| node.id).collect();
        for (id, position) in ids.into_iter().zip(self.fields.bounding_mesh().corners()) {
            self.root.assign_node(id, *position)?;
        }
        debug!(scale = ?scale, "Updated root region nodes");
        Ok(())
    }

    /// The volume field model.
    #[must_use]
    pub const fn volume_fields(&self) -> &VolumeFieldModel {
        &self.fields
    }

    /// The normalized intensity histogram, computed once at construction.
    #[must_use]
    pub const fn histogram(&self) -> &Histogram {
        self.fields.histogram()
    }

    /// Region holding the bounding hexahedron.
    #[must_use]
    pub const fn root_region(&self) -> &Region {
        &self.root
    }

    // =========================================================================
    // Segmentation mesh
    // =========================================================================

    /// The auxiliary segmentation mesh region.
    #[must_use]
    pub const fn segmentation_mesh(&self) -> &Region {
        self.fields.segmentation_mesh()
    }

    /// Mutable access to the segmentation mesh region.
    pub fn segmentation_mesh_mut(&mut self) -> &mut Region {
        self.fields.segmentation_mesh_mut()
    }

    /// Destroy every element and node of the segmentation mesh.
    pub fn clear_segmentation_mesh(&mut self) {
        self.fields.clear_mesh();
    }

    // =========================================================================
    // Detection plane
    // =========================================================================

    /// The detection plane controller.
    #[must_use]
    pub const fn detection(&self) -> &DetectionPlaneController {
        &self.detection
    }

    /// Flip which side of the detection plane is visible.
    pub fn reverse_visibility_field_direction(&mut self) {
        self.detection.reverse_normal();
    }

    /// Coordinates of the detection surface nodes, in creation order.
    #[must_use]
    pub fn plane_nodes_coordinates(&self) -> Vec<Point3<f64>> {
        self.detection.read_coordinates()
    }

    /// Visibility split at the current detection plane.
    #[must_use]
    pub const fn visibility_field(&self) -> VisibilityField {
        self.detection.visibility_field()
    }

    // =========================================================================
    // Point output
    // =========================================================================

    /// Replace the output region's points with a fresh sample of `engine`.
    ///
    /// The image plane is hidden while sampling and restored afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`SegmentationError::Scan`](crate::SegmentationError::Scan) for
    /// an invalid density or a sampling failure.
    pub fn generate_points<E>(&mut self, engine: &mut E) -> SegmentationResult<PointCloud>
    where
        E: RenderTarget + PointSampler + ?Sized,
    {
        Ok(self.generator.generate(engine, &mut self.output)?)
    }

    /// Density used by [`generate_points`](Self::generate_points).
    #[must_use]
    pub const fn point_density(&self) -> f64 {
        self.generator.params().density
    }

    /// Change the density used by later generations.
    pub fn set_point_density(&mut self, density: f64) {
        self.generator.set_density(density);
    }

    /// Region holding the generated points.
    #[must_use]
    pub const fn output_region(&self) -> &Region {
        &self.output
    }

    /// The points currently in the output region.
    #[must_use]
    pub fn point_cloud(&self) -> PointCloud {
        PointCloud::from_region(&self.output)
    }

    /// Where downstream steps should write the result, if set.
    #[must_use]
    pub fn output_filename(&self) -> Option<&Path> {
        self.output_filename.as_deref()
    }

    /// Set or clear the output filename.
    pub fn set_output_filename(&mut self, filename: Option<PathBuf>) {
        self.output_filename = filename;
    }
}

impl PlaneHandle for AutoSegmentationModel {
    fn detection_plane(&self) -> &Plane {
        self.detection.plane()
    }

    fn plane_region(&self) -> &Region {
        self.detection.detection_region()
    }

    fn set_plane(&mut self, point: Point3<f64>, normal: Vector3<f64>) -> PlaneResult<()> {
        self.detection.set_plane(point, normal)
    }
}

impl FieldProvider for AutoSegmentationModel {
    fn scalar_field(&self) -> &ScalarField {
        self.fields.scalar_field()
    }

    fn bounding_mesh(&self) -> &BoundingMesh {
        self.fields.bounding_mesh()
    }
}
