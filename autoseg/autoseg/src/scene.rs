//! Scene binding: maps view controls onto engine parameters.
//!
//! Nothing here renders. [`SceneController`] turns slider positions, toggles,
//! and tessellation settings into calls on the engine through
//! [`ContourTarget`] and [`RenderTarget`].

// Pixel dimensions and slider positions fit comfortably in f64
#![allow(clippy::cast_precision_loss)]

use autoseg_scan::{Graphic, PointCloud, PointSampler, RenderTarget};
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::SegmentationResult;
use crate::model::AutoSegmentationModel;
use crate::params::SceneParams;

/// Named standard material.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Material {
    /// Standard yellow.
    Yellow,
    /// Standard white.
    White,
    /// Standard blue.
    Blue,
    /// Standard green.
    Green,
}

impl Material {
    /// Engine name of the material.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Blue => "blue",
            Self::Green => "green",
        }
    }
}

/// What a material is applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MaterialRole {
    /// Generated point glyphs.
    PointCloud,
    /// Segmentation threshold contour.
    Contour,
    /// Segmentation mesh.
    Mesh,
    /// Detection surface.
    Plane,
}

impl MaterialRole {
    /// Every role.
    pub const ALL: [Self; 4] = [Self::PointCloud, Self::Contour, Self::Mesh, Self::Plane];

    /// The material used for this role.
    #[must_use]
    pub const fn material(self) -> Material {
        match self {
            Self::PointCloud => Material::Yellow,
            Self::Contour => Material::White,
            Self::Mesh => Material::Blue,
            Self::Plane => Material::Green,
        }
    }
}

/// Contour and glyph settings of the engine.
pub trait ContourTarget {
    /// Replace the iso-values of a contour graphic.
    fn set_iso_values(&mut self, graphic: Graphic, values: &[f64]);

    /// Minimum divisions per axis of the segmentation contour.
    fn set_tessellation_divisions(&mut self, divisions: [u32; 3]);

    /// Base size of the point cloud glyphs.
    fn set_glyph_base_size(&mut self, size: f64);

    /// Assign a material to a role.
    fn set_material(&mut self, role: MaterialRole, material: Material);
}

/// Parameter mapping between the view controls and the engine.
///
/// The image plane is the contour of the Z coordinate, so its slider selects
/// a slice. The segmentation contour is drawn on the scalar field, so its
/// slider selects an intensity threshold.
///
/// # Example
///
/// ```
/// use autoseg::{SceneController, SceneParams};
///
/// let scene = SceneController::new([100, 80, 60], SceneParams::default());
/// assert_eq!(scene.image_plane_iso_value(50), 30.0);
/// assert_eq!(scene.segmentation_iso_value(2_500), 0.25);
/// assert_eq!(scene.point_glyph_size(), 0.6);
/// ```
#[derive(Debug, Clone)]
pub struct SceneController {
    dims: [usize; 3],
    params: SceneParams,
}

impl SceneController {
    /// Scene for a volume of `dims` pixels.
    #[must_use]
    pub const fn new(dims: [usize; 3], params: SceneParams) -> Self {
        Self { dims, params }
    }

    /// Scene for `model`'s volume.
    #[must_use]
    pub fn for_model(model: &AutoSegmentationModel, params: SceneParams) -> Self {
        Self::new(model.dimensions(), params)
    }

    /// The current params.
    #[must_use]
    pub const fn params(&self) -> &SceneParams {
        &self.params
    }

    /// Assign materials, glyph size, tessellation, and initial iso-values.
    pub fn initialize<E: ContourTarget + ?Sized>(&self, engine: &mut E) {
        for role in MaterialRole::ALL {
            engine.set_material(role, role.material());
        }
        engine.set_glyph_base_size(self.point_glyph_size());
        engine.set_tessellation_divisions(self.params.tessellation_divisions);
        engine.set_iso_values(Graphic::ImagePlane, &[0.0]);
        engine.set_iso_values(Graphic::Segmentation, &[0.0]);
    }

    /// Iso-value for image plane slider position `level`, clamped to the slider range.
    ///
    /// `level · depth / 100`, where depth is the slice count.
    #[must_use]
    pub fn image_plane_iso_value(&self, level: u32) -> f64 {
        let level = level.min(self.params.image_plane_level_max);
        f64::from(level) * self.dims[2] as f64 / 100.0
    }

    /// Iso-value for segmentation slider position `value`, clamped to the slider range.
    ///
    /// `value / 10000`, an intensity in `[0, 1]`.
    #[must_use]
    pub fn segmentation_iso_value(&self, value: u32) -> f64 {
        let value = value.min(self.params.segmentation_slider_max);
        f64::from(value) / 10_000.0
    }

    /// Move the image plane to slider position `level`.
    pub fn set_image_plane_level<E: ContourTarget + ?Sized>(&self, engine: &mut E, level: u32) {
        let iso = self.image_plane_iso_value(level);
        engine.set_iso_values(Graphic::ImagePlane, &[iso]);
        debug!(level, iso, "Image plane level");
    }

    /// Move the segmentation threshold to slider position `value`.
    pub fn set_segmentation_value<E: ContourTarget + ?Sized>(&self, engine: &mut E, value: u32) {
        let iso = self.segmentation_iso_value(value);
        engine.set_iso_values(Graphic::Segmentation, &[iso]);
        debug!(value, iso, "Segmentation threshold");
    }

    /// Current segmentation contour tessellation.
    #[must_use]
    pub const fn tessellation_divisions(&self) -> [u32; 3] {
        self.params.tessellation_divisions
    }

    /// Change the segmentation contour tessellation.
    pub fn set_tessellation_divisions<E: ContourTarget + ?Sized>(
        &mut self,
        engine: &mut E,
        divisions: [u32; 3],
    ) {
        self.params.tessellation_divisions = divisions;
        engine.set_tessellation_divisions(divisions);
    }

    /// Base glyph size for points: `min(dims) / 100`.
    #[must_use]
    pub fn point_glyph_size(&self) -> f64 {
        self.dims.iter().copied().min().unwrap_or(0) as f64 / 100.0
    }

    /// Show or hide the image plane.
    pub fn set_image_plane_visibility<E: RenderTarget + ?Sized>(&self, engine: &mut E, visible: bool) {
        engine.set_visibility(Graphic::ImagePlane, visible);
    }

    /// Show or hide the segmentation contour.
    pub fn set_segmentation_visibility<E: RenderTarget + ?Sized>(&self, engine: &mut E, visible: bool) {
        engine.set_visibility(Graphic::Segmentation, visible);
    }

    /// Show or hide the point cloud.
    pub fn set_point_cloud_visibility<E: RenderTarget + ?Sized>(&self, engine: &mut E, visible: bool) {
        engine.set_visibility(Graphic::PointCloud, visible);
    }

    /// Show or hide the bounding mesh outline.
    pub fn set_outline_visibility<E: RenderTarget + ?Sized>(&self, engine: &mut E, visible: bool) {
        engine.set_visibility(Graphic::Outline, visible);
    }

    /// Generate points through `model`, which hides the image plane while sampling.
    ///
    /// # Errors
    ///
    /// Returns any error from [`AutoSegmentationModel::generate_points`].
    pub fn generate_points<E>(
        &self,
        model: &mut AutoSegmentationModel,
        engine: &mut E,
    ) -> SegmentationResult<PointCloud>
    where
        E: RenderTarget + PointSampler + ?Sized,
    {
        model.generate_points(engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::collections::HashMap;

    #[derive(Default)]
    struct Recorder {
        iso: HashMap<Graphic, Vec<f64>>,
        divisions: Option<[u32; 3]>,
        glyph: Option<f64>,
        materials: HashMap<MaterialRole, Material>,
        visible: HashMap<Graphic, bool>,
    }

    impl ContourTarget for Recorder {
        fn set_iso_values(&mut self, graphic: Graphic, values: &[f64]) {
            self.iso.insert(graphic, values.to_vec());
        }

        fn set_tessellation_divisions(&mut self, divisions: [u32; 3]) {
            self.divisions = Some(divisions);
        }

        fn set_glyph_base_size(&mut self, size: f64) {
            self.glyph = Some(size);
        }

        fn set_material(&mut self, role: MaterialRole, material: Material) {
            self.materials.insert(role, material);
        }
    }

    impl RenderTarget for Recorder {
        fn set_visibility(&mut self, graphic: Graphic, visible: bool) {
            self.visible.insert(graphic, visible);
        }

        fn is_visible(&self, graphic: Graphic) -> bool {
            self.visible.get(&graphic).copied().unwrap_or(true)
        }
    }

    fn scene() -> SceneController {
        SceneController::new([100, 80, 60], SceneParams::default())
    }

    #[test]
    fn initialize_sets_materials_and_defaults() {
        let mut engine = Recorder::default();
        scene().initialize(&mut engine);
        assert_eq!(engine.materials[&MaterialRole::PointCloud], Material::Yellow);
        assert_eq!(engine.materials[&MaterialRole::Contour], Material::White);
        assert_eq!(engine.materials[&MaterialRole::Mesh], Material::Blue);
        assert_eq!(engine.materials[&MaterialRole::Plane].name(), "green");
        assert_eq!(engine.divisions, Some([256, 125, 128]));
        assert_relative_eq!(engine.glyph.unwrap(), 0.6);
        assert_eq!(engine.iso[&Graphic::Segmentation], vec![0.0]);
    }

    #[test]
    fn sliders_map_to_iso_values() {
        let scene = scene();
        let mut engine = Recorder::default();
        scene.set_image_plane_level(&mut engine, 99);
        assert_relative_eq!(engine.iso[&Graphic::ImagePlane][0], 59.4, epsilon = 1e-12);
        scene.set_image_plane_level(&mut engine, 500);
        assert_relative_eq!(engine.iso[&Graphic::ImagePlane][0], 59.4, epsilon = 1e-12);
        scene.set_segmentation_value(&mut engine, 10_000);
        assert_relative_eq!(engine.iso[&Graphic::Segmentation][0], 1.0);
        assert_relative_eq!(scene.segmentation_iso_value(20_000), 1.0);
        assert_relative_eq!(scene.image_plane_iso_value(0), 0.0);
    }

    #[test]
    fn tessellation_round_trips() {
        let mut scene = scene();
        let mut engine = Recorder::default();
        scene.set_tessellation_divisions(&mut engine, [32, 16, 8]);
        assert_eq!(scene.tessellation_divisions(), [32, 16, 8]);
        assert_eq!(engine.divisions, Some([32, 16, 8]));
    }

    #[test]
    fn visibility_toggles() {
        let scene = scene();
        let mut engine = Recorder::default();
        scene.set_image_plane_visibility(&mut engine, false);
        scene.set_segmentation_visibility(&mut engine, false);
        scene.set_point_cloud_visibility(&mut engine, true);
        scene.set_outline_visibility(&mut engine, false);
        assert!(!engine.is_visible(Graphic::ImagePlane));
        assert!(!engine.is_visible(Graphic::Segmentation));
        assert!(engine.is_visible(Graphic::PointCloud));
        assert!(!engine.is_visible(Graphic::Outline));
    }
}
