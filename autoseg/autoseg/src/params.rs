//! Parameters for the model and its scene.

use autoseg_scan::PointCloudParams;
use autoseg_volume::VolumeParams;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Slider ranges and tessellation of the segmentation view.
///
/// # Example
///
/// ```
/// use autoseg::SceneParams;
///
/// let params = SceneParams::default();
/// assert_eq!(params.tessellation_divisions, [256, 125, 128]);
/// assert_eq!(params.image_plane_level_max, 99);
/// assert_eq!(params.segmentation_slider_max, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SceneParams {
    /// Minimum divisions per axis for the segmentation contour.
    pub tessellation_divisions: [u32; 3],

    /// Largest image plane slider value.
    pub image_plane_level_max: u32,

    /// Largest segmentation threshold slider value.
    pub segmentation_slider_max: u32,
}

impl Default for SceneParams {
    fn default() -> Self {
        Self {
            tessellation_divisions: [256, 125, 128],
            image_plane_level_max: 99,
            segmentation_slider_max: 10_000,
        }
    }
}

impl SceneParams {
    /// Params with a coarse contour tessellation, for quick previews.
    #[must_use]
    pub const fn preview() -> Self {
        Self {
            tessellation_divisions: [64, 32, 32],
            image_plane_level_max: 99,
            segmentation_slider_max: 10_000,
        }
    }

    /// Set the contour tessellation divisions.
    #[must_use]
    pub const fn tessellation_divisions(mut self, divisions: [u32; 3]) -> Self {
        self.tessellation_divisions = divisions;
        self
    }
}

/// Everything needed to build an [`AutoSegmentationModel`](crate::AutoSegmentationModel).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SegmentationParams {
    /// Histogram and initial scale.
    pub volume: VolumeParams,

    /// Point generation density.
    pub point_cloud: PointCloudParams,

    /// Scene sliders and tessellation.
    pub scene: SceneParams,
}

impl SegmentationParams {
    /// Set the volume params.
    #[must_use]
    pub fn volume(mut self, volume: VolumeParams) -> Self {
        self.volume = volume;
        self
    }

    /// Set the point cloud params.
    #[must_use]
    pub fn point_cloud(mut self, point_cloud: PointCloudParams) -> Self {
        self.point_cloud = point_cloud;
        self
    }

    /// Set the scene params.
    #[must_use]
    pub fn scene(mut self, scene: SceneParams) -> Self {
        self.scene = scene;
        self
    }
}
