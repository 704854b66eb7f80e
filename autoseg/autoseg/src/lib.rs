//! Geometry core of an interactive volume auto-segmentation tool.
//!
//! This umbrella crate re-exports all `autoseg-*` crates and adds the model
//! that ties them together. All crates are Layer 0: the rendering engine and
//! GUI plug in through narrow traits.
//!
//! # Quick Start
//!
//! ```no_run
//! use autoseg::prelude::*;
//!
//! let source = DirectoryImageSource::new("scans/sample-01");
//! let mut model = AutoSegmentationModel::from_source(&source, &SegmentationParams::default()).unwrap();
//!
//! // Anisotropic slices
//! model.set_scale([1.0, 1.0, 2.5]).unwrap();
//!
//! // Look at the other half of the volume
//! model.reverse_visibility_field_direction();
//! let surface = model.plane_nodes_coordinates();
//! println!("{surface:?}");
//! ```
//!
//! # Module Organization
//!
//! ## Foundation
//! - [`types`] - Regions, nodes, elements, change scopes, bounding boxes
//! - [`geometry`] - Vector algebra, rotations, centroids, planes
//!
//! ## Fields
//! - [`volume`] - Image loading, scalar field, bounding mesh, histogram
//!
//! ## Interaction
//! - [`plane`] - Detection plane, detection surface, visibility field
//! - [`scan`] - Point cloud extraction from visible geometry
//!
//! ## Orchestration
//! - [`AutoSegmentationModel`] - Owns the regions and everything above
//! - [`SceneController`] - Slider and toggle mapping for the view

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod model;
mod params;
mod scene;

pub use error::{SegmentationError, SegmentationResult};
pub use model::{AutoSegmentationModel, ROOT_REGION};
pub use params::{SceneParams, SegmentationParams};
pub use scene::{ContourTarget, Material, MaterialRole, SceneController};

// =============================================================================
// Re-exports
// =============================================================================

/// Regions, nodes, elements, change scopes, bounding boxes.
pub use autoseg_types as types;

/// Vector algebra, rotations, centroids, planes.
pub use autoseg_geometry as geometry;

/// Image loading, scalar field, bounding mesh, histogram.
pub use autoseg_volume as volume;

/// Detection plane, detection surface, visibility field.
pub use autoseg_plane as plane;

/// Point cloud extraction from visible geometry.
pub use autoseg_scan as scan;

// =============================================================================
// Prelude
// =============================================================================

/// Common imports for driving the model.
///
/// # Usage
///
/// ```
/// use autoseg::prelude::*;
/// ```
pub mod prelude {
    // Model
    pub use crate::{
        AutoSegmentationModel, ContourTarget, SceneController, SceneParams, SegmentationError,
        SegmentationParams, SegmentationResult,
    };

    // Core types
    pub use autoseg_types::{Point3, Region, Vector3};

    // Volume
    pub use autoseg_volume::{
        Components, DirectoryImageSource, FieldProvider, ImageResource, ImageSource, ImageVolume,
    };

    // Plane
    pub use autoseg_plane::{Plane, PlaneHandle};

    // Scan
    pub use autoseg_scan::{Graphic, PointCloud, PointSampler, RenderTarget, ScanResult};
}
