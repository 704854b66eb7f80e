//! Point cloud extraction for the auto-segmentation workspace.
//!
//! Converts the geometry a rendering engine currently shows into a point
//! cloud stored as nodes of an output region:
//!
//! - [`PointCloudGenerator`] - Replace, hide, sample, restore, write
//! - [`RenderTarget`] / [`PointSampler`] - What the engine must provide
//! - [`HiddenGraphic`] - Scoped hide that always restores visibility
//! - [`PointCloud`] - The resulting points
//!
//! # Layer 0
//!
//! This crate never talks to a renderer directly. Engines plug in through the
//! two traits above.
//!
//! # Example
//!
//! ```
//! use autoseg_scan::{
//!     Graphic, OUTPUT_REGION, PointCloudGenerator, PointSampler, RenderTarget, ScanResult,
//! };
//! use autoseg_types::Region;
//! use nalgebra::Point3;
//!
//! struct Flat { image_plane: bool }
//!
//! impl RenderTarget for Flat {
//!     fn set_visibility(&mut self, _: Graphic, visible: bool) { self.image_plane = visible; }
//!     fn is_visible(&self, _: Graphic) -> bool { self.image_plane }
//! }
//!
//! impl PointSampler for Flat {
//!     fn sample_visible(&mut self, _density: f64) -> ScanResult<Vec<Point3<f64>>> {
//!         Ok(vec![Point3::origin(), Point3::new(1.0, 0.0, 0.0)])
//!     }
//! }
//!
//! let mut engine = Flat { image_plane: true };
//! let mut output = Region::new(OUTPUT_REGION);
//! let cloud = PointCloudGenerator::default().generate(&mut engine, &mut output).unwrap();
//!
//! assert_eq!(cloud.len(), 2);
//! assert_eq!(output.node_count(), 2);
//! assert!(engine.image_plane);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod cloud;
mod error;
mod generator;
mod params;
mod render;

pub use cloud::PointCloud;
pub use error::{ScanError, ScanResult};
pub use generator::{OUTPUT_REGION, PointCloudGenerator, generate_point_cloud};
pub use params::PointCloudParams;
pub use render::{Graphic, HiddenGraphic, PointSampler, RenderTarget};
