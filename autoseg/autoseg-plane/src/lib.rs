//! Detection plane control for the auto-segmentation workspace.
//!
//! The detection plane cuts the volume; its surface is drawn as a square
//! element and its normal decides which half of the scene is visible.
//!
//! - [`DetectionPlaneController`] - Owns the plane and its surface region
//! - [`DetectionSurface`] - Square element aligned with the plane
//! - [`VisibilityField`] - Half-space test against the plane
//! - [`PlaneHandle`] - What orientation and translation handlers use
//!
//! # Alignment
//!
//! The surface is built facing `+Z` and rotated onto the plane normal with
//! [`alignment_rotation`](autoseg_geometry::alignment_rotation). A normal
//! parallel to `+Z` needs no rotation; an anti-parallel one uses a half turn
//! about `+X`.

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod controller;
mod error;
mod handle;
mod surface;
mod visibility;

pub use controller::{DEFAULT_NORMAL, DETECTION_REGION, DetectionPlaneController};
pub use error::{PlaneError, PlaneResult};
pub use handle::PlaneHandle;
pub use surface::DetectionSurface;
pub use visibility::VisibilityField;

// Re-export the plane type handlers work with
pub use autoseg_geometry::Plane;
