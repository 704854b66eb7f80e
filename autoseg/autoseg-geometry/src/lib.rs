//! Geometry utilities for the auto-segmentation workspace.
//!
//! Pure functions over 3-vectors and 3×3 matrices, plus a [`Plane`] type:
//!
//! - [`add`], [`cross`], [`matrix_vector_mult`] - Basic vector algebra
//! - [`angle`] - Angle between two vectors, robust to rounding past ±1
//! - [`axis_angle_to_rotation_matrix`] - Rodrigues' rotation formula
//! - [`alignment_rotation`] - Rotation taking one direction onto another,
//!   with explicit handling of parallel and anti-parallel inputs
//! - [`calculate_centroid`] - Arithmetic mean of a point set
//!
//! # Layer 0
//!
//! This is a Layer 0 crate with zero rendering dependencies.
//!
//! # Example
//!
//! ```
//! use autoseg_geometry::{alignment_rotation, angle, cross};
//! use nalgebra::Vector3;
//! use std::f64::consts::FRAC_PI_2;
//!
//! let from = Vector3::z();
//! let to = Vector3::x();
//!
//! assert_eq!(cross(&from, &to), Vector3::y());
//! assert!((angle(&from, &to).unwrap() - FRAC_PI_2).abs() < 1e-12);
//!
//! let rotation = alignment_rotation(&from, &to).unwrap();
//! assert!((rotation * from - to).norm() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod centroid;
mod error;
mod plane;
mod rotation;
mod vector;

pub use centroid::calculate_centroid;
pub use error::{GeometryError, GeometryResult};
pub use plane::Plane;
pub use rotation::{alignment_rotation, axis_angle_to_rotation_matrix, perpendicular};
pub use vector::{add, angle, cross, matrix_vector_mult, normalize};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
