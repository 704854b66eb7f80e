//! Centroid of a point set.

// Point counts stay far below 2^52
#![allow(clippy::cast_precision_loss)]

use nalgebra::{Point3, Vector3};

use crate::{GeometryError, GeometryResult};

/// Arithmetic mean of `points`.
///
/// # Errors
///
/// Returns [`GeometryError::EmptyInput`] if `points` is empty.
///
/// # Example
///
/// ```
/// use autoseg_geometry::calculate_centroid;
/// use nalgebra::Point3;
///
/// let points = [Point3::new(0.0, 0.0, 0.0), Point3::new(2.0, 4.0, 6.0)];
/// let centroid = calculate_centroid(&points).unwrap();
/// assert_eq!(centroid, Point3::new(1.0, 2.0, 3.0));
/// ```
pub fn calculate_centroid(points: &[Point3<f64>]) -> GeometryResult<Point3<f64>> {
    if points.is_empty() {
        return Err(GeometryError::empty_input("calculate_centroid"));
    }
    let sum: Vector3<f64> = points.iter().map(|p| p.coords).sum();
    Ok(Point3::from(sum / points.len() as f64))
}
