//! Basic 3-vector and 3×3 matrix operations.

use nalgebra::{Matrix3, Vector3};

use crate::{GeometryError, GeometryResult};

/// Vectors shorter than this are treated as zero length.
pub(crate) const ZERO_LENGTH: f64 = 1e-12;

/// Component-wise sum `u + v`.
#[inline]
#[must_use]
pub fn add(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    u + v
}

/// Cross product `u × v`.
#[inline]
#[must_use]
pub fn cross(u: &Vector3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    u.cross(v)
}

/// Matrix-vector product `M v`.
#[inline]
#[must_use]
pub fn matrix_vector_mult(m: &Matrix3<f64>, v: &Vector3<f64>) -> Vector3<f64> {
    m * v
}

/// Unit vector in the direction of `v`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateGeometry`] if `v` has (near) zero length
/// or is not finite.
pub fn normalize(v: &Vector3<f64>) -> GeometryResult<Vector3<f64>> {
    let norm = v.norm();
    if !norm.is_finite() || norm < ZERO_LENGTH {
        return Err(GeometryError::degenerate(format!(
            "cannot normalize vector of length {norm}"
        )));
    }
    Ok(v / norm)
}

/// Angle between `u` and `v` in radians, in `[0, π]`.
///
/// Computed as `acos(u·v / (|u||v|))` with the cosine clamped to `[-1, 1]`,
/// so rounding past the end points never produces NaN.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateGeometry`] if either vector has zero length.
///
/// # Example
///
/// ```
/// use autoseg_geometry::angle;
/// use nalgebra::Vector3;
/// use std::f64::consts::PI;
///
/// let v = Vector3::new(1.0, 2.0, 3.0);
/// assert!(angle(&v, &v).unwrap().abs() < 1e-12);
/// assert!((angle(&v, &-v).unwrap() - PI).abs() < 1e-12);
/// ```
pub fn angle(u: &Vector3<f64>, v: &Vector3<f64>) -> GeometryResult<f64> {
    let denominator = u.norm() * v.norm();
    if !denominator.is_finite() || denominator < ZERO_LENGTH * ZERO_LENGTH {
        return Err(GeometryError::degenerate(
            "angle is undefined for a zero-length vector",
        ));
    }
    let cosine = (u.dot(v) / denominator).clamp(-1.0, 1.0);
    Ok(cosine.acos())
}
