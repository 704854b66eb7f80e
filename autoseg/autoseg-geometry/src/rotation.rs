//! Axis-angle rotations and direction alignment.

use std::f64::consts::PI;

use nalgebra::{Matrix3, Vector3};
use tracing::warn;

use crate::vector::{ZERO_LENGTH, angle, normalize};
use crate::{GeometryError, GeometryResult};

/// Rotation matrix for a counter-clockwise rotation of `angle` radians about `axis`.
///
/// Uses Rodrigues' rotation formula
/// `R = cos θ I + sin θ [k]× + (1 − cos θ) k kᵀ` with `k = axis / |axis|`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateGeometry`] if `axis` has zero length;
/// the rotation is undefined in that case.
///
/// # Example
///
/// ```
/// use autoseg_geometry::axis_angle_to_rotation_matrix;
/// use nalgebra::Vector3;
/// use std::f64::consts::FRAC_PI_2;
///
/// let r = axis_angle_to_rotation_matrix(&Vector3::y(), FRAC_PI_2).unwrap();
/// let rotated = r * Vector3::z();
/// assert!((rotated - Vector3::x()).norm() < 1e-12);
/// ```
pub fn axis_angle_to_rotation_matrix(
    axis: &Vector3<f64>,
    angle: f64,
) -> GeometryResult<Matrix3<f64>> {
    let k = normalize(axis)
        .map_err(|_| GeometryError::degenerate("rotation axis has zero length"))?;
    let (sin, cos) = angle.sin_cos();

    let k_cross = k.cross_matrix();
    let k_outer = k * k.transpose();

    Ok(Matrix3::identity() * cos + k_cross * sin + k_outer * (1.0 - cos))
}

/// A unit vector perpendicular to `v`.
///
/// Crosses `v` with the world axis it is least aligned with, so the result is
/// well conditioned. For `v = z` this yields `x`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateGeometry`] if `v` has zero length.
pub fn perpendicular(v: &Vector3<f64>) -> GeometryResult<Vector3<f64>> {
    let v = normalize(v)?;
    let (ax, ay, az) = (v.x.abs(), v.y.abs(), v.z.abs());
    let helper = if az >= ax && az >= ay {
        // Closest to z: y × z = x.
        Vector3::y()
    } else if ay >= ax {
        Vector3::x()
    } else {
        Vector3::z()
    };
    normalize(&helper.cross(&v))
}

/// Rotation taking direction `from` onto direction `to`.
///
/// The rotation axis is `from × to` and the angle is `angle(from, to)`. When
/// the two directions are parallel the cross product vanishes and the
/// rotation is undefined, so these cases are resolved explicitly:
///
/// - parallel: the identity,
/// - anti-parallel: a half turn about [`perpendicular`]`(from)`.
///
/// # Errors
///
/// Returns [`GeometryError::DegenerateGeometry`] if either direction has zero length.
///
/// # Example
///
/// ```
/// use autoseg_geometry::alignment_rotation;
/// use nalgebra::Vector3;
///
/// // Anti-parallel: a half turn, never NaN.
/// let r = alignment_rotation(&Vector3::z(), &-Vector3::z()).unwrap();
/// assert!((r * Vector3::z() + Vector3::z()).norm() < 1e-12);
/// ```
pub fn alignment_rotation(
    from: &Vector3<f64>,
    to: &Vector3<f64>,
) -> GeometryResult<Matrix3<f64>> {
    let from = normalize(from)?;
    let to = normalize(to)?;

    let axis = from.cross(&to);
    if axis.norm() < ZERO_LENGTH {
        if from.dot(&to) > 0.0 {
            return Ok(Matrix3::identity());
        }
        let half_turn_axis = perpendicular(&from)?;
        warn!(
            from = ?from,
            axis = ?half_turn_axis,
            "Anti-parallel alignment; using a half turn about a perpendicular axis"
        );
        return axis_angle_to_rotation_matrix(&half_turn_axis, PI);
    }

    axis_angle_to_rotation_matrix(&axis, angle(&from, &to)?)
}
