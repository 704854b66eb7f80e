//! Plane representation for detection and visibility partitioning.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::{GeometryResult, normalize};

/// A plane in 3D space defined by a point and normal.
///
/// The plane equation is: `normal · (p - point) = 0`.
/// Points with `normal · (p - point) >= 0` are on the positive side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Plane {
    point: Point3<f64>,
    normal: Vector3<f64>,
}

impl Plane {
    /// Create a new plane from a point and normal.
    ///
    /// The normal is normalized.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateGeometry`](crate::GeometryError::DegenerateGeometry)
    /// if the normal has zero length.
    ///
    /// # Example
    ///
    /// ```
    /// use autoseg_geometry::Plane;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 0.0, 2.0)).unwrap();
    /// assert_eq!(plane.normal(), Vector3::z());
    /// ```
    pub fn new(point: Point3<f64>, normal: Vector3<f64>) -> GeometryResult<Self> {
        Ok(Self {
            point,
            normal: normalize(&normal)?,
        })
    }

    /// The point on the plane.
    #[must_use]
    pub const fn point(&self) -> Point3<f64> {
        self.point
    }

    /// The unit normal.
    #[must_use]
    pub const fn normal(&self) -> Vector3<f64> {
        self.normal
    }

    /// Move the plane so it passes through `point`, keeping its orientation.
    pub fn set_point(&mut self, point: Point3<f64>) {
        self.point = point;
    }

    /// Reorient the plane about its point.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::DegenerateGeometry`](crate::GeometryError::DegenerateGeometry)
    /// if the normal has zero length; the plane is left unchanged.
    pub fn set_normal(&mut self, normal: Vector3<f64>) -> GeometryResult<()> {
        self.normal = normalize(&normal)?;
        Ok(())
    }

    /// Negate the normal in place. The point on the plane does not move.
    pub fn reverse(&mut self) {
        self.normal = -self.normal;
    }

    /// A copy of this plane with the normal negated.
    #[must_use]
    pub fn reversed(&self) -> Self {
        Self {
            point: self.point,
            normal: -self.normal,
        }
    }

    /// Signed distance from `point` to the plane, positive on the normal side.
    #[must_use]
    pub fn signed_distance(&self, point: &Point3<f64>) -> f64 {
        self.normal.dot(&(*point - self.point))
    }

    /// Returns true if `point` is on the plane or on the side the normal points to.
    #[must_use]
    pub fn is_on_positive_side(&self, point: &Point3<f64>) -> bool {
        self.signed_distance(point) >= 0.0
    }

    /// Project a point onto the plane.
    #[must_use]
    pub fn project(&self, point: &Point3<f64>) -> Point3<f64> {
        *point - self.signed_distance(point) * self.normal
    }

    /// The plane constant `d` where the plane equation is `n · p = d`.
    #[must_use]
    pub fn d(&self) -> f64 {
        self.normal.dot(&self.point.coords)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeometryError;
    use approx::assert_relative_eq;

    fn x_plane() -> Plane {
        Plane::new(Point3::new(2.0, 0.0, 0.0), Vector3::x()).unwrap()
    }

    #[test]
    fn normal_is_normalized() {
        let plane = Plane::new(Point3::origin(), Vector3::new(0.0, 3.0, 4.0)).unwrap();
        assert_relative_eq!(plane.normal().norm(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn zero_normal_no_plane() {
        let result = Plane::new(Point3::origin(), Vector3::zeros());
        assert!(matches!(result, Err(GeometryError::DegenerateGeometry { .. })));
    }

    #[test]
    fn signed_distance_and_side() {
        let plane = x_plane();
        assert_relative_eq!(plane.signed_distance(&Point3::new(5.0, 1.0, 1.0)), 3.0);
        assert_relative_eq!(plane.signed_distance(&Point3::new(0.0, 1.0, 1.0)), -2.0);
        assert!(plane.is_on_positive_side(&Point3::new(2.0, 9.0, 9.0)));
        assert!(!plane.is_on_positive_side(&Point3::new(1.9, 0.0, 0.0)));
    }

    #[test]
    fn reverse_is_involution() {
        let mut plane = x_plane();
        let original = plane;
        plane.reverse();
        assert_relative_eq!(plane.normal(), -Vector3::x());
        assert_eq!(plane.point(), original.point());
        plane.reverse();
        assert_eq!(plane, original);
        assert_eq!(original.reversed().reversed(), original);
    }

    #[test]
    fn project_and_d() {
        let plane = x_plane();
        let projected = plane.project(&Point3::new(7.0, 3.0, -1.0));
        assert_relative_eq!(projected, Point3::new(2.0, 3.0, -1.0));
        assert_relative_eq!(plane.d(), 2.0);
    }

    #[test]
    fn set_normal_rejects_zero_and_keeps_old() {
        let mut plane = x_plane();
        assert!(plane.set_normal(Vector3::zeros()).is_err());
        assert_relative_eq!(plane.normal(), Vector3::x());
        plane.set_normal(Vector3::new(0.0, -2.0, 0.0)).unwrap();
        assert_relative_eq!(plane.normal(), -Vector3::y());
        plane.set_point(Point3::new(0.0, 1.0, 0.0));
        assert_relative_eq!(plane.d(), -1.0);
    }
}
