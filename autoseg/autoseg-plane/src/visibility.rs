//! Half-space visibility derived from the detection plane.

use autoseg_geometry::Plane;
use autoseg_types::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Splits space at the detection plane.
///
/// Points with `normal · (x − point) >= 0` are visible, so points on the plane
/// itself are visible. Reversing the plane normal swaps the visible side.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VisibilityField {
    plane: Plane,
}

impl VisibilityField {
    /// Visibility field of `plane`.
    #[must_use]
    pub const fn new(plane: Plane) -> Self {
        Self { plane }
    }

    /// The plane the field is derived from.
    #[must_use]
    pub const fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Field value at `point`: the signed distance to the plane.
    #[must_use]
    pub fn value(&self, point: &Point3<f64>) -> f64 {
        self.plane.signed_distance(point)
    }

    /// Returns true if `point` is on the visible side.
    #[must_use]
    pub fn is_visible(&self, point: &Point3<f64>) -> bool {
        self.plane.is_on_positive_side(point)
    }

    /// The visible subset of `points`, in input order.
    #[must_use]
    pub fn filter_visible(&self, points: &[Point3<f64>]) -> Vec<Point3<f64>> {
        points.iter().copied().filter(|p| self.is_visible(p)).collect()
    }
}

impl From<Plane> for VisibilityField {
    fn from(plane: Plane) -> Self {
        Self::new(plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoseg_types::Vector3;

    #[test]
    fn visible_side_follows_normal() {
        let plane = Plane::new(Point3::new(1.0, 0.0, 0.0), Vector3::x()).unwrap();
        let field = VisibilityField::from(plane);
        assert!(field.is_visible(&Point3::new(2.0, 0.0, 0.0)));
        assert!(field.is_visible(&Point3::new(1.0, 5.0, 5.0)));
        assert!(!field.is_visible(&Point3::new(0.0, 0.0, 0.0)));

        let reversed = VisibilityField::new(plane.reversed());
        assert!(!reversed.is_visible(&Point3::new(2.0, 0.0, 0.0)));
        assert!(reversed.is_visible(&Point3::new(1.0, 5.0, 5.0)));
    }

    #[test]
    fn filter_keeps_order() {
        let plane = Plane::new(Point3::origin(), Vector3::z()).unwrap();
        let field = VisibilityField::new(plane);
        let points = [
            Point3::new(0.0, 0.0, 1.0),
            Point3::new(0.0, 0.0, -1.0),
            Point3::new(3.0, 0.0, 2.0),
        ];
        assert_eq!(field.filter_visible(&points), vec![points[0], points[2]]);
        assert!((field.value(&points[1]) + 1.0).abs() < 1e-12);
    }
}
