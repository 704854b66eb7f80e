//! Square detection surface drawn on the detection plane.

use autoseg_geometry::{Plane, alignment_rotation, matrix_vector_mult};
use autoseg_types::{ElementShape, Point3, Region, Vector3};
use tracing::debug;

use crate::{PlaneError, PlaneResult};

/// The square element representing the detection plane in the view.
///
/// Built in the XY plane centered on the origin with corners ordered
/// `(-h,-h)`, `(h,-h)`, `(-h,h)`, `(h,h)`, rotated so its face normal `+Z`
/// aligns with the plane normal, then translated to the point on the plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectionSurface {
    corners: [Point3<f64>; 4],
    side: f64,
}

impl DetectionSurface {
    /// Build the surface of `side` length for `plane`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::InvalidSide`] if `side` is not finite and positive.
    ///
    /// # Example
    ///
    /// ```
    /// use autoseg_geometry::Plane;
    /// use autoseg_plane::DetectionSurface;
    /// use nalgebra::{Point3, Vector3};
    ///
    /// let plane = Plane::new(Point3::origin(), Vector3::z()).unwrap();
    /// let surface = DetectionSurface::new(&plane, 2.0).unwrap();
    /// assert_eq!(surface.corners()[3], Point3::new(1.0, 1.0, 0.0));
    /// ```
    pub fn new(plane: &Plane, side: f64) -> PlaneResult<Self> {
        if !(side.is_finite() && side > 0.0) {
            return Err(PlaneError::InvalidSide(side));
        }
        let h = side / 2.0;
        let local = [
            Vector3::new(-h, -h, 0.0),
            Vector3::new(h, -h, 0.0),
            Vector3::new(-h, h, 0.0),
            Vector3::new(h, h, 0.0),
        ];

        let rotation = alignment_rotation(&Vector3::z(), &plane.normal())?;
        let origin = plane.point();
        let corners = local.map(|corner| origin + matrix_vector_mult(&rotation, &corner));

        Ok(Self { corners, side })
    }

    /// Corner positions in square-element node order.
    #[must_use]
    pub const fn corners(&self) -> &[Point3<f64>; 4] {
        &self.corners
    }

    /// Side length.
    #[must_use]
    pub const fn side(&self) -> f64 {
        self.side
    }

    /// Face normal from the corner winding.
    #[must_use]
    pub fn face_normal(&self) -> Vector3<f64> {
        let u = self.corners[1] - self.corners[0];
        let v = self.corners[2] - self.corners[0];
        u.cross(&v).normalize()
    }

    /// Write the surface into `region` as four nodes and one square element.
    ///
    /// Any existing contents of the region are destroyed first.
    ///
    /// # Errors
    ///
    /// Propagates region errors from element creation.
    pub fn write_to(&self, region: &mut Region) -> PlaneResult<()> {
        let destroyed = region.node_count();
        region.clear();

        let mut scope = region.change();
        let ids = scope.create_nodes(&self.corners);
        scope.create_element(ElementShape::Square, &ids)?;
        scope.commit();

        debug!(region = region.name(), destroyed, "Rebuilt detection surface");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn z_normal_keeps_default_orientation() {
        let plane = Plane::new(Point3::new(1.0, 2.0, 3.0), Vector3::z()).unwrap();
        let surface = DetectionSurface::new(&plane, 4.0).unwrap();
        assert_relative_eq!(surface.corners()[0], Point3::new(-1.0, 0.0, 3.0));
        assert_relative_eq!(surface.corners()[3], Point3::new(3.0, 4.0, 3.0));
        assert_relative_eq!(surface.face_normal(), Vector3::z(), epsilon = 1e-12);
    }

    #[test]
    fn x_normal_is_quarter_turn_about_y() {
        let plane = Plane::new(Point3::origin(), Vector3::x()).unwrap();
        let surface = DetectionSurface::new(&plane, 2.0).unwrap();
        // (1, 1, 0) rotated about +Y keeps its Y component
        assert_relative_eq!(surface.corners()[3], Point3::new(0.0, 1.0, -1.0), epsilon = 1e-12);
        assert_relative_eq!(surface.face_normal(), Vector3::x(), epsilon = 1e-12);
    }

    #[test]
    fn corners_lie_on_plane() {
        let plane = Plane::new(Point3::new(5.0, -2.0, 1.0), Vector3::new(1.0, 2.0, -0.5)).unwrap();
        let surface = DetectionSurface::new(&plane, 10.0).unwrap();
        for corner in surface.corners() {
            assert_relative_eq!(plane.signed_distance(corner), 0.0, epsilon = 1e-9);
        }
        assert_relative_eq!((surface.corners()[1] - surface.corners()[0]).norm(), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn invalid_side_rejected() {
        let plane = Plane::new(Point3::origin(), Vector3::z()).unwrap();
        assert!(matches!(DetectionSurface::new(&plane, 0.0), Err(PlaneError::InvalidSide(_))));
        assert!(DetectionSurface::new(&plane, f64::NAN).is_err());
    }

    #[test]
    fn write_replaces_region_contents() {
        let plane = Plane::new(Point3::origin(), Vector3::z()).unwrap();
        let mut region = Region::new("detection");
        DetectionSurface::new(&plane, 1.0).unwrap().write_to(&mut region).unwrap();
        let first_ids: Vec<_> = region.nodes().iter().map(|n| n.id).collect();

        DetectionSurface::new(&plane, 3.0).unwrap().write_to(&mut region).unwrap();
        assert_eq!(region.node_count(), 4);
        assert_eq!(region.element_count(), 1);
        assert!(region.nodes().iter().all(|n| !first_ids.contains(&n.id)));
    }
}
