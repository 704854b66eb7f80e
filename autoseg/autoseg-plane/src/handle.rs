//! Access to the detection plane for orientation and translation handlers.

use autoseg_geometry::Plane;
use autoseg_types::{Point3, Region, Vector3};

use crate::controller::DetectionPlaneController;
use crate::PlaneResult;

/// What an interactive plane handler needs from the plane's owner.
///
/// [`plane`](Self::plane) and [`detection_plane`](Self::detection_plane) are
/// the same plane under two names, as handlers written against either name
/// exist.
pub trait PlaneHandle {
    /// The detection plane.
    fn detection_plane(&self) -> &Plane;

    /// Alias of [`detection_plane`](Self::detection_plane).
    fn plane(&self) -> &Plane {
        self.detection_plane()
    }

    /// The region holding the detection surface.
    fn plane_region(&self) -> &Region;

    /// Move and reorient the plane.
    ///
    /// # Errors
    ///
    /// Returns an error if `normal` is degenerate; the plane is left unchanged.
    fn set_plane(&mut self, point: Point3<f64>, normal: Vector3<f64>) -> PlaneResult<()>;

    /// Translate the plane along its normal by `distance`.
    ///
    /// # Errors
    ///
    /// Returns an error if the surface cannot be rebuilt.
    fn translate_along_normal(&mut self, distance: f64) -> PlaneResult<()> {
        let plane = *self.detection_plane();
        self.set_plane(plane.point() + distance * plane.normal(), plane.normal())
    }
}

impl PlaneHandle for DetectionPlaneController {
    fn detection_plane(&self) -> &Plane {
        Self::plane(self)
    }

    fn plane_region(&self) -> &Region {
        self.detection_region()
    }

    fn set_plane(&mut self, point: Point3<f64>, normal: Vector3<f64>) -> PlaneResult<()> {
        Self::set_plane(self, point, normal)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use autoseg_volume::BoundingMesh;

    fn handle() -> impl PlaneHandle {
        let mesh = BoundingMesh::new([10, 10, 10], [1.0; 3]).unwrap();
        DetectionPlaneController::create(&mesh).unwrap()
    }

    #[test]
    fn aliases_return_same_plane() {
        let h = handle();
        assert_eq!(h.plane(), h.detection_plane());
        assert_eq!(h.plane_region().node_count(), 4);
    }

    #[test]
    fn translate_along_normal_moves_point() {
        let mut h = handle();
        let before = h.plane().point();
        h.translate_along_normal(2.5).unwrap();
        assert_relative_eq!(h.plane().point(), before + Vector3::new(2.5, 0.0, 0.0));
        assert_relative_eq!(h.plane().normal(), Vector3::x());
        let coords = h.plane_region().node_positions();
        assert!(coords.iter().all(|p| (p.x - h.plane().point().x).abs() < 1e-9));
    }
}
