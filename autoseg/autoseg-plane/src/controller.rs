//! Detection plane controller: owns the plane and its surface region.

// Image dimensions fit comfortably in f64
#![allow(clippy::cast_precision_loss)]

use autoseg_geometry::Plane;
use autoseg_types::{Point3, Region, Vector3};
use autoseg_volume::BoundingMesh;
use tracing::{debug, info};

use crate::surface::DetectionSurface;
use crate::visibility::VisibilityField;
use crate::PlaneResult;

/// Name of the region holding the detection surface.
pub const DETECTION_REGION: &str = "detection";

/// Normal of a freshly created detection plane.
pub const DEFAULT_NORMAL: Vector3<f64> = Vector3::new(1.0, 0.0, 0.0);

/// Owns the detection plane and keeps its surface element in step with it.
///
/// # Example
///
/// ```
/// use autoseg_plane::DetectionPlaneController;
/// use autoseg_volume::BoundingMesh;
/// use nalgebra::{Point3, Vector3};
///
/// let mesh = BoundingMesh::new([100, 80, 60], [1.0; 3]).unwrap();
/// let mut controller = DetectionPlaneController::create(&mesh).unwrap();
///
/// assert_eq!(controller.plane().point(), Point3::new(49.5, 39.5, 29.5));
/// assert_eq!(controller.plane().normal(), Vector3::x());
/// assert_eq!(controller.read_coordinates().len(), 4);
///
/// controller.reverse_normal();
/// assert_eq!(controller.plane().normal(), -Vector3::x());
/// ```
#[derive(Debug, Clone)]
pub struct DetectionPlaneController {
    plane: Plane,
    surface: DetectionSurface,
    region: Region,
}

impl DetectionPlaneController {
    /// Create the detection plane for `mesh`.
    ///
    /// The plane passes through the centroid of the eight corners with normal
    /// `+X`. The surface is a square of side `max(dims)`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError`](crate::PlaneError) if the surface cannot be built.
    pub fn create(mesh: &BoundingMesh) -> PlaneResult<Self> {
        let side = mesh.dims().into_iter().max().unwrap_or(0) as f64;
        let plane = Plane::new(mesh.centroid(), DEFAULT_NORMAL)?;
        let surface = DetectionSurface::new(&plane, side)?;

        let mut region = Region::new(DETECTION_REGION);
        surface.write_to(&mut region)?;

        info!(point = ?plane.point(), side, "Created detection plane");
        Ok(Self {
            plane,
            surface,
            region,
        })
    }

    /// The detection plane.
    #[must_use]
    pub const fn plane(&self) -> &Plane {
        &self.plane
    }

    /// Negate the plane normal in place. The point and surface are unchanged.
    ///
    /// Applying this twice restores the original plane.
    pub fn reverse_normal(&mut self) {
        self.plane.reverse();
        debug!(normal = ?self.plane.normal(), "Reversed detection plane normal");
    }

    /// Current coordinates of the surface nodes, in node creation order.
    #[must_use]
    pub fn read_coordinates(&self) -> Vec<Point3<f64>> {
        self.region.node_positions()
    }

    /// Move and reorient the plane, rebuilding the surface.
    ///
    /// The old surface element and nodes are destroyed before the new ones are
    /// created.
    ///
    /// # Errors
    ///
    /// Returns [`PlaneError::Geometry`](crate::PlaneError::Geometry) for a
    /// zero-length normal; the plane and surface are left unchanged.
    pub fn set_plane(&mut self, point: Point3<f64>, normal: Vector3<f64>) -> PlaneResult<()> {
        let plane = Plane::new(point, normal)?;
        let surface = DetectionSurface::new(&plane, self.surface.side())?;
        surface.write_to(&mut self.region)?;
        self.plane = plane;
        self.surface = surface;
        Ok(())
    }

    /// Side length of the square surface.
    #[must_use]
    pub const fn surface_side(&self) -> f64 {
        self.surface.side()
    }

    /// The surface geometry.
    #[must_use]
    pub const fn surface(&self) -> &DetectionSurface {
        &self.surface
    }

    /// The region holding the surface nodes and element.
    #[must_use]
    pub const fn detection_region(&self) -> &Region {
        &self.region
    }

    /// Visibility split at the current plane.
    #[must_use]
    pub const fn visibility_field(&self) -> VisibilityField {
        VisibilityField::new(self.plane)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::PlaneError;
    use approx::assert_relative_eq;

    fn controller() -> DetectionPlaneController {
        let mesh = BoundingMesh::new([100, 80, 60], [1.0; 3]).unwrap();
        DetectionPlaneController::create(&mesh).unwrap()
    }

    #[test]
    fn create_uses_centroid_and_x_normal() {
        let c = controller();
        assert_relative_eq!(c.plane().point(), Point3::new(49.5, 39.5, 29.5), epsilon = 1e-12);
        assert_relative_eq!(c.plane().normal(), Vector3::x());
        assert_relative_eq!(c.surface_side(), 100.0);
        assert_eq!(c.detection_region().name(), DETECTION_REGION);
        assert_eq!(c.detection_region().element_count(), 1);
    }

    #[test]
    fn coordinates_are_rotated_about_y() {
        let c = controller();
        let centroid = Point3::new(49.5, 39.5, 29.5);
        let coords = c.read_coordinates();
        // Local (h, h, 0) with h = 50 lands at (0, h, -h) + centroid
        assert_relative_eq!(coords[3], centroid + Vector3::new(0.0, 50.0, -50.0), epsilon = 1e-9);
        assert_relative_eq!(coords[0], centroid + Vector3::new(0.0, -50.0, 50.0), epsilon = 1e-9);
        assert_eq!(coords, c.read_coordinates());
    }

    #[test]
    fn reverse_twice_is_identity() {
        let mut c = controller();
        let original = *c.plane();
        let coords = c.read_coordinates();
        c.reverse_normal();
        assert_relative_eq!(c.plane().normal(), -Vector3::x());
        assert_eq!(c.plane().point(), original.point());
        assert_eq!(c.read_coordinates(), coords);
        c.reverse_normal();
        assert_eq!(*c.plane(), original);
    }

    #[test]
    fn set_plane_rebuilds_surface() {
        let mut c = controller();
        let old_ids: Vec<_> = c.detection_region().nodes().iter().map(|n| n.id).collect();
        c.set_plane(Point3::new(10.0, 0.0, 0.0), Vector3::z()).unwrap();
        assert_eq!(c.detection_region().node_count(), 4);
        assert!(c.detection_region().nodes().iter().all(|n| !old_ids.contains(&n.id)));
        assert_relative_eq!(c.read_coordinates()[0], Point3::new(-40.0, -50.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn set_plane_rejects_zero_normal() {
        let mut c = controller();
        let before = *c.plane();
        let err = c.set_plane(Point3::origin(), Vector3::zeros()).unwrap_err();
        assert!(matches!(err, PlaneError::Geometry(_)));
        assert_eq!(*c.plane(), before);
        assert_eq!(c.detection_region().node_count(), 4);
    }

    #[test]
    fn visibility_field_tracks_reversal() {
        let mut c = controller();
        let beyond = Point3::new(90.0, 0.0, 0.0);
        assert!(c.visibility_field().is_visible(&beyond));
        c.reverse_normal();
        assert!(!c.visibility_field().is_visible(&beyond));
    }
}
