//! Property-based tests for the detection plane.
//!
//! Run with: cargo test -p autoseg-plane -- proptest

use autoseg_plane::{DetectionPlaneController, DetectionSurface, Plane, PlaneHandle};
use autoseg_volume::BoundingMesh;
use nalgebra::{Point3, Vector3};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

fn arb_dims() -> impl Strategy<Value = [usize; 3]> {
    prop::array::uniform3(1..300_usize)
}

fn arb_point() -> impl Strategy<Value = Point3<f64>> {
    prop::array::uniform3(-100.0..100.0f64).prop_map(|[x, y, z]| Point3::new(x, y, z))
}

/// A direction comfortably away from zero length.
fn arb_normal() -> impl Strategy<Value = Vector3<f64>> {
    prop::array::uniform3(-1.0..1.0f64)
        .prop_map(|[x, y, z]| Vector3::new(x, y, z))
        .prop_filter("non-degenerate normal", |v| v.norm() > 1e-3)
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_reverse_normal_is_involution(dims in arb_dims()) {
        let mesh = BoundingMesh::new(dims, [1.0; 3]).unwrap();
        let mut controller = DetectionPlaneController::create(&mesh).unwrap();
        let original = *controller.plane();
        controller.reverse_normal();
        controller.reverse_normal();
        prop_assert_eq!(*controller.plane(), original);
    }

    #[test]
    fn proptest_surface_lies_on_plane(point in arb_point(), normal in arb_normal(), side in 0.1..500.0f64) {
        let plane = Plane::new(point, normal).unwrap();
        let surface = DetectionSurface::new(&plane, side).unwrap();
        for corner in surface.corners() {
            prop_assert!(plane.signed_distance(corner).abs() < 1e-7 * side.max(1.0));
        }
        prop_assert!((surface.face_normal() - plane.normal()).norm() < 1e-6);
    }

    #[test]
    fn proptest_set_plane_keeps_four_nodes(point in arb_point(), normal in arb_normal()) {
        let mesh = BoundingMesh::new([20, 20, 20], [1.0; 3]).unwrap();
        let mut controller = DetectionPlaneController::create(&mesh).unwrap();
        PlaneHandle::set_plane(&mut controller, point, normal).unwrap();
        prop_assert_eq!(controller.plane_region().node_count(), 4);
        prop_assert_eq!(controller.plane_region().element_count(), 1);
        prop_assert_eq!(controller.plane().point(), point);
    }
}

#[test]
fn anti_parallel_normal_builds_surface() {
    let plane = Plane::new(Point3::origin(), -Vector3::z()).unwrap();
    let surface = DetectionSurface::new(&plane, 2.0).unwrap();
    // Half turn about +X flips Y and Z
    assert!((surface.corners()[3] - Point3::new(1.0, -1.0, 0.0)).norm() < 1e-12);
    assert!((surface.face_normal() + Vector3::z()).norm() < 1e-12);
}
