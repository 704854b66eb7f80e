//! Capability contract consumed by the visualization engine.

use autoseg_types::Point3;

use crate::hex::BoundingMesh;
use crate::scalar_field::ScalarField;

/// Read access to the fields a renderer needs to draw a volume.
///
/// The renderer textures its image-plane iso-surface with
/// [`scalar_field`](Self::scalar_field) and places geometry with the
/// coordinates of [`bounding_mesh`](Self::bounding_mesh).
pub trait FieldProvider {
    /// The single-channel intensity field.
    fn scalar_field(&self) -> &ScalarField;

    /// The bounding hexahedron carrying the coordinate field.
    fn bounding_mesh(&self) -> &BoundingMesh;

    /// Volume size in pixels.
    fn dimensions(&self) -> [usize; 3] {
        self.bounding_mesh().dims()
    }

    /// Intensity at a world position, clamped to the volume edges.
    fn value_at(&self, point: &Point3<f64>) -> f64 {
        let xi = self.bounding_mesh().xi_of(point);
        self.scalar_field().sample(xi)
    }
}
