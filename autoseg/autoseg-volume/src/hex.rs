//! Bounding hexahedral mesh enclosing the image volume.
//!
//! A single cube element with eight corner nodes. Corners are addressed by
//! [`CornerId`], which packs the local `(i, j, k) ∈ {0, 1}³` coordinates as
//! `i | j << 1 | k << 2`:
//!
//! ```text
//!        6 ─────── 7
//!       /|        /|
//!      4 ─────── 5 |
//!      | 2 ──────|─ 3
//!      |/        |/
//!      0 ─────── 1
//! ```

// Image dimensions fit comfortably in f64
#![allow(clippy::cast_precision_loss)]

use autoseg_geometry::calculate_centroid;
use autoseg_types::{Aabb, ElementShape, Point3, Region, RegionResult};
use nalgebra::Vector3;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::volume::validate_scale;
use crate::VolumeResult;

/// Local corner of the bounding cube.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CornerId(u8);

impl CornerId {
    /// All eight corners in node creation order.
    pub const ALL: [Self; 8] = [
        Self(0),
        Self(1),
        Self(2),
        Self(3),
        Self(4),
        Self(5),
        Self(6),
        Self(7),
    ];

    /// Corner at local coordinates `(i, j, k)`; any non-zero value counts as 1.
    #[must_use]
    pub const fn new(i: u8, j: u8, k: u8) -> Self {
        Self(((i != 0) as u8) | (((j != 0) as u8) << 1) | (((k != 0) as u8) << 2))
    }

    /// Corner from its packed index, or `None` above 7.
    #[must_use]
    pub const fn from_index(index: usize) -> Option<Self> {
        if index < 8 {
            #[allow(clippy::cast_possible_truncation)]
            Some(Self(index as u8))
        } else {
            None
        }
    }

    /// Packed index in `0..8`.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Local X coordinate.
    #[must_use]
    pub const fn i(self) -> u8 {
        self.0 & 1
    }

    /// Local Y coordinate.
    #[must_use]
    pub const fn j(self) -> u8 {
        (self.0 >> 1) & 1
    }

    /// Local Z coordinate.
    #[must_use]
    pub const fn k(self) -> u8 {
        (self.0 >> 2) & 1
    }
}

/// Corner positions of the box enclosing a volume of `dims` pixels at `scale`.
///
/// Corner `(i, j, k)` maps to `(i·sx·w − 0.5, j·sy·h − 0.5, k·sz·d − 0.5)`, so
/// the box has size `(sx·w, sy·h, sz·d)` and its minimum corner stays at
/// `(−0.5, −0.5, −0.5)` whatever the scale.
///
/// # Example
///
/// ```
/// use autoseg_volume::node_positions;
/// use nalgebra::Point3;
///
/// let corners = node_positions([100, 80, 60], [1.0, 1.0, 1.0]);
/// assert_eq!(corners[0], Point3::new(-0.5, -0.5, -0.5));
/// assert_eq!(corners[7], Point3::new(99.5, 79.5, 59.5));
/// ```
#[must_use]
pub fn node_positions(dims: [usize; 3], scale: [f64; 3]) -> [Point3<f64>; 8] {
    let extent = Vector3::new(
        scale[0] * dims[0] as f64,
        scale[1] * dims[1] as f64,
        scale[2] * dims[2] as f64,
    );
    CornerId::ALL.map(|corner| {
        Point3::new(
            f64::from(corner.i()).mul_add(extent.x, -0.5),
            f64::from(corner.j()).mul_add(extent.y, -0.5),
            f64::from(corner.k()).mul_add(extent.z, -0.5),
        )
    })
}

/// The six quad faces, each listed in square-element node order
/// (local `(0,0)`, `(1,0)`, `(0,1)`, `(1,1)`).
const FACES: [[u8; 4]; 6] = [
    [0, 2, 4, 6], // -X
    [1, 3, 5, 7], // +X
    [0, 1, 4, 5], // -Y
    [2, 3, 6, 7], // +Y
    [0, 1, 2, 3], // -Z
    [4, 5, 6, 7], // +Z
];

/// The bounding hexahedron of an image volume.
///
/// Topology is fixed at construction. Scale changes reassign the eight node
/// positions in place.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BoundingMesh {
    dims: [usize; 3],
    scale: [f64; 3],
    nodes: [Point3<f64>; 8],
}

impl BoundingMesh {
    /// Build the box for a volume of `dims` pixels at `scale`.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidScale`](crate::VolumeError::InvalidScale)
    /// unless every scale factor is finite and positive.
    pub fn new(dims: [usize; 3], scale: [f64; 3]) -> VolumeResult<Self> {
        validate_scale(scale)?;
        Ok(Self {
            dims,
            scale,
            nodes: node_positions(dims, scale),
        })
    }

    /// Recompute the corner positions for `scale`.
    ///
    /// Applying the same scale twice leaves the mesh unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::InvalidScale`](crate::VolumeError::InvalidScale);
    /// the mesh is left unchanged.
    pub fn set_scale(&mut self, scale: [f64; 3]) -> VolumeResult<()> {
        validate_scale(scale)?;
        self.scale = scale;
        for (node, position) in self.nodes.iter_mut().zip(node_positions(self.dims, scale)) {
            *node = position;
        }
        debug!(scale = ?scale, "Reassigned bounding mesh nodes");
        Ok(())
    }

    /// Volume size in pixels.
    #[must_use]
    pub const fn dims(&self) -> [usize; 3] {
        self.dims
    }

    /// Current per-axis scale.
    #[must_use]
    pub const fn scale(&self) -> [f64; 3] {
        self.scale
    }

    /// All eight corners, indexed by [`CornerId::index`].
    #[must_use]
    pub const fn corners(&self) -> &[Point3<f64>; 8] {
        &self.nodes
    }

    /// Position of one corner.
    #[must_use]
    pub const fn corner(&self, id: CornerId) -> Point3<f64> {
        self.nodes[id.index()]
    }

    /// Axis-aligned bounds of the corners.
    #[must_use]
    pub fn aabb(&self) -> Aabb {
        Aabb::from_points(self.nodes.iter())
    }

    /// Arithmetic mean of the eight corners.
    #[must_use]
    pub fn centroid(&self) -> Point3<f64> {
        // Eight corners are always present
        calculate_centroid(&self.nodes).unwrap_or_else(|_| self.aabb().center())
    }

    /// The six quad faces as corner quadruples in square-element node order.
    #[must_use]
    pub fn faces(&self) -> [[CornerId; 4]; 6] {
        FACES.map(|face| face.map(CornerId))
    }

    /// World position of normalized location `xi`, trilinear over the corners.
    #[must_use]
    pub fn evaluate(&self, xi: [f64; 3]) -> Point3<f64> {
        let mut coords = Vector3::zeros();
        for corner in CornerId::ALL {
            let weight: f64 = [corner.i(), corner.j(), corner.k()]
                .iter()
                .zip(xi)
                .map(|(&local, x)| if local == 1 { x } else { 1.0 - x })
                .product();
            coords += weight * self.nodes[corner.index()].coords;
        }
        Point3::from(coords)
    }

    /// Normalized location of world `point`; the inverse of [`evaluate`](Self::evaluate).
    #[must_use]
    pub fn xi_of(&self, point: &Point3<f64>) -> [f64; 3] {
        let min = self.nodes[0];
        let size = self.nodes[7] - min;
        [
            (point.x - min.x) / size.x,
            (point.y - min.y) / size.y,
            (point.z - min.z) / size.z,
        ]
    }

    /// Write the mesh into `region` as eight nodes and one cube element.
    ///
    /// # Errors
    ///
    /// Propagates region errors from element creation.
    pub fn write_to(&self, region: &mut Region) -> RegionResult<()> {
        let mut scope = region.change();
        let ids = scope.create_nodes(&self.nodes);
        scope.create_element(ElementShape::Cube, &ids)?;
        scope.commit();
        Ok(())
    }
}
