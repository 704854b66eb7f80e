//! Point cloud produced by sampling visible geometry.

use autoseg_geometry::calculate_centroid;
use autoseg_types::{Aabb, Point3, Region};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered set of 3D points.
///
/// # Example
///
/// ```
/// use autoseg_scan::PointCloud;
/// use nalgebra::Point3;
///
/// let cloud = PointCloud::from_positions(vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(2.0, 0.0, 0.0),
/// ]);
///
/// assert_eq!(cloud.len(), 2);
/// assert_eq!(cloud.centroid(), Some(Point3::new(1.0, 0.0, 0.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PointCloud {
    points: Vec<Point3<f64>>,
}

impl PointCloud {
    /// Creates an empty point cloud.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Creates a point cloud from positions.
    #[must_use]
    pub fn from_positions(points: Vec<Point3<f64>>) -> Self {
        Self { points }
    }

    /// Reads the node coordinates of `region`, in node creation order.
    #[must_use]
    pub fn from_region(region: &Region) -> Self {
        Self::from_positions(region.node_positions())
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if the cloud has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points.
    #[must_use]
    pub fn points(&self) -> &[Point3<f64>] {
        &self.points
    }

    /// Iterate over the points.
    pub fn iter(&self) -> std::slice::Iter<'_, Point3<f64>> {
        self.points.iter()
    }

    /// Bounding box of the points.
    #[must_use]
    pub fn bounds(&self) -> Aabb {
        Aabb::from_points(self.points.iter())
    }

    /// Mean position, or `None` for an empty cloud.
    #[must_use]
    pub fn centroid(&self) -> Option<Point3<f64>> {
        calculate_centroid(&self.points).ok()
    }

    /// Consumes the cloud, returning the points.
    #[must_use]
    pub fn into_points(self) -> Vec<Point3<f64>> {
        self.points
    }
}

impl From<Vec<Point3<f64>>> for PointCloud {
    fn from(points: Vec<Point3<f64>>) -> Self {
        Self::from_positions(points)
    }
}

impl<'a> IntoIterator for &'a PointCloud {
    type Item = &'a Point3<f64>;
    type IntoIter = std::slice::Iter<'a, Point3<f64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.points.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cloud() {
        let cloud = PointCloud::new();
        assert!(cloud.is_empty());
        assert!(cloud.centroid().is_none());
        assert!(cloud.bounds().is_empty());
    }

    #[test]
    fn from_region_reads_nodes_in_order() {
        let mut region = Region::new("output");
        let mut scope = region.change();
        scope.create_node(Point3::new(3.0, 0.0, 0.0));
        scope.create_node(Point3::new(1.0, 4.0, 0.0));
        scope.commit();

        let cloud = PointCloud::from_region(&region);
        assert_eq!(
            cloud.points(),
            &[Point3::new(3.0, 0.0, 0.0), Point3::new(1.0, 4.0, 0.0)]
        );
        let bounds = cloud.bounds();
        assert_eq!(bounds.min, Point3::new(1.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(3.0, 4.0, 0.0));
        assert_eq!((&cloud).into_iter().count(), 2);
    }
}
