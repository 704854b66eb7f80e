//! Axis-aligned bounding box.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box (AABB).
///
/// # Example
///
/// ```
/// use autoseg_types::{Aabb, Point3};
///
/// let aabb = Aabb::new(
///     Point3::new(-0.5, -0.5, -0.5),
///     Point3::new(99.5, 79.5, 59.5),
/// );
///
/// assert_eq!(aabb.size().x, 100.0);
/// assert!(aabb.contains(&Point3::new(50.0, 40.0, 30.0)));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Aabb {
    /// Minimum corner (smallest x, y, z values).
    pub min: Point3<f64>,
    /// Maximum corner (largest x, y, z values).
    pub max: Point3<f64>,
}

impl Aabb {
    /// Create a new AABB from two opposite corners.
    ///
    /// The corners are reordered per axis so that `min <= max`.
    #[must_use]
    pub fn new(min: Point3<f64>, max: Point3<f64>) -> Self {
        Self {
            min: Point3::new(min.x.min(max.x), min.y.min(max.y), min.z.min(max.z)),
            max: Point3::new(min.x.max(max.x), min.y.max(max.y), min.z.max(max.z)),
        }
    }

    /// Create an empty (inverted) AABB, ready to be expanded.
    #[must_use]
    #[allow(clippy::missing_const_for_fn)] // Point3::new is not const in nalgebra
    pub fn empty() -> Self {
        Self {
            min: Point3::new(f64::INFINITY, f64::INFINITY, f64::INFINITY),
            max: Point3::new(f64::NEG_INFINITY, f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    /// Create the smallest AABB containing every point.
    ///
    /// Returns an empty AABB if the iterator is empty.
    #[must_use]
    pub fn from_points<'a>(points: impl Iterator<Item = &'a Point3<f64>>) -> Self {
        let mut aabb = Self::empty();
        for point in points {
            aabb.expand_to_include(point);
        }
        aabb
    }

    /// Grow the box to include `point`.
    pub fn expand_to_include(&mut self, point: &Point3<f64>) {
        self.min = Point3::new(
            self.min.x.min(point.x),
            self.min.y.min(point.y),
            self.min.z.min(point.z),
        );
        self.max = Point3::new(
            self.max.x.max(point.x),
            self.max.y.max(point.y),
            self.max.z.max(point.z),
        );
    }

    /// Check if the AABB is empty (min > max on some axis).
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Size along each axis.
    #[inline]
    #[must_use]
    pub fn size(&self) -> Vector3<f64> {
        self.max - self.min
    }

    /// Center of the box.
    #[inline]
    #[must_use]
    pub fn center(&self) -> Point3<f64> {
        nalgebra::center(&self.min, &self.max)
    }

    /// Length of the longest edge.
    #[inline]
    #[must_use]
    pub fn max_extent(&self) -> f64 {
        let s = self.size();
        s.x.max(s.y).max(s.z)
    }

    /// Check if a point lies inside the box (boundary inclusive).
    #[inline]
    #[must_use]
    pub fn contains(&self, point: &Point3<f64>) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
            && point.z >= self.min.z
            && point.z <= self.max.z
    }
}

impl Default for Aabb {
    fn default() -> Self {
        Self::empty()
    }
}
