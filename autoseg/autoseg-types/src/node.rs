//! Node types.

use std::fmt;

use nalgebra::Point3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable identifier of a node within a [`Region`](crate::Region).
///
/// Identifiers start at 1 and are never reused within a region, even after
/// the node they named has been destroyed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u32);

impl NodeId {
    /// Returns the raw identifier value.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node #{}", self.0)
    }
}

/// A node: an identified point carrying a coordinate field value.
///
/// # Example
///
/// ```
/// use autoseg_types::{Node, NodeId, Point3};
///
/// let node = Node::new(NodeId(1), Point3::new(1.0, 2.0, 3.0));
/// assert_eq!(node.id, NodeId(1));
/// assert_eq!(node.position.y, 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node {
    /// Identifier of the node in its region.
    pub id: NodeId,
    /// Coordinate field value at this node.
    pub position: Point3<f64>,
}

impl Node {
    /// Create a node from an identifier and position.
    #[inline]
    #[must_use]
    pub const fn new(id: NodeId, position: Point3<f64>) -> Self {
        Self { id, position }
    }
}
