//! Element types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::NodeId;

/// Stable identifier of an element within a [`Region`](crate::Region).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementId(pub u32);

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "element #{}", self.0)
    }
}

/// Shape of a linear Lagrange element.
///
/// Nodes are ordered with the first local coordinate varying fastest, so the
/// node at local index `i | j << 1 | k << 2` sits at `xi = (i, j, k)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ElementShape {
    /// Bilinear quadrilateral with 4 nodes.
    Square,
    /// Trilinear hexahedron with 8 nodes.
    Cube,
}

impl ElementShape {
    /// Number of nodes the shape requires.
    #[inline]
    #[must_use]
    pub const fn node_count(self) -> usize {
        match self {
            Self::Square => 4,
            Self::Cube => 8,
        }
    }

    /// Topological dimension of the shape.
    #[inline]
    #[must_use]
    pub const fn dimension(self) -> usize {
        match self {
            Self::Square => 2,
            Self::Cube => 3,
        }
    }
}

/// An element referencing nodes of its region in local node order.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Element {
    /// Identifier of the element in its region.
    pub id: ElementId,
    /// Element shape.
    pub shape: ElementShape,
    /// Node identifiers in local node order.
    pub nodes: Vec<NodeId>,
}

impl Element {
    /// Returns true if the element references `node`.
    #[must_use]
    pub fn uses_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shape_node_counts() {
        assert_eq!(ElementShape::Square.node_count(), 4);
        assert_eq!(ElementShape::Cube.node_count(), 8);
        assert_eq!(ElementShape::Square.dimension(), 2);
        assert_eq!(ElementShape::Cube.dimension(), 3);
    }

    #[test]
    fn element_uses_node() {
        let element = Element {
            id: ElementId(1),
            shape: ElementShape::Square,
            nodes: vec![NodeId(1), NodeId(2), NodeId(3), NodeId(4)],
        };
        assert!(element.uses_node(NodeId(3)));
        assert!(!element.uses_node(NodeId(5)));
    }
}
