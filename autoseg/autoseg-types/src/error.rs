//! Error types for region editing.

use thiserror::Error;

use crate::{ElementShape, NodeId};

/// Result type alias for region operations.
pub type RegionResult<T> = Result<T, RegionError>;

/// Errors that can occur while editing a region.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RegionError {
    /// The node does not exist in the region or the current change scope.
    #[error("{0} does not exist in region")]
    UnknownNode(NodeId),

    /// An element was given the wrong number of nodes for its shape.
    #[error("{shape:?} element needs {expected} nodes, got {actual}")]
    WrongNodeCount {
        /// Shape of the element being created.
        shape: ElementShape,
        /// Nodes required by the shape.
        expected: usize,
        /// Nodes supplied.
        actual: usize,
    },
}

impl RegionError {
    /// Create a wrong node count error for `shape`.
    #[must_use]
    pub const fn wrong_node_count(shape: ElementShape, actual: usize) -> Self {
        Self::WrongNodeCount {
            shape,
            expected: shape.node_count(),
            actual,
        }
    }
}
