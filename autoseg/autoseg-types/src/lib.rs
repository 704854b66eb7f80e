//! Core region types for the auto-segmentation workspace.
//!
//! This crate provides the foundational containers that every other
//! `autoseg-*` crate writes geometry into:
//!
//! - [`Node`] - A point in 3D space with a stable [`NodeId`]
//! - [`Element`] - A square (2D) or cube (3D) element over nodes
//! - [`Region`] - A named container of nodes and elements
//! - [`ChangeScope`] - Staged, all-or-nothing edits to a region
//! - [`Aabb`] - Axis-aligned bounding box
//!
//! # Layer 0 Crate
//!
//! This is a Layer 0 crate with **zero rendering dependencies**. The visualization
//! engine only ever sees the coordinates stored here.
//!
//! # Coordinate System
//!
//! Uses a **right-handed coordinate system** in image pixel units:
//! - X: image column
//! - Y: image row
//! - Z: slice index
//!
//! # Example
//!
//! ```
//! use autoseg_types::{ElementShape, Point3, Region};
//!
//! let mut region = Region::new("detection");
//!
//! let mut scope = region.change();
//! let a = scope.create_node(Point3::new(0.0, 0.0, 0.0));
//! let b = scope.create_node(Point3::new(1.0, 0.0, 0.0));
//! let c = scope.create_node(Point3::new(0.0, 1.0, 0.0));
//! let d = scope.create_node(Point3::new(1.0, 1.0, 0.0));
//! scope.create_element(ElementShape::Square, &[a, b, c, d]).unwrap();
//! scope.commit();
//!
//! assert_eq!(region.node_count(), 4);
//! assert_eq!(region.element_count(), 1);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod bounds;
mod element;
mod error;
mod node;
mod region;

pub use bounds::Aabb;
pub use element::{Element, ElementId, ElementShape};
pub use error::{RegionError, RegionResult};
pub use node::{Node, NodeId};
pub use region::{ChangeScope, Region};

// Re-export nalgebra types for convenience
pub use nalgebra::{Matrix3, Point3, Vector3};
