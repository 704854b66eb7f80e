//! Image volume and derived fields for the auto-segmentation workspace.
//!
//! This crate turns a stack of slice images into the data a segmentation
//! view renders:
//!
//! - [`load_volume`] - Read an [`ImageSource`] into an [`ImageVolume`]
//! - [`derive_scalar_field`] - Single-channel intensity via [`luminance`]
//! - [`BoundingMesh`] - The hexahedron enclosing the volume, following its scale
//! - [`compute_histogram`] - Normalized intensity histogram
//! - [`VolumeFieldModel`] - Owns all of the above plus the segmentation mesh region
//!
//! # Example
//!
//! ```
//! use autoseg_volume::{Components, FieldProvider, ImageVolume, VolumeFieldModel, VolumeParams};
//!
//! let volume = ImageVolume::from_samples([2, 2, 2], Components::Gray, vec![0.5; 8]).unwrap();
//! let mut model = VolumeFieldModel::new(volume, &VolumeParams::default()).unwrap();
//!
//! model.set_scale([1.0, 1.0, 2.0]).unwrap();
//! assert_eq!(model.bounding_mesh().corners()[7].z, 3.5);
//! assert!((model.histogram().total() - 1.0).abs() < 1e-12);
//! ```

#![cfg_attr(not(test), deny(clippy::unwrap_used, clippy::expect_used))]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod error;
mod field;
mod hex;
mod histogram;
mod model;
mod params;
mod scalar_field;
mod source;
mod volume;

pub use error::{VolumeError, VolumeResult};
pub use field::FieldProvider;
pub use hex::{BoundingMesh, CornerId, node_positions};
pub use histogram::{DEFAULT_BIN_COUNT, Histogram, compute_histogram};
pub use model::{SEGMENTATION_MESH_REGION, VolumeFieldModel};
pub use params::VolumeParams;
pub use scalar_field::{LUMINANCE_WEIGHTS, ScalarField, derive_scalar_field, luminance};
pub use source::{DirectoryImageSource, IMAGE_EXTENSIONS, ImageResource, ImageSource};
pub use volume::{Components, ImageVolume, load_volume};
