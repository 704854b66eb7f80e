//! Image sources: where slice images come from.

use std::fmt;
use std::path::{Path, PathBuf};

use image::DynamicImage;

use crate::{VolumeError, VolumeResult};

/// File extensions recognized by [`DirectoryImageSource`].
pub const IMAGE_EXTENSIONS: [&str; 6] = ["png", "tif", "tiff", "jpg", "jpeg", "bmp"];

/// A single readable image, one slice of the volume.
#[derive(Clone, PartialEq, Eq)]
pub enum ImageResource {
    /// An image file on disk.
    File(PathBuf),
    /// An encoded image held in memory.
    Encoded {
        /// Name used in error messages.
        name: String,
        /// Encoded bytes (PNG, TIFF, ...).
        bytes: Vec<u8>,
    },
}

impl ImageResource {
    /// Human readable name for logs and errors.
    #[must_use]
    pub fn name(&self) -> String {
        match self {
            Self::File(path) => path.display().to_string(),
            Self::Encoded { name, .. } => name.clone(),
        }
    }

    /// Decode the resource.
    ///
    /// # Errors
    ///
    /// Returns [`VolumeError::ImageLoad`] if the resource is missing or cannot
    /// be decoded.
    pub fn decode(&self) -> VolumeResult<DynamicImage> {
        let decoded = match self {
            Self::File(path) => image::open(path),
            Self::Encoded { bytes, .. } => image::load_from_memory(bytes),
        };
        decoded.map_err(|source| VolumeError::ImageLoad {
            resource: self.name(),
            source,
        })
    }
}

impl fmt::Debug for ImageResource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::File(path) => f.debug_tuple("File").field(path).finish(),
            Self::Encoded { name, bytes } => f
                .debug_struct("Encoded")
                .field("name", name)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

impl From<PathBuf> for ImageResource {
    fn from(path: PathBuf) -> Self {
        Self::File(path)
    }
}

impl From<&Path> for ImageResource {
    fn from(path: &Path) -> Self {
        Self::File(path.to_path_buf())
    }
}

/// Collaborator that supplies the ordered slice images of a volume.
///
/// The order of the returned resources is the slice order along Z.
pub trait ImageSource {
    /// The image resources, one per slice.
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be enumerated.
    fn image_resources(&self) -> VolumeResult<Vec<ImageResource>>;
}

impl ImageSource for [ImageResource] {
    fn image_resources(&self) -> VolumeResult<Vec<ImageResource>> {
        Ok(self.to_vec())
    }
}

impl ImageSource for Vec<ImageResource> {
    fn image_resources(&self) -> VolumeResult<Vec<ImageResource>> {
        Ok(self.clone())
    }
}

impl<T: ImageSource + ?Sized> ImageSource for &T {
    fn image_resources(&self) -> VolumeResult<Vec<ImageResource>> {
        (**self).image_resources()
    }
}

/// All image files in a directory, in lexical file name order.
///
/// # Example
///
/// ```no_run
/// use autoseg_volume::{DirectoryImageSource, load_volume};
///
/// let source = DirectoryImageSource::new("scans/sample-01");
/// let volume = load_volume(&source).unwrap();
/// println!("{:?}", volume.size_in_pixels());
/// ```
#[derive(Debug, Clone)]
pub struct DirectoryImageSource {
    dir: PathBuf,
}

impl DirectoryImageSource {
    /// Create a source over `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory being read.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| known.eq_ignore_ascii_case(ext))
        })
}

impl ImageSource for DirectoryImageSource {
    fn image_resources(&self) -> VolumeResult<Vec<ImageResource>> {
        let io_error = |source| VolumeError::Io {
            path: self.dir.clone(),
            source,
        };

        let mut paths = Vec::new();
        for entry in std::fs::read_dir(&self.dir).map_err(io_error)? {
            let path = entry.map_err(io_error)?.path();
            if path.is_file() && has_image_extension(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        Ok(paths.into_iter().map(ImageResource::File).collect())
    }
}
