//! Narrow view of the rendering engine used during point generation.

use std::ops::{Deref, DerefMut};

use autoseg_types::Point3;
use tracing::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::ScanResult;

/// Graphics the segmentation view draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Graphic {
    /// Image-textured iso-surface slicing the volume.
    ImagePlane,
    /// Threshold contour of the scalar field.
    Segmentation,
    /// Glyphs of the generated point cloud.
    PointCloud,
    /// Outline of the bounding mesh.
    Outline,
}

impl Graphic {
    /// Every graphic, in drawing order.
    pub const ALL: [Self; 4] = [
        Self::ImagePlane,
        Self::Segmentation,
        Self::PointCloud,
        Self::Outline,
    ];
}

/// Visibility control over the engine's graphics.
pub trait RenderTarget {
    /// Show or hide `graphic`.
    fn set_visibility(&mut self, graphic: Graphic, visible: bool);

    /// Whether `graphic` is currently shown.
    fn is_visible(&self, graphic: Graphic) -> bool;
}

/// Samples points on whatever the engine currently renders.
pub trait PointSampler {
    /// Points on the visible surfaces at `density`.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::Sampling`](crate::ScanError::Sampling) if the
    /// engine cannot sample.
    fn sample_visible(&mut self, density: f64) -> ScanResult<Vec<Point3<f64>>>;
}

impl<T: RenderTarget + ?Sized> RenderTarget for &mut T {
    fn set_visibility(&mut self, graphic: Graphic, visible: bool) {
        (**self).set_visibility(graphic, visible);
    }

    fn is_visible(&self, graphic: Graphic) -> bool {
        (**self).is_visible(graphic)
    }
}

impl<T: PointSampler + ?Sized> PointSampler for &mut T {
    fn sample_visible(&mut self, density: f64) -> ScanResult<Vec<Point3<f64>>> {
        (**self).sample_visible(density)
    }
}

/// Hides a graphic for as long as the guard lives.
///
/// The graphic's previous visibility is restored on drop, including when the
/// work done through the guard fails or panics.
///
/// # Example
///
/// ```
/// use autoseg_scan::{Graphic, HiddenGraphic, RenderTarget};
/// use std::collections::HashSet;
///
/// #[derive(Default)]
/// struct Engine(HashSet<Graphic>);
///
/// impl RenderTarget for Engine {
///     fn set_visibility(&mut self, graphic: Graphic, visible: bool) {
///         if visible { self.0.insert(graphic); } else { self.0.remove(&graphic); }
///     }
///     fn is_visible(&self, graphic: Graphic) -> bool {
///         self.0.contains(&graphic)
///     }
/// }
///
/// let mut engine = Engine::default();
/// engine.set_visibility(Graphic::ImagePlane, true);
/// {
///     let hidden = HiddenGraphic::new(&mut engine, Graphic::ImagePlane);
///     assert!(!hidden.is_visible(Graphic::ImagePlane));
/// }
/// assert!(engine.is_visible(Graphic::ImagePlane));
/// ```
#[derive(Debug)]
pub struct HiddenGraphic<'a, T: RenderTarget + ?Sized> {
    target: &'a mut T,
    graphic: Graphic,
    was_visible: bool,
}

impl<'a, T: RenderTarget + ?Sized> HiddenGraphic<'a, T> {
    /// Hide `graphic` on `target` until the guard is dropped.
    pub fn new(target: &'a mut T, graphic: Graphic) -> Self {
        let was_visible = target.is_visible(graphic);
        target.set_visibility(graphic, false);
        debug!(?graphic, was_visible, "Hid graphic");
        Self {
            target,
            graphic,
            was_visible,
        }
    }

    /// The hidden graphic.
    #[must_use]
    pub const fn graphic(&self) -> Graphic {
        self.graphic
    }
}

impl<T: RenderTarget + ?Sized> Deref for HiddenGraphic<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        self.target
    }
}

impl<T: RenderTarget + ?Sized> DerefMut for HiddenGraphic<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        self.target
    }
}

impl<T: RenderTarget + ?Sized> Drop for HiddenGraphic<'_, T> {
    fn drop(&mut self) {
        self.target.set_visibility(self.graphic, self.was_visible);
    }
}
