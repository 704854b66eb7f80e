//! Point cloud generation from the current render state.

use autoseg_types::Region;
use tracing::{debug, info};

use crate::cloud::PointCloud;
use crate::params::PointCloudParams;
use crate::render::{Graphic, HiddenGraphic, PointSampler, RenderTarget};
use crate::{ScanError, ScanResult};

/// Name of the region holding generated points.
pub const OUTPUT_REGION: &str = "output";

/// Turns what the engine currently shows into a point cloud.
///
/// Each generation replaces the previous one: the output region is emptied,
/// the image plane is hidden so it does not contribute points, the visible
/// surfaces are sampled, and the image plane's visibility is restored.
#[derive(Debug, Clone, Default)]
pub struct PointCloudGenerator {
    params: PointCloudParams,
}

impl PointCloudGenerator {
    /// Generator with the given params.
    #[must_use]
    pub const fn new(params: PointCloudParams) -> Self {
        Self { params }
    }

    /// The current params.
    #[must_use]
    pub const fn params(&self) -> &PointCloudParams {
        &self.params
    }

    /// Change the density used by later generations.
    pub fn set_density(&mut self, density: f64) {
        self.params.density = density;
    }

    /// Sample `engine` and write the points into `output`.
    ///
    /// Existing nodes and elements of `output` are destroyed before sampling,
    /// so after a successful call the region holds exactly the new points.
    ///
    /// # Errors
    ///
    /// - [`ScanError::InvalidDensity`] if the density is not finite and
    ///   positive; `output` is left untouched
    /// - any error from [`PointSampler::sample_visible`]; `output` is left empty
    pub fn generate<E>(&self, engine: &mut E, output: &mut Region) -> ScanResult<PointCloud>
    where
        E: RenderTarget + PointSampler + ?Sized,
    {
        if !self.params.is_valid() {
            return Err(ScanError::InvalidDensity(self.params.density));
        }

        let destroyed = output.node_count();
        output.clear();
        debug!(destroyed, region = output.name(), "Destroyed previous points");

        let points = {
            let mut hidden = HiddenGraphic::new(engine, Graphic::ImagePlane);
            hidden.sample_visible(self.params.density)?
        };

        let mut scope = output.change();
        scope.create_nodes(&points);
        scope.commit();

        info!(
            points = points.len(),
            density = self.params.density,
            region = output.name(),
            "Generated point cloud"
        );
        Ok(PointCloud::from_positions(points))
    }
}

/// Sample `engine` at `density` into `output`. See [`PointCloudGenerator::generate`].
///
/// # Errors
///
/// Same as [`PointCloudGenerator::generate`].
pub fn generate_point_cloud<E>(
    engine: &mut E,
    density: f64,
    output: &mut Region,
) -> ScanResult<PointCloud>
where
    E: RenderTarget + PointSampler + ?Sized,
{
    PointCloudGenerator::new(PointCloudParams::with_density(density)).generate(engine, output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use autoseg_types::Point3;
    use std::collections::HashMap;

    /// Engine whose image plane, when visible, would add a stray point.
    #[derive(Default)]
    struct Engine {
        visible: HashMap<Graphic, bool>,
        fail: bool,
        calls: usize,
    }

    impl RenderTarget for Engine {
        fn set_visibility(&mut self, graphic: Graphic, visible: bool) {
            self.visible.insert(graphic, visible);
        }

        fn is_visible(&self, graphic: Graphic) -> bool {
            self.visible.get(&graphic).copied().unwrap_or(false)
        }
    }

    impl PointSampler for Engine {
        fn sample_visible(&mut self, density: f64) -> ScanResult<Vec<Point3<f64>>> {
            self.calls += 1;
            if self.fail {
                return Err(ScanError::sampling("engine offline"));
            }
            #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
            let count = density as usize + self.calls;
            let mut points: Vec<_> = (0..count)
                .map(|i| Point3::new(f64::from(u32::try_from(i).unwrap_or(0)), 0.0, 0.0))
                .collect();
            if self.is_visible(Graphic::ImagePlane) {
                points.push(Point3::new(-1.0, -1.0, -1.0));
            }
            Ok(points)
        }
    }

    fn shown_engine() -> Engine {
        let mut engine = Engine::default();
        engine.set_visibility(Graphic::ImagePlane, true);
        engine
    }

    #[test]
    fn image_plane_hidden_during_sampling_and_restored() {
        let mut engine = shown_engine();
        let mut output = Region::new(OUTPUT_REGION);
        let cloud = generate_point_cloud(&mut engine, 5.0, &mut output).unwrap();
        assert_eq!(cloud.len(), 6);
        assert!(cloud.iter().all(|p| p.x >= 0.0));
        assert!(engine.is_visible(Graphic::ImagePlane));
    }

    #[test]
    fn second_generation_replaces_first() {
        let mut engine = shown_engine();
        let mut output = Region::new(OUTPUT_REGION);
        let generator = PointCloudGenerator::new(PointCloudParams::with_density(3.0));
        let first = generator.generate(&mut engine, &mut output).unwrap();
        let second = generator.generate(&mut engine, &mut output).unwrap();
        assert_eq!(first.len(), 4);
        assert_eq!(second.len(), 5);
        assert_eq!(output.node_count(), 5);
        assert_eq!(PointCloud::from_region(&output), second);
    }

    #[test]
    fn sampling_failure_restores_visibility() {
        let mut engine = shown_engine();
        engine.fail = true;
        let mut output = Region::new(OUTPUT_REGION);
        let mut scope = output.change();
        scope.create_node(Point3::origin());
        scope.commit();

        let err = generate_point_cloud(&mut engine, 10.0, &mut output).unwrap_err();
        assert!(matches!(err, ScanError::Sampling { .. }));
        assert!(engine.is_visible(Graphic::ImagePlane));
        assert!(output.is_empty());
    }

    #[test]
    fn invalid_density_leaves_output_untouched() {
        let mut engine = shown_engine();
        let mut output = Region::new(OUTPUT_REGION);
        let mut scope = output.change();
        scope.create_node(Point3::origin());
        scope.commit();

        for density in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = generate_point_cloud(&mut engine, density, &mut output).unwrap_err();
            assert!(matches!(err, ScanError::InvalidDensity(_)));
        }
        assert_eq!(output.node_count(), 1);
        assert_eq!(engine.calls, 0);
    }

    #[test]
    fn hidden_image_plane_stays_hidden() {
        let mut engine = Engine::default();
        let mut output = Region::new(OUTPUT_REGION);
        let mut generator = PointCloudGenerator::default();
        generator.set_density(1.0);
        generator.generate(&mut engine, &mut output).unwrap();
        assert!(!engine.is_visible(Graphic::ImagePlane));
        assert!((generator.params().density - 1.0).abs() < f64::EPSILON);
    }
}
