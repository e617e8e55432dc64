//! Detection camera: lens model plus everything that mirrors it.

use courtsim_core::{LensOptions, PipOptions};
use glam::Vec3;

use crate::frustum::FrustumHelper;
use crate::lens::{LensConfig, LensModel, LensParameter, Projection};
use crate::pip::PipViewport;
use crate::uniforms::CameraUniforms;

/// The detection camera with its frustum helper and preview viewport.
///
/// Every change goes through [`DetectionCamera::apply`] or
/// [`DetectionCamera::sync`], which keep the helper and the preview size in
/// step with the lens.
#[derive(Debug, Clone)]
pub struct DetectionCamera {
    lens: LensModel,
    helper: FrustumHelper,
    pip: PipViewport,
}

impl DetectionCamera {
    pub fn new(lens: &LensOptions, pip: &PipOptions) -> Self {
        let lens = LensModel::new(LensConfig::from_options(lens));
        let projection = lens.projection();
        Self {
            helper: FrustumHelper::new(lens.config(), &projection),
            pip: PipViewport::new(pip, projection.aspect_ratio),
            lens,
        }
    }

    /// Applies one lens or pose change and returns the new projection.
    pub fn apply(&mut self, parameter: LensParameter, value: f32) -> Projection {
        let projection = self.lens.set_parameter(parameter, value);
        self.sync();
        projection
    }

    /// Moves the camera to `position`.
    pub fn set_position(&mut self, position: Vec3) {
        self.lens.set_position(position);
        self.sync();
    }

    /// Refreshes the helper and the preview size from the lens.
    pub fn sync(&mut self) {
        let projection = self.lens.projection();
        self.helper.update(self.lens.config(), &projection);
        self.pip.resize_for_aspect(projection.aspect_ratio);
    }

    pub fn lens(&self) -> &LensModel {
        &self.lens
    }

    pub fn projection(&self) -> Projection {
        self.lens.projection()
    }

    pub fn position(&self) -> Vec3 {
        self.lens.config().position
    }

    pub fn helper(&self) -> &FrustumHelper {
        &self.helper
    }

    pub fn pip(&self) -> &PipViewport {
        &self.pip
    }

    pub fn pip_mut(&mut self) -> &mut PipViewport {
        &mut self.pip
    }

    /// Uniforms for rendering the preview through this camera.
    pub fn uniforms(&self) -> CameraUniforms {
        CameraUniforms::from_lens(&self.lens)
    }
}

impl Default for DetectionCamera {
    fn default() -> Self {
        Self::new(&LensOptions::default(), &PipOptions::default())
    }
}
