//! GPU-facing camera data.

use glam::{Mat4, Vec3};

use crate::camera::Camera;
use crate::lens::LensModel;

/// GPU-compatible camera uniforms for either the main or the detection view.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniforms {
    /// World-to-eye matrix.
    pub view: [[f32; 4]; 4],
    /// Eye-to-clip matrix.
    pub proj: [[f32; 4]; 4],
    /// Camera position in world space (w unused).
    pub camera_pos: [f32; 4],
}

impl CameraUniforms {
    fn from_parts(view: Mat4, proj: Mat4, position: Vec3) -> Self {
        Self {
            view: view.to_cols_array_2d(),
            proj: proj.to_cols_array_2d(),
            camera_pos: position.extend(1.0).to_array(),
        }
    }

    /// Uniforms for the detection camera's current projection.
    #[must_use]
    pub fn from_lens(lens: &LensModel) -> Self {
        Self::from_parts(
            lens.view_matrix(),
            lens.projection_matrix(),
            lens.config().position,
        )
    }

    /// Uniforms for the main orbit camera.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_parts(
            camera.view_matrix(),
            camera.projection_matrix(),
            camera.position,
        )
    }

    /// Raw bytes, ready for a uniform buffer upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for CameraUniforms {
    fn default() -> Self {
        Self::from_parts(Mat4::IDENTITY, Mat4::IDENTITY, Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_size() {
        // Two mat4 and one vec4
        assert_eq!(std::mem::size_of::<CameraUniforms>(), 144);
        assert_eq!(CameraUniforms::default().as_bytes().len(), 144);
    }

    #[test]
    fn test_from_lens() {
        let lens = LensModel::default();
        let uniforms = CameraUniforms::from_lens(&lens);
        assert_eq!(uniforms.camera_pos, [0.0, 6.0, 10.0, 1.0]);
        assert_eq!(uniforms.proj, lens.projection_matrix().to_cols_array_2d());
    }
}
