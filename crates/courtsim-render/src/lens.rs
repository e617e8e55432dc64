//! Physical lens model for the detection camera.
//!
//! Converts photographic parameters (sensor size in millimeters, focal
//! length in millimeters, focus distance in meters) into the perspective
//! projection used to render the camera's view.
//!
//! Non-positive sensor, focal or focus values are outside the contract. They
//! are not rejected; the derived projection is simply whatever the formulas
//! give after clamping.

use courtsim_core::{CourtsimError, LensOptions, Parameter, Result};
use glam::{Mat4, Vec3};

/// Smallest vertical field of view the projection accepts, in degrees.
pub const MIN_FOV_DEGREES: f32 = 5.0;
/// Largest vertical field of view the projection accepts, in degrees.
pub const MAX_FOV_DEGREES: f32 = 120.0;
/// Lower bound on the near clipping plane.
pub const MIN_NEAR: f32 = 0.05;
/// Minimum gap between the near and far planes.
pub const MIN_DEPTH_RANGE: f32 = 0.1;

/// Unclamped vertical field of view in degrees for a sensor height and focal length.
#[must_use]
pub fn vertical_fov_degrees(sensor_height: f32, focal_length: f32) -> f32 {
    (2.0 * ((sensor_height / 2.0) / focal_length).atan()).to_degrees()
}

/// Near and far clipping planes for a focus distance.
#[must_use]
pub fn clip_planes(focus_distance: f32) -> (f32, f32) {
    let near = MIN_NEAR.max(focus_distance / 100.0);
    let far = (near + MIN_DEPTH_RANGE).max(focus_distance);
    (near, far)
}

/// A single adjustable lens or pose value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LensParameter {
    SensorWidth,
    SensorHeight,
    FocalLength,
    FocusDistance,
    PositionX,
    PositionY,
    PositionZ,
}

impl LensParameter {
    /// Maps a simulation parameter onto the lens, if it belongs to it.
    #[must_use]
    pub fn from_parameter(parameter: Parameter) -> Option<Self> {
        match parameter {
            Parameter::SensorWidth => Some(Self::SensorWidth),
            Parameter::SensorHeight => Some(Self::SensorHeight),
            Parameter::FocalLength => Some(Self::FocalLength),
            Parameter::FocusDistance => Some(Self::FocusDistance),
            Parameter::CameraPosX => Some(Self::PositionX),
            Parameter::CameraPosY => Some(Self::PositionY),
            Parameter::CameraPosZ => Some(Self::PositionZ),
            _ => None,
        }
    }

    /// Returns true for values that only move the camera.
    #[must_use]
    pub fn is_pose(self) -> bool {
        matches!(self, Self::PositionX | Self::PositionY | Self::PositionZ)
    }
}

/// Lens and pose configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensConfig {
    /// Sensor width in millimeters.
    pub sensor_width: f32,
    /// Sensor height in millimeters.
    pub sensor_height: f32,
    /// Focal length in millimeters.
    pub focal_length: f32,
    /// Focus distance in meters.
    pub focus_distance: f32,
    /// Camera position in world space.
    pub position: Vec3,
    /// Fixed aim point.
    pub target: Vec3,
}

impl LensConfig {
    pub fn from_options(options: &LensOptions) -> Self {
        Self {
            sensor_width: options.sensor_width,
            sensor_height: options.sensor_height,
            focal_length: options.focal_length,
            focus_distance: options.focus_distance,
            position: options.position,
            target: options.target,
        }
    }

    /// Writes one value.
    pub fn set(&mut self, parameter: LensParameter, value: f32) {
        match parameter {
            LensParameter::SensorWidth => self.sensor_width = value,
            LensParameter::SensorHeight => self.sensor_height = value,
            LensParameter::FocalLength => self.focal_length = value,
            LensParameter::FocusDistance => self.focus_distance = value,
            LensParameter::PositionX => self.position.x = value,
            LensParameter::PositionY => self.position.y = value,
            LensParameter::PositionZ => self.position.z = value,
        }
    }

    /// Derives the projection for this configuration.
    #[must_use]
    pub fn projection(&self) -> Projection {
        let fov = vertical_fov_degrees(self.sensor_height, self.focal_length);
        let (near, far) = clip_planes(self.focus_distance);
        Projection {
            fov_vertical_degrees: fov.clamp(MIN_FOV_DEGREES, MAX_FOV_DEGREES),
            aspect_ratio: self.sensor_width / self.sensor_height,
            near,
            far,
        }
    }

    /// Returns the view matrix looking from `position` at `target`.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self::from_options(&LensOptions::default())
    }
}

/// Perspective projection derived from a [`LensConfig`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    /// Vertical field of view in degrees, within [5, 120].
    pub fov_vertical_degrees: f32,
    /// Width over height of the sensor.
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane, always beyond `near`.
    pub far: f32,
}

impl Projection {
    /// Returns the projection matrix.
    #[must_use]
    pub fn matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_vertical_degrees.to_radians(),
            self.aspect_ratio,
            self.near,
            self.far,
        )
    }
}

/// Lens configuration plus its derived projection.
#[derive(Debug, Clone)]
pub struct LensModel {
    config: LensConfig,
    projection: Projection,
}

impl LensModel {
    pub fn new(config: LensConfig) -> Self {
        Self {
            projection: config.projection(),
            config,
        }
    }

    pub fn config(&self) -> &LensConfig {
        &self.config
    }

    pub fn projection(&self) -> Projection {
        self.projection
    }

    /// Re-derives the projection from the current configuration.
    pub fn recompute(&mut self) -> Projection {
        self.projection = self.config.projection();
        log::debug!(
            "lens projection: fov {:.2} deg, aspect {:.3}, near {:.3}, far {:.3}",
            self.projection.fov_vertical_degrees,
            self.projection.aspect_ratio,
            self.projection.near,
            self.projection.far
        );
        self.projection
    }

    /// Sets one value and returns the recomputed projection.
    pub fn set_parameter(&mut self, parameter: LensParameter, value: f32) -> Projection {
        self.config.set(parameter, value);
        self.recompute()
    }

    /// Sets a value addressed by its parameter name.
    pub fn set_parameter_by_name(&mut self, name: &str, value: f32) -> Result<Projection> {
        let parameter: Parameter = name.parse()?;
        let lens_parameter = LensParameter::from_parameter(parameter)
            .ok_or_else(|| CourtsimError::WrongComponent {
                name: name.to_string(),
                component: "lens",
            })?;
        Ok(self.set_parameter(lens_parameter, value))
    }

    /// Moves the camera, keeping the aim point.
    pub fn set_position(&mut self, position: Vec3) {
        self.config.position = position;
    }

    pub fn view_matrix(&self) -> Mat4 {
        self.config.view_matrix()
    }

    pub fn projection_matrix(&self) -> Mat4 {
        self.projection.matrix()
    }

    /// Returns the combined view-projection matrix.
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}

impl Default for LensModel {
    fn default() -> Self {
        Self::new(LensConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_full_frame_35mm() {
        // 2 * atan(10 / 35)
        let fov = vertical_fov_degrees(20.0, 35.0);
        assert!((fov - 31.89).abs() < 0.01, "fov = {fov}");

        let projection = LensModel::default().projection();
        assert!((projection.fov_vertical_degrees - 31.89).abs() < 0.01);
        assert!((projection.aspect_ratio - 1.8).abs() < 1e-6);
        assert!((projection.near - 0.12).abs() < 1e-6);
        assert_eq!(projection.far, 12.0);
    }

    #[test]
    fn test_clip_planes_short_focus() {
        let (near, far) = clip_planes(1.0);
        assert_eq!(near, 0.05);
        assert_eq!(far, 1.0);

        let (near, far) = clip_planes(0.01);
        assert_eq!(near, 0.05);
        assert!((far - 0.15).abs() < 1e-6);
    }

    #[test]
    fn test_fov_clamped() {
        let mut lens = LensModel::default();
        let wide = lens.set_parameter(LensParameter::FocalLength, 0.001);
        assert_eq!(wide.fov_vertical_degrees, MAX_FOV_DEGREES);

        let narrow = lens.set_parameter(LensParameter::FocalLength, 10_000.0);
        assert_eq!(narrow.fov_vertical_degrees, MIN_FOV_DEGREES);
    }

    #[test]
    fn test_set_parameter_updates_projection() {
        let mut lens = LensModel::default();
        let projection = lens.set_parameter(LensParameter::SensorWidth, 20.0);
        assert_eq!(projection.aspect_ratio, 1.0);
        assert_eq!(lens.projection(), projection);
        assert_eq!(lens.config().sensor_width, 20.0);
    }

    #[test]
    fn test_set_position_by_name() {
        let mut lens = LensModel::default();
        let before = lens.projection();
        let after = lens.set_parameter_by_name("cam_pos_y", 3.0).unwrap();
        assert_eq!(before, after);
        assert_eq!(lens.config().position, Vec3::new(0.0, 3.0, 10.0));

        let err = lens.set_parameter_by_name("launch_angle", 30.0).unwrap_err();
        assert!(matches!(
            &err,
            CourtsimError::WrongComponent { name, component: "lens" } if name == "launch_angle"
        ));
        assert_eq!(err.to_string(), "parameter 'launch_angle' is not a lens setting");
        assert!(matches!(
            lens.set_parameter_by_name("iso", 100.0),
            Err(CourtsimError::UnknownParameter(_))
        ));
        assert_eq!(lens.config().position, Vec3::new(0.0, 3.0, 10.0));
    }

    #[test]
    fn test_view_matrix_aims_at_target() {
        let lens = LensModel::default();
        let target_in_view = lens.view_matrix().transform_point3(Vec3::ZERO);
        // Target lies straight ahead on the -Z axis of eye space
        assert!(target_in_view.x.abs() < 1e-5);
        assert!(target_in_view.y.abs() < 1e-5);
        assert!((target_in_view.z + Vec3::new(0.0, 6.0, 10.0).length()).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn projection_always_valid(
            sensor_width in 0.001f32..10_000.0,
            sensor_height in 0.001f32..10_000.0,
            focal_length in 0.001f32..10_000.0,
            focus_distance in 0.001f32..10_000.0,
        ) {
            let config = LensConfig {
                sensor_width,
                sensor_height,
                focal_length,
                focus_distance,
                ..LensConfig::default()
            };
            let projection = config.projection();
            prop_assert!(projection.near < projection.far);
            prop_assert!(projection.fov_vertical_degrees >= MIN_FOV_DEGREES);
            prop_assert!(projection.fov_vertical_degrees <= MAX_FOV_DEGREES);
            prop_assert!(projection.aspect_ratio > 0.0);
        }
    }
}
