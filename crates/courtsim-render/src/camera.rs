//! Main view camera and its preset positions.

use std::f32::consts::PI;

use glam::{Mat4, Vec3};

/// Closest the main camera may get to its target.
pub const MIN_ZOOM_DISTANCE: f32 = 0.1;

/// Keeps orbiting this far (in radians) from straight up or down.
const MIN_POLAR_ANGLE: f32 = 0.01;

/// Named viewpoints for the main camera. All look at the court center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewPreset {
    /// Default viewpoint behind the near baseline.
    #[default]
    Reset,
    /// Straight down onto the court.
    Top,
    /// Behind the near baseline.
    Front,
    /// Beside the net.
    Side,
    /// Elevated corner view.
    Isometric,
}

impl ViewPreset {
    /// Returns the camera position for this preset.
    #[must_use]
    pub fn position(self) -> Vec3 {
        match self {
            ViewPreset::Reset | ViewPreset::Front => Vec3::new(0.0, 5.0, 10.0),
            // Slight offset keeps look_at away from the degenerate straight-down case
            ViewPreset::Top => Vec3::new(0.0, 10.0, 0.01),
            ViewPreset::Side => Vec3::new(10.0, 5.0, 0.0),
            ViewPreset::Isometric => Vec3::new(8.0, 6.0, 8.0),
        }
    }

    /// Returns display name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            ViewPreset::Reset => "reset",
            ViewPreset::Top => "top",
            ViewPreset::Front => "front",
            ViewPreset::Side => "side",
            ViewPreset::Isometric => "isometric",
        }
    }

    /// Parses a display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        [
            ViewPreset::Reset,
            ViewPreset::Top,
            ViewPreset::Front,
            ViewPreset::Side,
            ViewPreset::Isometric,
        ]
        .into_iter()
        .find(|p| p.name() == name)
    }
}

/// Orbiting camera for the main view.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Point the camera is looking at.
    pub target: Vec3,
    /// Up vector.
    pub up: Vec3,
    /// Field of view in radians.
    pub fov: f32,
    /// Aspect ratio (width / height).
    pub aspect_ratio: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
}

impl Camera {
    /// Creates a camera at the reset preset with a 45 degree field of view.
    #[must_use]
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: ViewPreset::Reset.position(),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: std::f32::consts::FRAC_PI_4,
            aspect_ratio,
            near: 0.1,
            far: 1000.0,
        }
    }

    /// Updates the aspect ratio from a window size. Zero-sized windows are ignored.
    #[allow(clippy::cast_precision_loss)]
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect_ratio = width as f32 / height as f32;
        }
    }

    /// Moves the camera to a preset, looking at the court center.
    pub fn apply_preset(&mut self, preset: ViewPreset) {
        self.position = preset.position();
        self.target = Vec3::ZERO;
    }

    /// Returns the view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
    }

    /// Returns the projection matrix.
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect_ratio, self.near, self.far)
    }

    /// Returns the combined view-projection matrix.
    #[must_use]
    pub fn view_projection_matrix(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Returns the camera's forward direction.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.target - self.position).normalize()
    }

    /// Swings the camera around the target by `yaw` radians about the
    /// vertical axis and `pitch` radians toward the top of the view.
    ///
    /// The distance to the target is preserved and the camera never passes
    /// over either pole.
    pub fn orbit(&mut self, yaw: f32, pitch: f32) {
        let offset = self.position - self.target;
        let distance = offset.length();
        if distance <= f32::EPSILON {
            return;
        }

        let azimuth = offset.x.atan2(offset.z) - yaw;
        let polar = ((offset.y / distance).clamp(-1.0, 1.0).acos() - pitch)
            .clamp(MIN_POLAR_ANGLE, PI - MIN_POLAR_ANGLE);

        let (sin_polar, cos_polar) = polar.sin_cos();
        let (sin_azimuth, cos_azimuth) = azimuth.sin_cos();
        self.position = self.target
            + distance * Vec3::new(sin_polar * sin_azimuth, cos_polar, sin_polar * cos_azimuth);
    }

    /// Moves the camera `delta` meters toward the target (negative moves
    /// away), stopping at [`MIN_ZOOM_DISTANCE`].
    pub fn zoom(&mut self, delta: f32) {
        let offset = self.position - self.target;
        let distance = (offset.length() - delta).max(MIN_ZOOM_DISTANCE);
        self.position = self.target + offset.normalize_or(Vec3::Z) * distance;
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(16.0 / 9.0)
    }
}
