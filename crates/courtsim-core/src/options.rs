//! Configuration options for courtsim.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::court::CourtDimensions;
use crate::error::{CourtsimError, Result};

/// Global configuration options.
///
/// Every section has defaults matching the stock court demo, so a JSON file
/// only needs to list the values it changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Court dimensions.
    pub court: CourtDimensions,
    /// Ball launch settings.
    pub launch: LaunchOptions,
    /// Detection camera lens and pose.
    pub lens: LensOptions,
    /// Baseline alarm timing and colors.
    pub alarm: AlarmOptions,
    /// Picture-in-picture preview.
    pub pip: PipOptions,
    /// Main view.
    pub view: ViewOptions,
}

impl Options {
    /// Parses options from a JSON string and validates them.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Loads options from a JSON file and validates them.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        log::debug!("loading options from {}", path.as_ref().display());
        Self::from_json_str(&text)
    }

    /// Serializes the options as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks the preconditions the simulation relies on.
    pub fn validate(&self) -> Result<()> {
        let angle = self.launch.angle_deg;
        if !(angle > 0.0 && angle < 90.0) {
            return Err(CourtsimError::InvalidLaunchAngle(angle));
        }

        let positives = [
            ("court.length", self.court.length),
            ("court.width", self.court.width),
            ("launch.speed_multiplier", self.launch.speed_multiplier),
            ("lens.sensor_width", self.lens.sensor_width),
            ("lens.sensor_height", self.lens.sensor_height),
            ("lens.focal_length", self.lens.focal_length),
            ("lens.focus_distance", self.lens.focus_distance),
            ("alarm.interval", self.alarm.interval),
            ("pip.base_width", self.pip.base_width),
        ];
        for (name, value) in positives {
            if !(value.is_finite() && value > 0.0) {
                return Err(CourtsimError::InvalidOptions(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        if !(self.launch.rest_duration >= 0.0 && self.alarm.duration >= 0.0) {
            return Err(CourtsimError::InvalidOptions(
                "durations must not be negative".to_string(),
            ));
        }

        Ok(())
    }
}

/// Ball launch settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchOptions {
    /// Launch angle in degrees, within (0, 90).
    pub angle_deg: f32,
    /// Multiplier on the solved launch speed.
    pub speed_multiplier: f32,
    /// Seconds the ball rests before relaunching.
    pub rest_duration: f32,
    /// Lateral start offset; the landing point is mirrored across `x = 0`.
    pub start_offset_x: f32,
    /// Longitudinal start position. `None` starts one margin inside the
    /// near baseline.
    pub start_z: Option<f32>,
    /// Whether the ball animation runs.
    pub enabled: bool,
}

impl Default for LaunchOptions {
    fn default() -> Self {
        Self {
            angle_deg: 45.0,
            speed_multiplier: 1.0,
            rest_duration: 1.0,
            start_offset_x: 0.0,
            start_z: None,
            enabled: true,
        }
    }
}

/// Detection camera lens and pose.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LensOptions {
    /// Camera position in world space.
    pub position: Vec3,
    /// Fixed aim point.
    pub target: Vec3,
    /// Sensor width in millimeters.
    pub sensor_width: f32,
    /// Sensor height in millimeters.
    pub sensor_height: f32,
    /// Focal length in millimeters.
    pub focal_length: f32,
    /// Focus distance in meters.
    pub focus_distance: f32,
}

impl Default for LensOptions {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 6.0, 10.0),
            target: Vec3::ZERO,
            sensor_width: 36.0,
            sensor_height: 20.0,
            focal_length: 35.0,
            focus_distance: 12.0,
        }
    }
}

/// Baseline alarm timing and colors.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AlarmOptions {
    /// Total blink time in seconds.
    pub duration: f32,
    /// Length of one blink half-period in seconds.
    pub interval: f32,
    /// Line color outside of a blink.
    pub original_color: Vec3,
    /// Line color during the "on" half of a blink.
    pub flash_color: Vec3,
}

impl Default for AlarmOptions {
    fn default() -> Self {
        Self {
            duration: 1.0,
            interval: 0.15,
            original_color: Vec3::new(1.0, 1.0, 1.0),
            flash_color: Vec3::new(1.0, 0.0, 0.0),
        }
    }
}

/// Picture-in-picture preview.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PipOptions {
    /// Whether the preview is rendered.
    pub enabled: bool,
    /// Preview width; the height follows the lens aspect ratio.
    pub base_width: f32,
}

impl Default for PipOptions {
    fn default() -> Self {
        Self {
            enabled: false,
            base_width: 320.0,
        }
    }
}

/// Main view and overlays.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ViewOptions {
    /// Initial window width in pixels.
    pub width: u32,
    /// Initial window height in pixels.
    pub height: u32,
    /// Background color.
    pub background_color: Vec3,
    /// Whether the line detection overlay is shown.
    pub line_detection: bool,
    /// Whether the virtual lines overlay is shown.
    pub virtual_lines: bool,
    /// Whether the player figure is shown.
    pub player_visible: bool,
}

impl Default for ViewOptions {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            background_color: Vec3::new(0.125, 0.125, 0.125),
            line_detection: false,
            virtual_lines: false,
            player_visible: false,
        }
    }
}
