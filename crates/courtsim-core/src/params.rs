//! Typed parameter-change events.
//!
//! Every adjustable value arrives as a single [`ParameterChange`] regardless
//! of which control produced it. Values are clamped to the parameter's range
//! before they reach the simulation.

use std::fmt;
use std::str::FromStr;

use crate::error::{CourtsimError, Result};

/// Inclusive range a parameter value is clamped into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }

    /// Clamps `value` into the range. Returns `None` for NaN or infinity.
    #[must_use]
    pub fn clamp(&self, value: f32) -> Option<f32> {
        if value.is_finite() {
            Some(value.max(self.min).min(self.max))
        } else {
            None
        }
    }

    #[must_use]
    pub fn contains(&self, value: f32) -> bool {
        value >= self.min && value <= self.max
    }
}

/// A user-adjustable simulation parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Parameter {
    /// Launch angle in degrees.
    LaunchAngle,
    /// Ball speed as a percentage of the solved launch speed.
    BallSpeedPercent,
    /// Lateral start offset in meters; the landing point mirrors it.
    StartOffsetX,
    /// Longitudinal start position in meters.
    StartOffsetZ,
    /// Detection camera position, x.
    CameraPosX,
    /// Detection camera position, y.
    CameraPosY,
    /// Detection camera position, z.
    CameraPosZ,
    /// Sensor width in millimeters.
    SensorWidth,
    /// Sensor height in millimeters.
    SensorHeight,
    /// Focal length in millimeters.
    FocalLength,
    /// Focus distance in meters.
    FocusDistance,
}

impl Parameter {
    pub const ALL: [Parameter; 11] = [
        Parameter::LaunchAngle,
        Parameter::BallSpeedPercent,
        Parameter::StartOffsetX,
        Parameter::StartOffsetZ,
        Parameter::CameraPosX,
        Parameter::CameraPosY,
        Parameter::CameraPosZ,
        Parameter::SensorWidth,
        Parameter::SensorHeight,
        Parameter::FocalLength,
        Parameter::FocusDistance,
    ];

    /// Returns the parameter's identifier.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Parameter::LaunchAngle => "launch_angle",
            Parameter::BallSpeedPercent => "ball_speed",
            Parameter::StartOffsetX => "start_pos_x",
            Parameter::StartOffsetZ => "start_pos_z",
            Parameter::CameraPosX => "cam_pos_x",
            Parameter::CameraPosY => "cam_pos_y",
            Parameter::CameraPosZ => "cam_pos_z",
            Parameter::SensorWidth => "sensor_width",
            Parameter::SensorHeight => "sensor_height",
            Parameter::FocalLength => "focal_length",
            Parameter::FocusDistance => "focus_distance",
        }
    }

    /// Returns the range the control for this parameter spans.
    #[must_use]
    pub fn range(self) -> ParamRange {
        match self {
            Parameter::LaunchAngle => ParamRange::new(5.0, 85.0),
            Parameter::BallSpeedPercent => ParamRange::new(50.0, 150.0),
            Parameter::StartOffsetX => ParamRange::new(-3.0, 3.0),
            Parameter::StartOffsetZ => ParamRange::new(2.0, 8.0),
            Parameter::CameraPosX | Parameter::CameraPosZ => ParamRange::new(-15.0, 15.0),
            Parameter::CameraPosY => ParamRange::new(0.5, 15.0),
            Parameter::SensorWidth | Parameter::SensorHeight => ParamRange::new(1.0, 100.0),
            Parameter::FocalLength => ParamRange::new(4.0, 300.0),
            Parameter::FocusDistance => ParamRange::new(0.5, 50.0),
        }
    }

    /// Returns true for parameters that belong to the detection camera.
    #[must_use]
    pub fn is_camera(self) -> bool {
        !matches!(
            self,
            Parameter::LaunchAngle
                | Parameter::BallSpeedPercent
                | Parameter::StartOffsetX
                | Parameter::StartOffsetZ
        )
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Parameter {
    type Err = CourtsimError;

    fn from_str(s: &str) -> Result<Self> {
        Parameter::ALL
            .into_iter()
            .find(|p| p.name() == s)
            .ok_or_else(|| CourtsimError::UnknownParameter(s.to_string()))
    }
}

/// A "configuration value changed" notification with an already-clamped value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParameterChange {
    parameter: Parameter,
    value: f32,
}

impl ParameterChange {
    /// Creates a change event, clamping `value` into the parameter's range.
    ///
    /// # Errors
    ///
    /// Returns [`CourtsimError::NonFiniteValue`] if `value` is NaN or infinite.
    pub fn new(parameter: Parameter, value: f32) -> Result<Self> {
        let value = parameter
            .range()
            .clamp(value)
            .ok_or_else(|| CourtsimError::NonFiniteValue {
                name: parameter.name().to_string(),
                value,
            })?;
        Ok(Self { parameter, value })
    }

    /// Parses a parameter name and a raw textual value, as a form field
    /// would deliver them.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown names and for values that do not parse
    /// to a finite number.
    pub fn parse(name: &str, raw: &str) -> Result<Self> {
        let parameter: Parameter = name.parse()?;
        let value = raw.trim().parse::<f32>().unwrap_or(f32::NAN);
        Self::new(parameter, value)
    }

    pub fn parameter(&self) -> Parameter {
        self.parameter
    }

    pub fn value(&self) -> f32 {
        self.value
    }
}
