//! Error types for courtsim.

use thiserror::Error;

/// The main error type for courtsim operations.
///
/// The per-frame simulation never produces these; they surface only where
/// outside input enters the system (parameter names, option files).
#[derive(Error, Debug)]
pub enum CourtsimError {
    /// A parameter name did not match any known parameter.
    #[error("unknown parameter '{0}'")]
    UnknownParameter(String),

    /// A known parameter was sent to a component that does not own it.
    #[error("parameter '{name}' is not a {component} setting")]
    WrongComponent {
        name: String,
        component: &'static str,
    },

    /// A parameter value was NaN or infinite.
    #[error("parameter '{name}' received a non-finite value ({value})")]
    NonFiniteValue { name: String, value: f32 },

    /// A launch angle outside the open interval (0, 90) degrees.
    #[error("launch angle {0} deg is outside (0, 90)")]
    InvalidLaunchAngle(f32),

    /// Options failed validation.
    #[error("invalid options: {0}")]
    InvalidOptions(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// A specialized Result type for courtsim operations.
pub type Result<T> = std::result::Result<T, CourtsimError>;
