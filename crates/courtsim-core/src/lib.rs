//! Core types for courtsim.
//!
//! This crate provides the types shared by the simulation and rendering layers:
//! - [`CourtDimensions`] and [`CourtLayout`] for the court geometry and lines
//! - [`Options`] for configuration loaded from JSON
//! - [`ParameterChange`] for typed, clamped parameter updates
//! - [`CourtsimError`] for the few operations that can fail

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors returning Copy values don't need must_use
#![allow(clippy::must_use_candidate)]
// Stroke counts are tiny
#![allow(clippy::cast_precision_loss)]

pub mod court;
pub mod error;
pub mod options;
pub mod params;

pub use court::{Baseline, CourtDimensions, CourtLayout, CourtLine, CourtLineKind, LINE_COLOR};
pub use error::{CourtsimError, Result};
pub use options::{AlarmOptions, LaunchOptions, LensOptions, Options, PipOptions, ViewOptions};
pub use params::{ParamRange, Parameter, ParameterChange};

// Re-export glam types for convenience
pub use glam::{Mat4, Vec2, Vec3, Vec4};
