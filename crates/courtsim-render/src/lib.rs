//! Camera and lens model for courtsim.
//!
//! - [`LensModel`] derives a perspective [`Projection`] from sensor size,
//!   focal length and focus distance
//! - [`DetectionCamera`] keeps the [`FrustumHelper`] and the
//!   picture-in-picture [`PipViewport`] in step with the lens
//! - [`Camera`] is the orbiting main-view camera with [`ViewPreset`]s
//! - [`CameraUniforms`] packs either camera for upload to a GPU

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors returning Copy values don't need must_use
#![allow(clippy::must_use_candidate)]

pub mod camera;
pub mod detection;
pub mod frustum;
pub mod lens;
pub mod pip;
pub mod uniforms;

pub use camera::{Camera, ViewPreset};
pub use detection::DetectionCamera;
pub use frustum::FrustumHelper;
pub use lens::{
    clip_planes, vertical_fov_degrees, LensConfig, LensModel, LensParameter, Projection,
    MAX_FOV_DEGREES, MIN_FOV_DEGREES,
};
pub use pip::PipViewport;
pub use uniforms::CameraUniforms;
