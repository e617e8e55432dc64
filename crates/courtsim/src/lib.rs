//! courtsim: an interactive pickleball court simulation.
//!
//! A ball is launched across the court so that its first bounce lands on a
//! chosen point, then bounces down to rest and relaunches. A long first bounce
//! makes the baseline it crossed blink. A detection camera with a physical
//! lens model (sensor size, focal length, focus distance) can be previewed in
//! a picture-in-picture view.
//!
//! # Quick Start
//!
//! ```no_run
//! use courtsim::*;
//!
//! fn main() -> Result<()> {
//!     init();
//!
//!     let mut host = Host::new(Options::default())?;
//!     let mut renderer = RecordingRenderer::new();
//!
//!     host.set_parameter("launch_angle", "60")?;
//!     host.toggle_pip();
//!
//!     for _ in 0..600 {
//!         host.tick(1.0 / 60.0, &mut renderer);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - [`Host`] owns all state and runs one tick per frame
//! - [`TrajectoryState`] steps the ball and reports contacts and long bounces
//! - [`BaselineAlarm`] turns a long bounce into a timed blink
//! - [`DetectionCamera`] derives the preview projection from the lens
//! - [`SceneRenderer`] is implemented by whatever draws the result

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors returning Copy values don't need must_use
#![allow(clippy::must_use_candidate)]

mod headless;
mod host;
mod scene;

pub use headless::{RecordingRenderer, RenderCall};
pub use host::Host;
pub use scene::{Frame, HostEvent, SceneRenderer};

// Re-export core types
pub use courtsim_core::{
    Baseline, CourtDimensions, CourtLayout, CourtLineKind, CourtsimError, Options, Parameter,
    ParameterChange, Result, Vec3,
};

// Re-export camera types
pub use courtsim_render::{
    Camera, CameraUniforms, DetectionCamera, FrustumHelper, LensConfig, LensModel, LensParameter,
    PipViewport, Projection, ViewPreset,
};

// Re-export structures
pub use courtsim_structures::{
    AlarmUpdate, BaselineAlarm, LaunchParams, LineDetectionOverlay, Phase, StepOutcome,
    TrajectoryState, VirtualLines,
};

/// Initializes logging from the `RUST_LOG` environment variable.
///
/// Safe to call more than once; later calls are ignored.
pub fn init() {
    let _ = env_logger::try_init();
    log::info!("courtsim initialized");
}
