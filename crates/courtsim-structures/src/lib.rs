//! Simulated structures for courtsim.
//!
//! - [`TrajectoryState`] - the bouncing ball and its launch solve
//! - [`BaselineAlarm`] - the blinking baseline after a long first bounce
//! - [`LineDetectionOverlay`] and [`VirtualLines`] - illustrative overlays

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
// Accessors returning Copy values don't need must_use
#![allow(clippy::must_use_candidate)]

pub mod alarm;
pub mod overlays;
pub mod trajectory;

pub use alarm::{blink_on, blink_state, AlarmUpdate, BaselineAlarm};
pub use overlays::{DashedLine, LineDetectionOverlay, VirtualLines};
pub use trajectory::{
    min_bounce_velocity, Contact, LaunchParams, Phase, StepOutcome, TrajectoryState, GRAVITY,
};
