//! Interface to the rendering layer.
//!
//! The host never draws anything itself. Each tick it hands a [`Frame`] to a
//! [`SceneRenderer`], and pushes [`HostEvent`]s for changes a renderer or UI
//! may want to react to.

use courtsim_core::{Baseline, CourtLayout};
use courtsim_render::{Camera, CameraUniforms, DetectionCamera, Projection};
use courtsim_structures::{LineDetectionOverlay, VirtualLines};
use glam::Vec3;

/// Push notification from the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    /// A first bounce landed long and an alarm started on this baseline.
    BaselineViolated(Baseline),
    /// The alarm on this baseline finished and its color was restored.
    AlarmCleared(Baseline),
    /// The detection camera's projection changed.
    ProjectionChanged(Projection),
    /// The detection camera moved.
    DetectionCameraMoved(Vec3),
    /// The preview's pixel size changed.
    PipResized { width: u32, height: u32 },
}

/// Everything a renderer needs to draw one frame.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    /// Host clock in seconds.
    pub time: f64,
    /// Ball center, or `None` while the ball is hidden.
    pub ball: Option<Vec3>,
    /// Where the player figure stands, or `None` while it is hidden.
    pub player: Option<Vec3>,
    /// Court lines with their current colors.
    pub court: &'a CourtLayout,
    /// Main view camera.
    pub camera: &'a Camera,
    /// Detection camera, its frustum helper and preview size.
    pub detection: &'a DetectionCamera,
    /// Line detection overlay, when enabled.
    pub line_detection: Option<&'a LineDetectionOverlay>,
    /// Virtual lines overlay, when enabled.
    pub virtual_lines: Option<&'a VirtualLines>,
}

/// A rendering backend driven by the host.
pub trait SceneRenderer {
    /// Draws the main view.
    fn render_primary(&mut self, frame: &Frame<'_>, view: &CameraUniforms);

    /// Draws the picture-in-picture view through the detection camera.
    ///
    /// Called after [`render_primary`](Self::render_primary) in the same tick,
    /// and only while the preview is enabled.
    fn render_secondary(&mut self, frame: &Frame<'_>, view: &CameraUniforms, size: (u32, u32));

    /// Receives host notifications. Ignored by default.
    fn notify(&mut self, _event: &HostEvent) {}
}
