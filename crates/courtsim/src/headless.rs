//! Headless renderer that records what the host asked it to draw.
//!
//! Useful for integration tests and for running the simulation without a
//! window.

use courtsim_core::{Baseline, CourtLineKind};
use courtsim_render::CameraUniforms;
use glam::Vec3;

use crate::scene::{Frame, HostEvent, SceneRenderer};

/// One recorded render call.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    /// Main view at host time `time`.
    Primary {
        time: f64,
        ball: Option<Vec3>,
        near_baseline: Vec3,
        far_baseline: Vec3,
    },
    /// Preview at host time `time` with its pixel size.
    Secondary { time: f64, size: (u32, u32) },
}

/// A [`SceneRenderer`] that keeps a log instead of drawing.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    calls: Vec<RenderCall>,
    events: Vec<HostEvent>,
    last_preview_view: Option<CameraUniforms>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    pub fn events(&self) -> &[HostEvent] {
        &self.events
    }

    /// Uniforms passed with the most recent preview render.
    pub fn last_preview_view(&self) -> Option<&CameraUniforms> {
        self.last_preview_view.as_ref()
    }

    /// Baselines of every alarm started so far.
    pub fn violations(&self) -> Vec<Baseline> {
        self.events
            .iter()
            .filter_map(|e| match e {
                HostEvent::BaselineViolated(b) => Some(*b),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.calls.clear();
        self.events.clear();
        self.last_preview_view = None;
    }
}

impl SceneRenderer for RecordingRenderer {
    fn render_primary(&mut self, frame: &Frame<'_>, _view: &CameraUniforms) {
        let color = |kind| frame.court.line(kind).map_or(Vec3::ZERO, |l| l.color());
        self.calls.push(RenderCall::Primary {
            time: frame.time,
            ball: frame.ball,
            near_baseline: color(CourtLineKind::NearBaseline),
            far_baseline: color(CourtLineKind::FarBaseline),
        });
    }

    fn render_secondary(&mut self, frame: &Frame<'_>, view: &CameraUniforms, size: (u32, u32)) {
        self.calls.push(RenderCall::Secondary {
            time: frame.time,
            size,
        });
        self.last_preview_view = Some(*view);
    }

    fn notify(&mut self, event: &HostEvent) {
        log::trace!("host event: {event:?}");
        self.events.push(*event);
    }
}
