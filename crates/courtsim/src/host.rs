//! The per-frame driver owning all simulation state.

use courtsim_core::{CourtLayout, Options, Parameter, ParameterChange, Result};
use courtsim_render::{Camera, CameraUniforms, DetectionCamera, LensParameter, ViewPreset};
use courtsim_structures::{
    AlarmUpdate, BaselineAlarm, LaunchParams, LineDetectionOverlay, TrajectoryState, VirtualLines,
};

use crate::scene::{Frame, HostEvent, SceneRenderer};

/// Owns the ball, the alarm, both cameras and the overlays, and advances them
/// once per rendered frame.
///
/// Within a tick the ball is stepped first (possibly starting an alarm), then
/// the alarm blink is recomputed, then the main view is rendered, then the
/// preview if it is enabled.
pub struct Host {
    options: Options,
    court: CourtLayout,
    trajectory: TrajectoryState,
    ball_enabled: bool,
    player_visible: bool,
    alarm: BaselineAlarm,
    camera: Camera,
    detection: DetectionCamera,
    line_detection: Option<LineDetectionOverlay>,
    virtual_lines: Option<VirtualLines>,
    time: f64,
    pending: Vec<HostEvent>,
}

impl Host {
    /// Creates a host from validated options.
    pub fn new(options: Options) -> Result<Self> {
        options.validate()?;

        let court = CourtLayout::new(options.court);
        let params = LaunchParams::from_options(&options.launch, &options.court);
        let mut camera = Camera::default();
        camera.resize(options.view.width, options.view.height);

        let mut host = Self {
            court,
            trajectory: TrajectoryState::reset(params, &options.court),
            ball_enabled: options.launch.enabled,
            player_visible: options.view.player_visible,
            alarm: BaselineAlarm::new(&options.alarm),
            camera,
            detection: DetectionCamera::new(&options.lens, &options.pip),
            line_detection: None,
            virtual_lines: None,
            time: 0.0,
            pending: Vec::new(),
            options,
        };

        if host.options.view.line_detection {
            host.refresh_line_detection();
        }
        if host.options.view.virtual_lines {
            host.virtual_lines = Some(VirtualLines::for_court(&host.options.court));
        }

        log::info!("court host ready");
        Ok(host)
    }

    /// Advances the simulation by `dt` seconds and renders the frame.
    ///
    /// Negative or non-finite `dt` is treated as zero.
    pub fn tick<R: SceneRenderer>(&mut self, dt: f32, renderer: &mut R) {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        self.time += f64::from(dt);

        if self.ball_enabled {
            let outcome = self.trajectory.step(dt);
            if let Some(baseline) = outcome.long_bounce {
                if self.alarm.trigger(baseline, self.time) {
                    self.pending.push(HostEvent::BaselineViolated(baseline));
                }
            }
        }

        match self.alarm.update(self.time) {
            AlarmUpdate::Idle => {}
            AlarmUpdate::Blink { target, color, .. } => {
                self.court.set_baseline_color(target, color);
            }
            AlarmUpdate::Cleared { target, color } => {
                self.court.set_baseline_color(target, color);
                self.pending.push(HostEvent::AlarmCleared(target));
            }
        }

        for event in self.pending.drain(..) {
            renderer.notify(&event);
        }

        let frame = self.frame();
        renderer.render_primary(&frame, &CameraUniforms::from_camera(&self.camera));

        if self.detection.pip().is_enabled() {
            renderer.render_secondary(
                &frame,
                &self.detection.uniforms(),
                self.detection.pip().pixel_size(),
            );
        }
    }

    /// Returns a view of the current scene state.
    pub fn frame(&self) -> Frame<'_> {
        Frame {
            time: self.time,
            ball: self.ball_enabled.then(|| self.trajectory.position()),
            player: self
                .player_visible
                .then(|| self.options.court.player_position()),
            court: &self.court,
            camera: &self.camera,
            detection: &self.detection,
            line_detection: self.line_detection.as_ref(),
            virtual_lines: self.virtual_lines.as_ref(),
        }
    }

    /// Applies a parameter change.
    pub fn apply(&mut self, change: ParameterChange) {
        let value = change.value();
        let mut params = *self.trajectory.params();

        match change.parameter() {
            Parameter::LaunchAngle => params.launch_angle_deg = value,
            Parameter::BallSpeedPercent => params.speed_multiplier = value / 100.0,
            Parameter::StartOffsetX => params.set_start_offset_x(value),
            Parameter::StartOffsetZ => {
                params.set_start_z(value, self.options.court.travel_distance());
            }
            camera => {
                if let Some(lens_parameter) = LensParameter::from_parameter(camera) {
                    self.apply_lens(lens_parameter, value);
                }
                return;
            }
        }

        log::debug!("{} set to {value}", change.parameter());
        self.trajectory.set_params(params);
    }

    /// Parses and applies a parameter change given as name and text.
    pub fn set_parameter(&mut self, name: &str, raw: &str) -> Result<()> {
        let change = ParameterChange::parse(name, raw).map_err(|e| {
            log::warn!("rejected parameter change {name}={raw}: {e}");
            e
        })?;
        self.apply(change);
        Ok(())
    }

    fn apply_lens(&mut self, parameter: LensParameter, value: f32) {
        let size_before = self.detection.pip().pixel_size();
        let projection = self.detection.apply(parameter, value);

        if parameter.is_pose() {
            self.pending
                .push(HostEvent::DetectionCameraMoved(self.detection.position()));
        } else {
            self.pending.push(HostEvent::ProjectionChanged(projection));
        }

        let (width, height) = self.detection.pip().pixel_size();
        if (width, height) != size_before {
            self.pending.push(HostEvent::PipResized { width, height });
        }

        if self.line_detection.is_some() {
            self.refresh_line_detection();
        }
    }

    fn refresh_line_detection(&mut self) {
        self.line_detection = Some(LineDetectionOverlay::compute(
            self.detection.position(),
            self.trajectory.position(),
            &self.options.court,
        ));
    }

    /// Shows or hides the ball. Showing it relaunches the trajectory.
    pub fn set_ball_enabled(&mut self, enabled: bool) {
        self.ball_enabled = enabled;
        if enabled {
            self.trajectory.relaunch();
        }
    }

    pub fn toggle_ball(&mut self) -> bool {
        self.set_ball_enabled(!self.ball_enabled);
        self.ball_enabled
    }

    pub fn set_player_visible(&mut self, visible: bool) {
        self.player_visible = visible;
    }

    pub fn toggle_player(&mut self) -> bool {
        self.player_visible = !self.player_visible;
        self.player_visible
    }

    /// Shows or hides the detection camera preview.
    pub fn set_pip_enabled(&mut self, enabled: bool) {
        if enabled {
            self.detection.sync();
        }
        self.detection.pip_mut().set_enabled(enabled);
    }

    pub fn toggle_pip(&mut self) -> bool {
        let enabled = !self.detection.pip().is_enabled();
        self.set_pip_enabled(enabled);
        enabled
    }

    pub fn set_line_detection_enabled(&mut self, enabled: bool) {
        if enabled {
            self.refresh_line_detection();
        } else {
            self.line_detection = None;
        }
    }

    pub fn toggle_line_detection(&mut self) -> bool {
        let enabled = self.line_detection.is_none();
        self.set_line_detection_enabled(enabled);
        enabled
    }

    pub fn set_virtual_lines_enabled(&mut self, enabled: bool) {
        self.virtual_lines = enabled.then(|| VirtualLines::for_court(&self.options.court));
    }

    pub fn toggle_virtual_lines(&mut self) -> bool {
        let enabled = self.virtual_lines.is_none();
        self.set_virtual_lines_enabled(enabled);
        enabled
    }

    /// Moves the main camera to a preset viewpoint.
    pub fn apply_view_preset(&mut self, preset: ViewPreset) {
        self.camera.apply_preset(preset);
    }

    /// Drags the main camera around the court center, in radians.
    pub fn orbit_camera(&mut self, yaw: f32, pitch: f32) {
        if yaw.is_finite() && pitch.is_finite() {
            self.camera.orbit(yaw, pitch);
        } else {
            log::warn!("ignoring non-finite orbit ({yaw}, {pitch})");
        }
    }

    /// Moves the main camera toward (positive) or away from the court center.
    pub fn zoom_camera(&mut self, delta: f32) {
        if delta.is_finite() {
            self.camera.zoom(delta);
        } else {
            log::warn!("ignoring non-finite zoom {delta}");
        }
    }

    /// Updates the main camera for a new window size. The preview keeps the
    /// lens aspect ratio.
    pub fn resize(&mut self, width: u32, height: u32) {
        self.camera.resize(width, height);
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    pub fn trajectory(&self) -> &TrajectoryState {
        &self.trajectory
    }

    pub fn alarm(&self) -> &BaselineAlarm {
        &self.alarm
    }

    pub fn court(&self) -> &CourtLayout {
        &self.court
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn detection(&self) -> &DetectionCamera {
        &self.detection
    }

    pub fn is_ball_enabled(&self) -> bool {
        self.ball_enabled
    }

    pub fn is_player_visible(&self) -> bool {
        self.player_visible
    }

    /// Host clock in seconds.
    pub fn time(&self) -> f64 {
        self.time
    }
}
