//! Ball trajectory engine.
//!
//! The ball is launched so that, at unit speed multiplier, its first
//! unobstructed ground contact lands exactly on the requested end point.
//! After that it bounces with fixed decay until the rebound is too small to
//! see, rests, and relaunches.

use courtsim_core::{Baseline, CourtDimensions, CourtsimError, LaunchOptions, Result};
use glam::Vec3;

/// Gravitational acceleration in m/s^2.
pub const GRAVITY: f32 = 9.8;

/// Fraction of vertical speed kept by a bounce.
pub const BOUNCE_DECAY: f32 = 0.7;

/// Fraction of horizontal speed kept by a bounce.
pub const HORIZONTAL_DAMPING: f32 = 0.8;

/// Rebounds lower than this (meters) end the bouncing.
pub const MIN_REBOUND_HEIGHT: f32 = 0.02;

/// Smallest rebound speed that keeps the ball bouncing.
#[must_use]
pub fn min_bounce_velocity() -> f32 {
    (2.0 * GRAVITY * MIN_REBOUND_HEIGHT).sqrt()
}

/// Launch configuration for one trajectory.
///
/// The launch angle must lie strictly between 0 and 90 degrees; outside that
/// interval the range equation has no solution and the solved velocity is
/// meaningless. Use [`LaunchParams::validate`] where the value is not already
/// range-limited.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LaunchParams {
    /// Launch point.
    pub start_pos: Vec3,
    /// Requested first-bounce point.
    pub end_pos: Vec3,
    /// Launch angle above the horizontal, in degrees.
    pub launch_angle_deg: f32,
    /// Multiplier on the solved launch speed.
    pub speed_multiplier: f32,
    /// Seconds spent at rest before relaunching.
    pub rest_duration: f32,
}

impl LaunchParams {
    /// Creates launch parameters with a 45 degree launch at unit speed.
    pub fn new(start_pos: Vec3, end_pos: Vec3) -> Self {
        Self {
            start_pos,
            end_pos,
            launch_angle_deg: 45.0,
            speed_multiplier: 1.0,
            rest_duration: 1.0,
        }
    }

    /// Builds launch parameters from options for the given court.
    ///
    /// The ball starts on the court surface, one margin inside the near
    /// baseline unless a start position is configured, and travels the
    /// standard baseline-to-baseline distance.
    pub fn from_options(options: &LaunchOptions, court: &CourtDimensions) -> Self {
        let y = court.court_surface_y();
        let start_z = options
            .start_z
            .unwrap_or(court.half_length() - court.margin);
        let mut params = Self::new(
            Vec3::new(options.start_offset_x, y, start_z),
            Vec3::new(-options.start_offset_x, y, start_z - court.travel_distance()),
        );
        params.launch_angle_deg = options.angle_deg;
        params.speed_multiplier = options.speed_multiplier;
        params.rest_duration = options.rest_duration;
        params
    }

    /// Checks the launch angle precondition.
    pub fn validate(&self) -> Result<()> {
        if self.launch_angle_deg > 0.0 && self.launch_angle_deg < 90.0 {
            Ok(())
        } else {
            Err(CourtsimError::InvalidLaunchAngle(self.launch_angle_deg))
        }
    }

    /// Sets the lateral offset. The landing point mirrors it across `x = 0`.
    pub fn set_start_offset_x(&mut self, x: f32) {
        self.start_pos.x = x;
        self.end_pos.x = -x;
    }

    /// Moves the launch point along `z`, keeping the travel distance.
    pub fn set_start_z(&mut self, z: f32, travel_distance: f32) {
        self.start_pos.z = z;
        self.end_pos.z = z - travel_distance;
    }

    /// Horizontal distance along `z` between launch and landing.
    #[must_use]
    pub fn range(&self) -> f32 {
        (self.end_pos.z - self.start_pos.z).abs()
    }

    /// Launch speed from the range equation, scaled by the speed multiplier.
    #[must_use]
    pub fn launch_speed(&self) -> f32 {
        let angle = self.launch_angle_deg.to_radians();
        (GRAVITY * self.range() / (2.0 * angle).sin()).sqrt() * self.speed_multiplier
    }

    /// Solves the initial velocity.
    ///
    /// Vertical and longitudinal components come from the launch speed and
    /// angle; the lateral component covers `end.x - start.x` in the time the
    /// longitudinal component takes to cover the range.
    #[must_use]
    pub fn initial_velocity(&self) -> Vec3 {
        let angle = self.launch_angle_deg.to_radians();
        let v0 = self.launch_speed();
        let v_y = v0 * angle.sin();
        let v_z = v0 * angle.cos();

        let travel_time = self.range() / v_z;
        let v_x = if travel_time.is_finite() && travel_time > 0.0 {
            (self.end_pos.x - self.start_pos.x) / travel_time
        } else {
            0.0
        };

        let direction = if self.end_pos.z > self.start_pos.z { 1.0 } else { -1.0 };
        Vec3::new(v_x, v_y, direction * v_z)
    }

    /// Analytic first contact point for a launch from the court surface.
    ///
    /// With a speed multiplier of 1 this is `end_pos`; in general the ball
    /// covers `multiplier^2` of the way from start to end.
    #[must_use]
    pub fn predicted_landing(&self) -> Vec3 {
        let velocity = self.initial_velocity();
        let flight_time = 2.0 * velocity.y / GRAVITY;
        Vec3::new(
            self.start_pos.x + velocity.x * flight_time,
            self.start_pos.y,
            self.start_pos.z + velocity.z * flight_time,
        )
    }
}

/// Motion phase of the ball.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Airborne or bouncing.
    #[default]
    Flying,
    /// Stopped on the court, waiting to relaunch.
    Resting,
}

/// A ground contact reported by [`TrajectoryState::step`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Contact {
    /// Ball center at contact, clamped to the court surface.
    pub position: Vec3,
    /// Velocity right after the bounce was applied, before any rest transition.
    pub rebound_velocity: Vec3,
    /// Number of earlier contacts in this trajectory.
    pub bounce_index: u32,
}

/// What happened during one step.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepOutcome {
    /// Ground contact, if the ball reached the court this step.
    pub contact: Option<Contact>,
    /// Baseline the first bounce landed beyond.
    pub long_bounce: Option<Baseline>,
    /// The ball stopped bouncing this step.
    pub came_to_rest: bool,
    /// The rest period ended and the ball relaunched.
    pub relaunched: bool,
}

/// Kinematic state of the ball.
#[derive(Debug, Clone, PartialEq)]
pub struct TrajectoryState {
    params: LaunchParams,
    court: CourtDimensions,
    position: Vec3,
    velocity: Vec3,
    phase: Phase,
    elapsed_in_phase: f32,
    bounce_count: u32,
}

impl TrajectoryState {
    /// Creates a freshly launched trajectory.
    pub fn reset(params: LaunchParams, court: &CourtDimensions) -> Self {
        let surface_y = court.court_surface_y();
        let mut position = params.start_pos;
        position.y = position.y.max(surface_y);
        let velocity = params.initial_velocity();

        log::debug!(
            "ball launched from {position} at {:.1} deg, velocity {velocity}",
            params.launch_angle_deg
        );

        Self {
            params,
            court: *court,
            position,
            velocity,
            phase: Phase::Flying,
            elapsed_in_phase: 0.0,
            bounce_count: 0,
        }
    }

    /// Restarts the current trajectory from its launch point.
    pub fn relaunch(&mut self) {
        *self = Self::reset(self.params, &self.court);
    }

    /// Replaces the launch parameters and relaunches.
    pub fn set_params(&mut self, params: LaunchParams) {
        *self = Self::reset(params, &self.court);
    }

    pub fn params(&self) -> &LaunchParams {
        &self.params
    }

    pub fn court(&self) -> &CourtDimensions {
        &self.court
    }

    /// Current ball center.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Seconds spent resting so far.
    pub fn elapsed_in_phase(&self) -> f32 {
        self.elapsed_in_phase
    }

    pub fn bounce_count(&self) -> u32 {
        self.bounce_count
    }

    /// Advances the ball by `dt` seconds.
    ///
    /// Non-positive or non-finite `dt` leaves the state untouched.
    pub fn step(&mut self, dt: f32) -> StepOutcome {
        let mut outcome = StepOutcome::default();
        if !(dt.is_finite() && dt > 0.0) {
            return outcome;
        }

        if self.phase == Phase::Resting {
            self.elapsed_in_phase += dt;
            if self.elapsed_in_phase >= self.params.rest_duration {
                self.relaunch();
                outcome.relaunched = true;
            }
            return outcome;
        }

        // Semi-implicit Euler: velocity first, then position
        self.velocity.y -= GRAVITY * dt;
        self.position += self.velocity * dt;

        let surface_y = self.court.court_surface_y();
        if self.position.y <= surface_y {
            self.position.y = surface_y;

            // Only the first bounce can be judged long
            if self.bounce_count == 0 {
                outcome.long_bounce = self.court.long_baseline(self.position.z);
            }

            self.velocity.y *= -BOUNCE_DECAY;
            self.velocity.x *= HORIZONTAL_DAMPING;
            self.velocity.z *= HORIZONTAL_DAMPING;

            outcome.contact = Some(Contact {
                position: self.position,
                rebound_velocity: self.velocity,
                bounce_index: self.bounce_count,
            });
            self.bounce_count += 1;

            if self.velocity.y.abs() < min_bounce_velocity() {
                self.phase = Phase::Resting;
                self.elapsed_in_phase = 0.0;
                self.velocity = Vec3::ZERO;
                outcome.came_to_rest = true;
                log::debug!(
                    "ball at rest at {} after {} bounces",
                    self.position,
                    self.bounce_count
                );
            }
        }

        outcome
    }

    /// Value-style form of [`step`](Self::step).
    #[must_use]
    pub fn stepped(mut self, dt: f32) -> (Self, StepOutcome) {
        let outcome = self.step(dt);
        (self, outcome)
    }
}
