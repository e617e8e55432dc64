//! Court dimensions and line layout.
//!
//! Coordinates follow the scene convention: `y` is up, the net runs along
//! `x` at `z = 0`, the near baseline sits at `z = +length / 2` and the far
//! baseline at `z = -length / 2`.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Default line color (white).
pub const LINE_COLOR: Vec3 = Vec3::new(1.0, 1.0, 1.0);

/// Distance of the player figure in front of the near baseline, in meters.
const PLAYER_SETBACK: f32 = 0.5;

/// Physical court dimensions in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CourtDimensions {
    /// Court width along `x`.
    pub width: f32,
    /// Court length along `z`.
    pub length: f32,
    /// Height of the painted lines above the ground plane.
    pub line_height: f32,
    /// Ball radius.
    pub ball_radius: f32,
    /// Distance between a baseline and the default launch/landing points.
    pub margin: f32,
    /// Distance of the non-volley (kitchen) lines from the net.
    pub kitchen_distance: f32,
    /// Net height at the center.
    pub net_height: f32,
}

impl Default for CourtDimensions {
    fn default() -> Self {
        Self {
            width: 6.1,
            length: 13.41,
            line_height: 0.01,
            ball_radius: 0.04,
            margin: 1.0,
            kitchen_distance: 2.134,
            net_height: 0.914,
        }
    }
}

impl CourtDimensions {
    /// Height of the ball center when resting on the court.
    #[must_use]
    pub fn court_surface_y(&self) -> f32 {
        self.ball_radius + self.line_height
    }

    #[must_use]
    pub fn half_length(&self) -> f32 {
        self.length * 0.5
    }

    #[must_use]
    pub fn half_width(&self) -> f32 {
        self.width * 0.5
    }

    /// Longitudinal distance covered by the default baseline-to-baseline shot.
    #[must_use]
    pub fn travel_distance(&self) -> f32 {
        self.length - 2.0 * self.margin
    }

    /// Returns true when `z` lies within the baselines (inclusive).
    #[must_use]
    pub fn is_in_bounds_z(&self, z: f32) -> bool {
        z.abs() <= self.half_length()
    }

    /// Returns the baseline a contact at `z` is long on, if any.
    #[must_use]
    pub fn long_baseline(&self, z: f32) -> Option<Baseline> {
        if self.is_in_bounds_z(z) {
            None
        } else {
            Some(Baseline::for_z(z))
        }
    }

    /// Where the player figure stands: on the ground, centered, just inside
    /// the near baseline.
    #[must_use]
    pub fn player_position(&self) -> Vec3 {
        Vec3::new(0.0, 0.0, self.half_length() - PLAYER_SETBACK)
    }

    /// Court corners on the ground plane, counter-clockwise from the far left.
    #[must_use]
    pub fn corners(&self) -> [Vec3; 4] {
        let (hw, hl) = (self.half_width(), self.half_length());
        [
            Vec3::new(-hw, 0.0, -hl),
            Vec3::new(hw, 0.0, -hl),
            Vec3::new(hw, 0.0, hl),
            Vec3::new(-hw, 0.0, hl),
        ]
    }
}

/// One of the two baselines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Baseline {
    /// Baseline at `z = +length / 2`, nearest the default viewer.
    Near,
    /// Baseline at `z = -length / 2`.
    Far,
}

impl Baseline {
    /// Baseline on the same side of the net as `z`.
    #[must_use]
    pub fn for_z(z: f32) -> Self {
        if z > 0.0 {
            Baseline::Near
        } else {
            Baseline::Far
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Baseline::Near => "near baseline",
            Baseline::Far => "far baseline",
        }
    }

    #[must_use]
    pub fn line_kind(self) -> CourtLineKind {
        match self {
            Baseline::Near => CourtLineKind::NearBaseline,
            Baseline::Far => CourtLineKind::FarBaseline,
        }
    }
}

/// Identifies a painted line on the court.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourtLineKind {
    FarBaseline,
    NearBaseline,
    LeftSideline,
    RightSideline,
    FarKitchen,
    NearKitchen,
    FarCenterline,
    NearCenterline,
}

/// A painted line drawn as several parallel strokes.
#[derive(Debug, Clone)]
pub struct CourtLine {
    kind: CourtLineKind,
    start: Vec3,
    end: Vec3,
    color: Vec3,
    strokes: u32,
    separation: f32,
}

impl CourtLine {
    /// Creates a line with the default three strokes 2 cm apart.
    pub fn new(kind: CourtLineKind, start: Vec3, end: Vec3) -> Self {
        Self {
            kind,
            start,
            end,
            color: LINE_COLOR,
            strokes: 3,
            separation: 0.02,
        }
    }

    pub fn kind(&self) -> CourtLineKind {
        self.kind
    }

    pub fn color(&self) -> Vec3 {
        self.color
    }

    /// Sets the color of every stroke of this line.
    pub fn set_color(&mut self, color: Vec3) {
        self.color = color;
    }

    pub fn endpoints(&self) -> (Vec3, Vec3) {
        (self.start, self.end)
    }

    /// Returns the stroke segments, offset across the line direction.
    ///
    /// Lines running along `x` are thickened along `z` and vice versa.
    pub fn segments(&self) -> Vec<[Vec3; 2]> {
        let runs_along_x = (self.start.z - self.end.z).abs() < 0.01;
        let across = if runs_along_x { Vec3::Z } else { Vec3::X };
        let center = (self.strokes.saturating_sub(1)) as f32 * 0.5;

        (0..self.strokes)
            .map(|i| {
                let offset = across * ((i as f32 - center) * self.separation);
                [self.start + offset, self.end + offset]
            })
            .collect()
    }
}

/// Every painted line of the court.
#[derive(Debug, Clone)]
pub struct CourtLayout {
    dimensions: CourtDimensions,
    lines: Vec<CourtLine>,
}

impl CourtLayout {
    /// Builds the standard pickleball line layout for the given dimensions.
    pub fn new(dimensions: CourtDimensions) -> Self {
        let (hw, hl) = (dimensions.half_width(), dimensions.half_length());
        let h = dimensions.line_height;
        let kd = dimensions.kitchen_distance;
        let p = Vec3::new;

        let lines = vec![
            CourtLine::new(CourtLineKind::FarBaseline, p(-hw, h, -hl), p(hw, h, -hl)),
            CourtLine::new(CourtLineKind::NearBaseline, p(-hw, h, hl), p(hw, h, hl)),
            CourtLine::new(CourtLineKind::LeftSideline, p(-hw, h, -hl), p(-hw, h, hl)),
            CourtLine::new(CourtLineKind::RightSideline, p(hw, h, -hl), p(hw, h, hl)),
            CourtLine::new(CourtLineKind::FarKitchen, p(-hw, h, -kd), p(hw, h, -kd)),
            CourtLine::new(CourtLineKind::NearKitchen, p(-hw, h, kd), p(hw, h, kd)),
            CourtLine::new(CourtLineKind::FarCenterline, p(0.0, h, -hl), p(0.0, h, -kd)),
            CourtLine::new(CourtLineKind::NearCenterline, p(0.0, h, kd), p(0.0, h, hl)),
        ];

        Self { dimensions, lines }
    }

    pub fn dimensions(&self) -> &CourtDimensions {
        &self.dimensions
    }

    pub fn lines(&self) -> &[CourtLine] {
        &self.lines
    }

    pub fn line(&self, kind: CourtLineKind) -> Option<&CourtLine> {
        self.lines.iter().find(|l| l.kind == kind)
    }

    pub fn line_mut(&mut self, kind: CourtLineKind) -> Option<&mut CourtLine> {
        self.lines.iter_mut().find(|l| l.kind == kind)
    }

    /// Sets the color of a baseline. Returns false if the line is missing.
    pub fn set_baseline_color(&mut self, baseline: Baseline, color: Vec3) -> bool {
        match self.line_mut(baseline.line_kind()) {
            Some(line) => {
                line.set_color(color);
                true
            }
            None => false,
        }
    }
}

impl Default for CourtLayout {
    fn default() -> Self {
        Self::new(CourtDimensions::default())
    }
}
