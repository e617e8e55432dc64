//! Illustrative overlays drawn on top of the court.
//!
//! Neither overlay looks at image data: line detection is a fixed ray from
//! the detection camera to the ball, and the virtual lines are derived from
//! the court dimensions alone.

use courtsim_core::CourtDimensions;
use glam::Vec3;

const GREEN: Vec3 = Vec3::new(0.0, 1.0, 0.0);
const RED: Vec3 = Vec3::new(1.0, 0.0, 0.0);
const YELLOW: Vec3 = Vec3::new(1.0, 1.0, 0.0);
const CYAN: Vec3 = Vec3::new(0.0, 1.0, 1.0);

/// Offset of the in/out indicator from the ball.
const INDICATOR_OFFSET: Vec3 = Vec3::new(0.2, 0.2, 0.0);

/// Ray, marker and in/out indicator for the line detection overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineDetectionOverlay {
    /// Segment from the detection camera to the ball.
    pub ray: [Vec3; 2],
    /// Marker drawn at the ball.
    pub marker: Vec3,
    /// Position of the in/out indicator cube.
    pub indicator: Vec3,
    /// Whether the ball is between the baselines.
    pub in_bounds: bool,
}

impl LineDetectionOverlay {
    /// Builds the overlay for the current camera and ball positions.
    #[must_use]
    pub fn compute(camera_position: Vec3, ball_position: Vec3, court: &CourtDimensions) -> Self {
        Self {
            ray: [camera_position, ball_position],
            marker: ball_position,
            indicator: ball_position + INDICATOR_OFFSET,
            in_bounds: court.is_in_bounds_z(ball_position.z),
        }
    }

    pub fn ray_color(&self) -> Vec3 {
        GREEN
    }

    pub fn marker_color(&self) -> Vec3 {
        RED
    }

    pub fn indicator_color(&self) -> Vec3 {
        if self.in_bounds {
            GREEN
        } else {
            RED
        }
    }
}

/// A dashed line segment.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashedLine {
    pub start: Vec3,
    pub end: Vec3,
    pub color: Vec3,
    pub dash_size: f32,
    pub gap_size: f32,
}

impl DashedLine {
    fn new(start: Vec3, end: Vec3, color: Vec3) -> Self {
        Self {
            start,
            end,
            color,
            dash_size: 0.1,
            gap_size: 0.05,
        }
    }

    /// Splits the line into its visible dashes.
    #[must_use]
    pub fn dashes(&self) -> Vec<[Vec3; 2]> {
        let length = self.start.distance(self.end);
        let period = self.dash_size + self.gap_size;
        if length <= 0.0 || period <= 0.0 {
            return Vec::new();
        }

        let dir = (self.end - self.start) / length;
        let mut dashes = Vec::new();
        let mut t = 0.0;
        while t < length {
            let t_end = (t + self.dash_size).min(length);
            dashes.push([self.start + dir * t, self.start + dir * t_end]);
            t += period;
        }
        dashes
    }
}

/// Reference lines from the net center to the court corners.
#[derive(Debug, Clone, PartialEq)]
pub struct VirtualLines {
    /// Ground-level lines from the net center to each corner.
    pub corner_lines: [DashedLine; 4],
    /// Vertical line at the net center, up to net height.
    pub net_post: DashedLine,
    /// Markers at the bottom and top of the vertical line.
    pub markers: [Vec3; 2],
}

impl VirtualLines {
    #[must_use]
    pub fn for_court(court: &CourtDimensions) -> Self {
        let ground = Vec3::ZERO;
        let top = Vec3::new(0.0, court.net_height, 0.0);
        let corner_lines = court
            .corners()
            .map(|corner| DashedLine::new(ground, corner, YELLOW));

        Self {
            corner_lines,
            net_post: DashedLine::new(ground, top, CYAN),
            markers: [ground, top],
        }
    }

    pub fn marker_color(&self) -> Vec3 {
        CYAN
    }
}
