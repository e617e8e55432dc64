//! Wireframe helper visualizing the detection camera's frustum.

use glam::Vec3;

use crate::lens::{LensConfig, Projection};

/// Line geometry outlining a camera frustum.
///
/// Rebuilt with [`FrustumHelper::update`] after any lens or pose change so
/// the drawn frustum always matches the projection.
#[derive(Debug, Clone, Default)]
pub struct FrustumHelper {
    nodes: Vec<Vec3>,
    edges: Vec<[u32; 2]>,
    target: Vec3,
}

impl FrustumHelper {
    /// Builds the helper for a lens configuration and its projection.
    #[must_use]
    pub fn new(config: &LensConfig, projection: &Projection) -> Self {
        let mut helper = Self::default();
        helper.update(config, projection);
        helper
    }

    /// Regenerates the wireframe.
    pub fn update(&mut self, config: &LensConfig, projection: &Projection) {
        let root = config.position;
        let look = (config.target - root).normalize_or(Vec3::NEG_Z);
        let right = look.cross(Vec3::Y).normalize_or(Vec3::X);
        let up = right.cross(look).normalize();

        let tan_half = (projection.fov_vertical_degrees.to_radians() / 2.0).tan();
        let plane_corners = |distance: f32| {
            let center = root + look * distance;
            let half_up = up * (distance * tan_half);
            let half_right = right * (distance * tan_half * projection.aspect_ratio);
            [
                center + half_up - half_right,
                center + half_up + half_right,
                center - half_up - half_right,
                center - half_up + half_right,
            ]
        };

        let near = plane_corners(projection.near);
        let far = plane_corners(projection.far);

        // Orientation triangle above the near plane
        let near_center = root + look * projection.near;
        let near_up = up * (projection.near * tan_half);
        let near_right = right * (projection.near * tan_half * projection.aspect_ratio);
        let tri_left = near_center + near_up * 1.2 - near_right * 0.7;
        let tri_right = near_center + near_up * 1.2 + near_right * 0.7;
        let tri_top = near_center + near_up * 2.0;

        // Nodes: 0=root, 1-4=near, 5-8=far, 9-11=triangle
        self.nodes = std::iter::once(root)
            .chain(near)
            .chain(far)
            .chain([tri_left, tri_right, tri_top])
            .collect();

        self.edges = vec![
            // From root to far corners
            [0, 5],
            [0, 6],
            [0, 7],
            [0, 8],
            // Near rectangle
            [1, 2],
            [2, 4],
            [4, 3],
            [3, 1],
            // Far rectangle
            [5, 6],
            [6, 8],
            [8, 7],
            [7, 5],
            // Orientation triangle
            [9, 10],
            [10, 11],
            [11, 9],
        ];

        self.target = config.target;
    }

    pub fn nodes(&self) -> &[Vec3] {
        &self.nodes
    }

    pub fn edges(&self) -> &[[u32; 2]] {
        &self.edges
    }

    /// Aim point marker position.
    pub fn target(&self) -> Vec3 {
        self.target
    }

    /// Corners of the far plane.
    pub fn far_corners(&self) -> &[Vec3] {
        self.nodes.get(5..9).unwrap_or(&[])
    }
}
