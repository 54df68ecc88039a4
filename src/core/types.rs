//! Core data types for the odometry simulator

use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use super::constants::*;

/// Robot pose in the workspace plane
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pose {
    pub x: f64,
    pub y: f64,
    /// Heading in degrees, kept in `[0, 360)`
    pub heading_deg: f64,
}

impl Pose {
    /// Build a pose, normalizing the heading into `[0, 360)`
    pub fn new(x: f64, y: f64, heading_deg: f64) -> Self {
        Self {
            x,
            y,
            heading_deg: normalize_heading_deg(heading_deg),
        }
    }

    pub fn position(&self) -> Point2<f64> {
        Point2::new(self.x, self.y)
    }

    pub fn heading_rad(&self) -> f64 {
        self.heading_deg.to_radians()
    }
}

impl Default for Pose {
    fn default() -> Self {
        Self::new(DEFAULT_ORIGIN_X, DEFAULT_ORIGIN_Y, DEFAULT_ORIGIN_HEADING_DEG)
    }
}

/// Rectangular operating area anchored at the origin.
///
/// A position is accepted only when it lies strictly inside on both axes;
/// the edges themselves are out of bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Workspace {
    pub width: f64,
    pub height: f64,
}

impl Workspace {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn contains(&self, point: &Point2<f64>) -> bool {
        0.0 < point.x && point.x < self.width && 0.0 < point.y && point.y < self.height
    }
}

impl Default for Workspace {
    fn default() -> Self {
        Self::new(DEFAULT_WORKSPACE_WIDTH, DEFAULT_WORKSPACE_HEIGHT)
    }
}

/// Wrap an angle in degrees into `[0, 360)`
pub fn normalize_heading_deg(deg: f64) -> f64 {
    let wrapped = deg.rem_euclid(360.0);
    // rem_euclid rounds tiny negative inputs up to exactly 360.0
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_normalization() {
        assert_eq!(normalize_heading_deg(0.0), 0.0);
        assert_eq!(normalize_heading_deg(360.0), 0.0);
        assert!((normalize_heading_deg(-90.0) - 270.0).abs() < 1e-12);
        assert!((normalize_heading_deg(725.0) - 5.0).abs() < 1e-9);

        let tiny = normalize_heading_deg(-1e-17);
        assert!((0.0..360.0).contains(&tiny));
    }

    #[test]
    fn test_workspace_excludes_edges() {
        let ws = Workspace::new(500.0, 500.0);
        assert!(ws.contains(&Point2::new(40.0, 450.0)));
        assert!(!ws.contains(&Point2::new(0.0, 450.0)));
        assert!(!ws.contains(&Point2::new(500.0, 10.0)));
        assert!(!ws.contains(&Point2::new(10.0, 500.0)));
        assert!(!ws.contains(&Point2::new(-1.0, -1.0)));
    }

    #[test]
    fn test_default_pose() {
        let pose = Pose::default();
        assert_eq!(pose.position(), Point2::new(40.0, 450.0));
        assert_eq!(pose.heading_deg, 0.0);
    }
}
