//! Encoder-tick odometry engine
//!
//! Integrates left/right encoder pulse counts into a planar pose using
//! differential-drive forward kinematics. Every accepted move appends the
//! new position to the trail; moves that would leave the workspace are
//! rejected without touching any state.

use log::debug;
use nalgebra::{Point2, Vector2};
use serde::Serialize;
use thiserror::Error;

use crate::core::{normalize_heading_deg, Pose, Workspace, SLIP_FACTOR};
use crate::kinematics::geometry::WheelGeometry;
use crate::utils::config::{validate_placement, ConfigError, SimulatorConfig};

/// Outcome of a committed move
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MotionStep {
    pub left_ticks: i32,
    pub right_ticks: i32,
    pub slip: bool,
    /// Effective left wheel travel (cm)
    pub left_travel_cm: f64,
    /// Effective right wheel travel (cm), after slip attenuation
    pub right_travel_cm: f64,
    /// Centerline displacement `dc` (cm, signed)
    pub centerline_cm: f64,
    /// Heading increment `dtheta` (radians, counterclockwise positive)
    pub heading_change_rad: f64,
    /// Pose after the move
    pub pose: Pose,
}

/// Reason a move was not committed
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum MoveRejection {
    #[error("move to ({x:.3}, {y:.3}) leaves the {width}x{height} workspace")]
    OutOfBounds {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    },
}

/// Single-owner odometry state: pose, trail and the fixed geometry.
///
/// All mutation goes through [`OdometryEngine::step`] (or its boolean
/// wrapper [`OdometryEngine::apply_encoder_ticks`]) and
/// [`OdometryEngine::reset`]. Hosts that share an engine across threads
/// must serialize calls themselves.
#[derive(Debug, Clone)]
pub struct OdometryEngine {
    geometry: WheelGeometry,
    workspace: Workspace,
    origin: Pose,
    pose: Pose,
    trail: Vec<Point2<f64>>,
}

impl OdometryEngine {
    /// Create an engine at `origin`.
    ///
    /// Fails if the workspace has a non-positive extent or the origin does
    /// not lie strictly inside it.
    pub fn new(geometry: WheelGeometry, workspace: Workspace, origin: Pose) -> Result<Self, ConfigError> {
        validate_placement(&workspace, &origin)?;
        let origin = Pose::new(origin.x, origin.y, origin.heading_deg);

        Ok(Self {
            geometry,
            workspace,
            origin,
            pose: origin,
            trail: vec![origin.position()],
        })
    }

    pub fn from_config(config: &SimulatorConfig) -> Result<Self, ConfigError> {
        Self::new(config.geometry, config.workspace, config.initial_pose)
    }

    /// Apply one encoder sample. Returns `false` when the move is rejected,
    /// in which case pose and trail are unchanged.
    pub fn apply_encoder_ticks(&mut self, left_ticks: i32, right_ticks: i32, simulate_slip: bool) -> bool {
        self.step(left_ticks, right_ticks, simulate_slip).is_ok()
    }

    /// Apply one encoder sample and report the full motion breakdown.
    pub fn step(
        &mut self,
        left_ticks: i32,
        right_ticks: i32,
        simulate_slip: bool,
    ) -> Result<MotionStep, MoveRejection> {
        let step = self.propose(left_ticks, right_ticks, simulate_slip)?;

        self.pose = step.pose;
        self.trail.push(step.pose.position());

        debug!(
            "ticks=({}, {}) slip={} dc={:.4} dtheta={:.5} -> ({:.3}, {:.3}, {:.2} deg)",
            left_ticks,
            right_ticks,
            simulate_slip,
            step.centerline_cm,
            step.heading_change_rad,
            step.pose.x,
            step.pose.y,
            step.pose.heading_deg,
        );

        Ok(step)
    }

    /// Compute the move a sample would produce without committing it.
    pub fn propose(
        &self,
        left_ticks: i32,
        right_ticks: i32,
        simulate_slip: bool,
    ) -> Result<MotionStep, MoveRejection> {
        let (dl, mut dr) = self.geometry.wheel_travel(left_ticks, right_ticks);
        if simulate_slip {
            dr *= SLIP_FACTOR;
        }

        let dc = (dl + dr) / 2.0;
        let dtheta = (dr - dl) / self.geometry.wheel_separation_cm();

        // Displacement is projected along the post-turn heading.
        let new_heading_rad = self.pose.heading_rad() + dtheta;
        let displacement = Vector2::new(new_heading_rad.cos(), new_heading_rad.sin()) * dc;
        let new_position = self.pose.position() + displacement;

        if !self.workspace.contains(&new_position) {
            return Err(MoveRejection::OutOfBounds {
                x: new_position.x,
                y: new_position.y,
                width: self.workspace.width,
                height: self.workspace.height,
            });
        }

        Ok(MotionStep {
            left_ticks,
            right_ticks,
            slip: simulate_slip,
            left_travel_cm: dl,
            right_travel_cm: dr,
            centerline_cm: dc,
            heading_change_rad: dtheta,
            pose: Pose {
                x: new_position.x,
                y: new_position.y,
                heading_deg: normalize_heading_deg(new_heading_rad.to_degrees()),
            },
        })
    }

    /// Return to the initial pose with a single-entry trail
    pub fn reset(&mut self) {
        self.pose = self.origin;
        self.trail.clear();
        self.trail.push(self.origin.position());
    }

    pub fn pose(&self) -> Pose {
        self.pose
    }

    pub fn position(&self) -> Point2<f64> {
        self.pose.position()
    }

    pub fn heading_deg(&self) -> f64 {
        self.pose.heading_deg
    }

    /// Visited positions in chronological order, starting with the origin
    pub fn trail(&self) -> &[Point2<f64>] {
        &self.trail
    }

    pub fn origin(&self) -> Pose {
        self.origin
    }

    pub fn geometry(&self) -> &WheelGeometry {
        &self.geometry
    }

    pub fn workspace(&self) -> &Workspace {
        &self.workspace
    }
}
