//! Differential-drive kinematics
//!
//! Wheel geometry and the odometry engine that integrates encoder ticks
//! into a bounded pose and trail.

pub mod geometry;
pub mod engine;

pub use geometry::{WheelGeometry, WheelGeometryParams};
pub use engine::{MotionStep, MoveRejection, OdometryEngine};
