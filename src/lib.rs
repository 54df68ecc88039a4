//! Differential-Drive Odometry Simulator
//!
//! Converts left/right wheel-encoder pulse counts into a robot pose,
//! accumulates traveled distance, records the path trail and keeps the
//! robot inside a bounded rectangular workspace.

pub mod core;
pub mod kinematics;
pub mod control;
pub mod processing;
pub mod utils;
pub mod api;

// Re-export commonly used types
pub use crate::core::{Pose, Workspace, SLIP_FACTOR};
pub use kinematics::{MotionStep, MoveRejection, OdometryEngine, WheelGeometry, WheelGeometryParams};
pub use control::{Command, CommandOutcome, DistancePolicy, Session, SessionSnapshot, TickCommand};
pub use processing::{parse_tick_log, replay, ParseError, ReplayReport, TickLogEntry};
pub use utils::{ConfigError, SimulatorConfig};
pub use api::{
    format_key_help, format_replay, format_snapshot, CsvFormatter, FormatError, JsonFormatter, OutputFormat,
    ReplayOutput, TextFormatter,
};
