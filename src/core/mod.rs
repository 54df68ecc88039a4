//! Core types and constants for the differential-drive odometry simulator

pub mod types;
pub mod constants;

pub use types::*;
pub use constants::*;
