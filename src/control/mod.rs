//! Operator commands and the session that owns the odometry state

pub mod command;
pub mod session;

pub use command::{Command, TickCommand};
pub use session::{CommandOutcome, DistancePolicy, Session, SessionSnapshot};
