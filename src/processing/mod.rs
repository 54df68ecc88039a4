//! Recorded input processing

pub mod parser;
pub mod replay;

pub use parser::{parse_tick_log, ParseError, TickLogEntry};
pub use replay::{replay, ReplayReport};
