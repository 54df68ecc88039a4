//! Output surface for session consumers
//!
//! Renders session snapshots as human-readable status text, JSON, or a
//! CSV trail export, plus replay reports and the key-binding help.

pub mod types;
pub mod formatting;

pub use types::{FormatError, OutputFormat};
pub use formatting::{
    format_key_help, format_replay, format_snapshot, CsvFormatter, JsonFormatter, ReplayOutput, TextFormatter,
};
