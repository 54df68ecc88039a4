//! Snapshot output formatting
//!
//! This module provides the status text shown next to the simulation,
//! a JSON rendering of the whole snapshot, and a CSV export of the trail.

use serde::Serialize;

use crate::api::types::{FormatError, OutputFormat};
use crate::control::command::Command;
use crate::control::session::SessionSnapshot;
use crate::processing::replay::ReplayReport;

/// Human-readable status formatter
#[derive(Debug, Clone, Default)]
pub struct TextFormatter {
    /// Single-line output
    pub compact: bool,
}

impl TextFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn compact() -> Self {
        Self { compact: true }
    }

    pub fn format_text(&self, snapshot: &SessionSnapshot) -> String {
        let pose = &snapshot.pose;

        if self.compact {
            return format!(
                "({:.2}, {:.2}) {:.2}° | {:.2} cm | {} pts",
                pose.x,
                pose.y,
                pose.heading_deg,
                snapshot.traveled_distance_cm,
                snapshot.trail.len()
            );
        }

        let mut output = String::new();
        output.push_str(&format!("Heading: {:.2}°\n", pose.heading_deg));
        output.push_str(&format!("Distance: {:.2} cm\n", snapshot.traveled_distance_cm));
        output.push_str(&format!("Position: ({:.2}, {:.2})\n", pose.x, pose.y));
        output.push_str(&format!("Trail: {} points\n", snapshot.trail.len()));
        output
    }
}

/// JSON formatter for structured output
#[derive(Debug, Clone, Default)]
pub struct JsonFormatter {
    /// Pretty print JSON
    pub pretty: bool,
}

impl JsonFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    pub fn format_json(&self, snapshot: &SessionSnapshot) -> Result<String, serde_json::Error> {
        if self.pretty {
            serde_json::to_string_pretty(snapshot)
        } else {
            serde_json::to_string(snapshot)
        }
    }
}

/// CSV exporter for the trail
#[derive(Debug, Clone)]
pub struct CsvFormatter {
    /// Include header row
    pub include_header: bool,
}

impl Default for CsvFormatter {
    fn default() -> Self {
        Self { include_header: true }
    }
}

impl CsvFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn header(&self) -> String {
        "index,x,y".to_string()
    }

    /// One row per trail point, oldest first
    pub fn format_csv(&self, snapshot: &SessionSnapshot) -> String {
        let mut rows = Vec::with_capacity(snapshot.trail.len() + 1);
        if self.include_header {
            rows.push(self.header());
        }
        for (index, point) in snapshot.trail.iter().enumerate() {
            rows.push(format!("{},{:.4},{:.4}", index, point.x, point.y));
        }

        let mut output = rows.join("\n");
        output.push('\n');
        output
    }
}

/// Render a snapshot with the default formatter for `format`
pub fn format_snapshot(snapshot: &SessionSnapshot, format: OutputFormat) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(TextFormatter::new().format_text(snapshot)),
        OutputFormat::Json => Ok(JsonFormatter::pretty().format_json(snapshot)?),
        OutputFormat::Csv => Ok(CsvFormatter::new().format_csv(snapshot)),
    }
}

/// Replay result as emitted by `--format json`
#[derive(Debug, Clone, Serialize)]
pub struct ReplayOutput<'a> {
    pub report: &'a ReplayReport,
    pub snapshot: &'a SessionSnapshot,
}

/// Render a replay report followed by the final snapshot
pub fn format_replay(
    report: &ReplayReport,
    snapshot: &SessionSnapshot,
    format: OutputFormat,
) -> Result<String, FormatError> {
    match format {
        OutputFormat::Text => Ok(format!(
            "Replay: {} entries, {} applied, {} rejected, {} resets\n{}",
            report.total(),
            report.applied,
            report.rejected,
            report.resets,
            TextFormatter::new().format_text(snapshot)
        )),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&ReplayOutput { report, snapshot })?),
        OutputFormat::Csv => Ok(format!(
            "# applied={},rejected={},resets={}\n{}",
            report.applied,
            report.rejected,
            report.resets,
            CsvFormatter::new().format_csv(snapshot)
        )),
    }
}

/// One `key: description` line per command binding
pub fn format_key_help() -> String {
    Command::ALL
        .iter()
        .map(|command| format!("{}: {}\n", command.key(), command.description()))
        .collect()
}
