//! Tick log parsing
//!
//! A tick log is line-oriented text. Each non-blank line holds either an
//! encoder sample (`<left> <right> [slip]`) or a single drive command
//! (`forward`, `rotate-left`, `W`, ...). Everything after `#` is a comment.

use log::warn;
use thiserror::Error;

use crate::control::command::{Command, TickCommand};

/// One parsed log line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickLogEntry {
    Ticks(TickCommand),
    Command(Command),
}

/// Errors that can occur while parsing a tick log
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    #[error("line {line}: invalid tick count '{token}'")]
    InvalidTicks { line: usize, token: String },
    #[error("line {line}: invalid slip flag '{token}'")]
    InvalidSlipFlag { line: usize, token: String },
    #[error("line {line}: unknown command '{token}'")]
    UnknownCommand { line: usize, token: String },
    #[error("line {line}: expected a command or 2-3 fields, found {found} fields")]
    InvalidFormat { line: usize, found: usize },
}

impl ParseError {
    pub fn line(&self) -> usize {
        match self {
            ParseError::InvalidTicks { line, .. }
            | ParseError::InvalidSlipFlag { line, .. }
            | ParseError::UnknownCommand { line, .. }
            | ParseError::InvalidFormat { line, .. } => *line,
        }
    }
}

/// Parser for recorded tick logs
#[derive(Debug, Clone)]
pub struct TickLogParser {
    strict_validation: bool,
}

impl Default for TickLogParser {
    fn default() -> Self {
        Self::new()
    }
}

impl TickLogParser {
    /// Create a parser that stops at the first malformed line
    pub fn new() -> Self {
        Self {
            strict_validation: true,
        }
    }

    /// Enable or disable strict validation. A lenient parser logs and
    /// skips malformed lines.
    pub fn set_strict_validation(&mut self, strict: bool) {
        self.strict_validation = strict;
    }

    pub fn parse(&self, text: &str) -> Result<Vec<TickLogEntry>, ParseError> {
        let mut entries = Vec::new();

        for (index, raw_line) in text.lines().enumerate() {
            match parse_line(index + 1, raw_line) {
                Ok(Some(entry)) => entries.push(entry),
                Ok(None) => {}
                Err(e) if !self.strict_validation => warn!("Skipping tick log entry: {}", e),
                Err(e) => return Err(e),
            }
        }

        Ok(entries)
    }
}

/// Parse a whole log with strict validation
pub fn parse_tick_log(text: &str) -> Result<Vec<TickLogEntry>, ParseError> {
    TickLogParser::new().parse(text)
}

/// Parse a single line; blank and comment-only lines yield `None`
pub fn parse_line(line: usize, raw: &str) -> Result<Option<TickLogEntry>, ParseError> {
    let content = raw.split('#').next().unwrap_or_default();
    let fields: Vec<&str> = content.split_whitespace().collect();

    match fields.as_slice() {
        [] => Ok(None),
        [word] => word
            .parse::<Command>()
            .map(|command| Some(TickLogEntry::Command(command)))
            .map_err(|_| ParseError::UnknownCommand {
                line,
                token: word.to_string(),
            }),
        [left, right] => Ok(Some(TickLogEntry::Ticks(TickCommand::new(
            parse_ticks(line, left)?,
            parse_ticks(line, right)?,
            false,
        )))),
        [left, right, slip] => Ok(Some(TickLogEntry::Ticks(TickCommand::new(
            parse_ticks(line, left)?,
            parse_ticks(line, right)?,
            parse_slip(line, slip)?,
        )))),
        _ => Err(ParseError::InvalidFormat {
            line,
            found: fields.len(),
        }),
    }
}

fn parse_ticks(line: usize, token: &str) -> Result<i32, ParseError> {
    token.parse::<i32>().map_err(|_| ParseError::InvalidTicks {
        line,
        token: token.to_string(),
    })
}

fn parse_slip(line: usize, token: &str) -> Result<bool, ParseError> {
    match token.to_ascii_lowercase().as_str() {
        "slip" | "1" | "true" => Ok(true),
        "noslip" | "0" | "false" => Ok(false),
        _ => Err(ParseError::InvalidSlipFlag {
            line,
            token: token.to_string(),
        }),
    }
}
