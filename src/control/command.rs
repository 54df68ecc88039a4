//! Drive commands and their encoder-tick equivalents
//!
//! Commands are decoupled from any input device: a key dispatcher, a test
//! harness or a recorded log maps its input to a [`Command`], and the
//! lookup table below turns it into a tick triple.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One encoder sample: signed pulse counts per wheel plus the slip flag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickCommand {
    pub left_ticks: i32,
    pub right_ticks: i32,
    pub simulate_slip: bool,
}

impl TickCommand {
    pub const fn new(left_ticks: i32, right_ticks: i32, simulate_slip: bool) -> Self {
        Self {
            left_ticks,
            right_ticks,
            simulate_slip,
        }
    }

    /// Wheels turn by equal and opposite amounts
    pub fn is_pure_rotation(&self) -> bool {
        self.left_ticks != 0 && i64::from(self.left_ticks) == -i64::from(self.right_ticks)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Command {
    Forward,
    Backward,
    RotateLeft,
    RotateRight,
    CurveLeft,
    CurveRight,
    SimulateSlip,
    Reset,
}

impl Command {
    pub const ALL: [Command; 8] = [
        Command::Forward,
        Command::Backward,
        Command::RotateLeft,
        Command::RotateRight,
        Command::CurveLeft,
        Command::CurveRight,
        Command::SimulateSlip,
        Command::Reset,
    ];

    /// Tick triple for a motion command; `None` for [`Command::Reset`]
    pub const fn ticks(self) -> Option<TickCommand> {
        match self {
            Command::Forward => Some(TickCommand::new(10, 10, false)),
            Command::Backward => Some(TickCommand::new(-10, -10, false)),
            Command::RotateLeft => Some(TickCommand::new(10, -10, false)),
            Command::RotateRight => Some(TickCommand::new(-10, 10, false)),
            Command::CurveLeft => Some(TickCommand::new(10, 7, false)),
            Command::CurveRight => Some(TickCommand::new(7, 10, false)),
            Command::SimulateSlip => Some(TickCommand::new(10, 10, true)),
            Command::Reset => None,
        }
    }

    /// Keyboard binding used by the interactive simulator
    pub const fn key(self) -> char {
        match self {
            Command::Forward => 'W',
            Command::Backward => 'S',
            Command::RotateLeft => 'A',
            Command::RotateRight => 'D',
            Command::CurveLeft => 'Q',
            Command::CurveRight => 'E',
            Command::SimulateSlip => 'P',
            Command::Reset => 'R',
        }
    }

    /// Case-insensitive reverse of [`Command::key`]
    pub fn from_key(key: char) -> Option<Command> {
        let key = key.to_ascii_uppercase();
        Command::ALL.into_iter().find(|command| command.key() == key)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Command::Forward => "forward",
            Command::Backward => "backward",
            Command::RotateLeft => "rotate-left",
            Command::RotateRight => "rotate-right",
            Command::CurveLeft => "curve-left",
            Command::CurveRight => "curve-right",
            Command::SimulateSlip => "slip",
            Command::Reset => "reset",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Command::Forward => "move forward",
            Command::Backward => "move backward",
            Command::RotateLeft => "pivot left in place",
            Command::RotateRight => "pivot right in place",
            Command::CurveLeft => "curve left while advancing",
            Command::CurveRight => "curve right while advancing",
            Command::SimulateSlip => "move forward with right-wheel slip",
            Command::Reset => "restore the initial pose and clear the trail",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Command {
    type Err = String;

    /// Accepts a command name or a single key letter
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        if let (Some(key), None) = (chars.next(), chars.next()) {
            return Command::from_key(key).ok_or_else(|| format!("unknown command key '{}'", key));
        }

        let lowered = s.to_ascii_lowercase().replace('_', "-");
        Command::ALL
            .into_iter()
            .find(|command| command.name() == lowered)
            .ok_or_else(|| format!("unknown command '{}'", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_table() {
        assert_eq!(Command::Forward.ticks(), Some(TickCommand::new(10, 10, false)));
        assert_eq!(Command::Backward.ticks(), Some(TickCommand::new(-10, -10, false)));
        assert_eq!(Command::RotateLeft.ticks(), Some(TickCommand::new(10, -10, false)));
        assert_eq!(Command::RotateRight.ticks(), Some(TickCommand::new(-10, 10, false)));
        assert_eq!(Command::CurveLeft.ticks(), Some(TickCommand::new(10, 7, false)));
        assert_eq!(Command::CurveRight.ticks(), Some(TickCommand::new(7, 10, false)));
        assert_eq!(Command::SimulateSlip.ticks(), Some(TickCommand::new(10, 10, true)));
        assert_eq!(Command::Reset.ticks(), None);
    }

    #[test]
    fn test_key_bindings_round_trip() {
        for command in Command::ALL {
            assert_eq!(Command::from_key(command.key()), Some(command));
            assert_eq!(Command::from_key(command.key().to_ascii_lowercase()), Some(command));
        }
        assert_eq!(Command::from_key('x'), None);
    }

    #[test]
    fn test_parse_names_and_keys() {
        assert_eq!("forward".parse::<Command>(), Ok(Command::Forward));
        assert_eq!("Rotate_Left".parse::<Command>(), Ok(Command::RotateLeft));
        assert_eq!("curve-right".parse::<Command>(), Ok(Command::CurveRight));
        assert_eq!("slip".parse::<Command>(), Ok(Command::SimulateSlip));
        assert_eq!("w".parse::<Command>(), Ok(Command::Forward));
        assert_eq!(" R ".parse::<Command>(), Ok(Command::Reset));
        assert!("sideways".parse::<Command>().is_err());
        assert!("z".parse::<Command>().is_err());
    }

    #[test]
    fn test_pure_rotation() {
        assert!(Command::RotateLeft.ticks().unwrap().is_pure_rotation());
        assert!(Command::RotateRight.ticks().unwrap().is_pure_rotation());
        assert!(!Command::Forward.ticks().unwrap().is_pure_rotation());
        assert!(!Command::CurveLeft.ticks().unwrap().is_pure_rotation());
        assert!(!TickCommand::new(0, 0, false).is_pure_rotation());
    }

    #[test]
    fn test_pure_rotation_at_tick_extremes() {
        assert!(!TickCommand::new(0, i32::MIN, false).is_pure_rotation());
        assert!(!TickCommand::new(i32::MIN, i32::MIN, false).is_pure_rotation());
        assert!(!TickCommand::new(i32::MIN, i32::MAX, false).is_pure_rotation());
        assert!(TickCommand::new(i32::MAX, -i32::MAX, false).is_pure_rotation());
    }
}
