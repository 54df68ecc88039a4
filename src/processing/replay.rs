//! Feed recorded tick logs through a session

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::control::session::{CommandOutcome, Session};
use crate::processing::parser::TickLogEntry;

/// Summary of a replay run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplayReport {
    /// Entries that moved the robot
    pub applied: usize,
    /// Entries rejected at the workspace boundary
    pub rejected: usize,
    /// Reset commands executed
    pub resets: usize,
}

impl ReplayReport {
    pub fn total(&self) -> usize {
        self.applied + self.rejected + self.resets
    }
}

/// Apply every entry in order. Rejected moves are counted, never fatal.
pub fn replay(session: &mut Session, entries: &[TickLogEntry]) -> ReplayReport {
    let mut report = ReplayReport::default();

    for (index, entry) in entries.iter().enumerate() {
        let outcome = match *entry {
            TickLogEntry::Ticks(ticks) => match session.apply(ticks) {
                Ok(step) => CommandOutcome::Moved(step),
                Err(rejection) => CommandOutcome::Blocked(rejection),
            },
            TickLogEntry::Command(command) => session.dispatch(command),
        };

        match outcome {
            CommandOutcome::Moved(_) => report.applied += 1,
            CommandOutcome::Blocked(rejection) => {
                warn!("Entry {} rejected: {}", index + 1, rejection);
                report.rejected += 1;
            }
            CommandOutcome::Reset => report.resets += 1,
        }
    }

    debug!(
        "Replay finished: {} applied, {} rejected, {} resets",
        report.applied, report.rejected, report.resets
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::command::{Command, TickCommand};
    use crate::utils::config::SimulatorConfig;

    #[test]
    fn test_replay_counts_outcomes() {
        let config = SimulatorConfig::default().with_initial_pose(1.5, 250.0, 180.0);
        let mut session = Session::from_config(&config).unwrap();

        let entries = vec![
            TickLogEntry::Ticks(TickCommand::new(-10, -10, false)),
            TickLogEntry::Command(Command::Forward),
            TickLogEntry::Command(Command::Forward),
            TickLogEntry::Command(Command::Forward),
            TickLogEntry::Command(Command::Forward),
            TickLogEntry::Command(Command::Reset),
            TickLogEntry::Ticks(TickCommand::new(0, 0, false)),
        ];

        let report = replay(&mut session, &entries);

        // Backing up moves toward +x; the first three forward steps bring
        // the robot to x ~= 0.366 and the fourth would cross x = 0.
        assert_eq!(report.applied, 5);
        assert_eq!(report.rejected, 1);
        assert_eq!(report.resets, 1);
        assert_eq!(report.total(), entries.len());
        assert_eq!(session.engine().trail().len(), 2);
        assert_eq!(session.traveled_distance_cm(), 0.0);
    }

    #[test]
    fn test_empty_replay() {
        let mut session = Session::from_config(&SimulatorConfig::default()).unwrap();
        let report = replay(&mut session, &[]);
        assert_eq!(report, ReplayReport::default());
        assert_eq!(session.engine().trail().len(), 1);
    }
}
