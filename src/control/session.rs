//! Simulation session
//!
//! A [`Session`] owns exactly one [`OdometryEngine`] together with the
//! traveled-distance accumulator, so that the pose, the trail and the
//! distance are always mutated in the same call. Input dispatchers hold a
//! `&mut Session`; renderers read a [`SessionSnapshot`].

use log::info;
use nalgebra::Point2;
use serde::{Deserialize, Serialize};

use crate::control::command::{Command, TickCommand};
use crate::core::Pose;
use crate::kinematics::engine::{MotionStep, MoveRejection, OdometryEngine};
use crate::kinematics::geometry::WheelGeometry;
use crate::utils::config::{ConfigError, SimulatorConfig};

/// Rule for adding an accepted move to the traveled distance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DistancePolicy {
    /// Add `|dc|` of every accepted move, rotation or not. Slip moves add
    /// the attenuated displacement.
    #[default]
    Centerline,
    /// Add the nominal slip-free centerline travel of accepted moves that
    /// are not pure rotations; pure rotations add nothing.
    CommandedTranslation,
}

impl DistancePolicy {
    /// Distance (cm) credited for an accepted move
    pub fn accrual(&self, ticks: &TickCommand, step: &MotionStep, geometry: &WheelGeometry) -> f64 {
        match self {
            DistancePolicy::Centerline => step.centerline_cm.abs(),
            DistancePolicy::CommandedTranslation => {
                if ticks.is_pure_rotation() {
                    0.0
                } else {
                    let (dl, dr) = geometry.wheel_travel(ticks.left_ticks, ticks.right_ticks);
                    ((dl + dr) / 2.0).abs()
                }
            }
        }
    }
}

/// Result of dispatching one [`Command`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CommandOutcome {
    Moved(MotionStep),
    Blocked(MoveRejection),
    Reset,
}

impl CommandOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, CommandOutcome::Blocked(_))
    }
}

/// Consistent copy of the session state for display or logging
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub pose: Pose,
    pub traveled_distance_cm: f64,
    pub trail: Vec<Point2<f64>>,
}

#[derive(Debug, Clone)]
pub struct Session {
    engine: OdometryEngine,
    traveled_distance_cm: f64,
    policy: DistancePolicy,
}

impl Session {
    pub fn new(engine: OdometryEngine, policy: DistancePolicy) -> Self {
        Self {
            engine,
            traveled_distance_cm: 0.0,
            policy,
        }
    }

    pub fn from_config(config: &SimulatorConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(OdometryEngine::from_config(config)?, config.distance_policy))
    }

    /// Run a drive command through the tick table
    pub fn dispatch(&mut self, command: Command) -> CommandOutcome {
        match command.ticks() {
            Some(ticks) => match self.apply(ticks) {
                Ok(step) => CommandOutcome::Moved(step),
                Err(rejection) => CommandOutcome::Blocked(rejection),
            },
            None => {
                self.reset();
                CommandOutcome::Reset
            }
        }
    }

    /// Apply one encoder sample, crediting distance only if it is accepted
    pub fn apply(&mut self, ticks: TickCommand) -> Result<MotionStep, MoveRejection> {
        let step = self
            .engine
            .step(ticks.left_ticks, ticks.right_ticks, ticks.simulate_slip)?;
        self.traveled_distance_cm += self.policy.accrual(&ticks, &step, self.engine.geometry());
        Ok(step)
    }

    pub fn apply_encoder_ticks(&mut self, left_ticks: i32, right_ticks: i32, simulate_slip: bool) -> bool {
        self.apply(TickCommand::new(left_ticks, right_ticks, simulate_slip)).is_ok()
    }

    /// Reset the engine and zero the traveled distance together
    pub fn reset(&mut self) {
        self.engine.reset();
        self.traveled_distance_cm = 0.0;
        info!("Session reset to initial pose");
    }

    pub fn engine(&self) -> &OdometryEngine {
        &self.engine
    }

    pub fn pose(&self) -> Pose {
        self.engine.pose()
    }

    pub fn traveled_distance_cm(&self) -> f64 {
        self.traveled_distance_cm
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            pose: self.engine.pose(),
            traveled_distance_cm: self.traveled_distance_cm,
            trail: self.engine.trail().to_vec(),
        }
    }
}
