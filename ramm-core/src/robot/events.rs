//! Events produced by the robot state machine

use super::machine::Mode;
use super::position::{Heading, Position, SweepDirection};

/// Outcome of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Motion {
    /// The robot moved to a neighbouring cell
    Moved { from: Position, to: Position },
    /// The move would have left the lattice; the robot stayed put
    Blocked { at: Position, heading: Heading },
}

impl Motion {
    /// Position after the move
    pub fn position(&self) -> Position {
        match self {
            Motion::Moved { to, .. } => *to,
            Motion::Blocked { at, .. } => *at,
        }
    }

    /// Check if the robot actually changed cell
    pub fn is_moved(&self) -> bool {
        matches!(self, Motion::Moved { .. })
    }
}

/// Events emitted by the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RobotEvent {
    /// A single move (manual command or sweep step)
    Motion(Motion),
    /// Mode switched
    ModeChanged(Mode),
    /// Sweep row finished: direction flipped and the robot stepped down
    Reversed {
        direction: SweepDirection,
        descent: Motion,
    },
}

impl RobotEvent {
    /// The motion carried by this event, if any
    pub fn motion(&self) -> Option<Motion> {
        match self {
            RobotEvent::Motion(motion) => Some(*motion),
            RobotEvent::Reversed { descent, .. } => Some(*descent),
            RobotEvent::ModeChanged(_) => None,
        }
    }

    /// Check if the robot changed cell
    pub fn is_position_change(&self) -> bool {
        self.motion().is_some_and(|motion| motion.is_moved())
    }
}

/// Result of applying a command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Applied {
    /// New mode, if the command switched it
    pub mode_changed: Option<Mode>,
    /// Move performed by a directional command
    pub motion: Option<Motion>,
}
