//! Lattice positions and directions

use ramm_protocol::Command;

/// Top-left pixel of the robot's cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Position {
    pub x: u8,
    pub y: u8,
}

impl Position {
    pub const fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }
}

/// Direction of a single move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Heading {
    /// Towards y = 0
    Up,
    /// Towards the bottom row
    Down,
    /// Towards x = 0
    Left,
    /// Towards the right edge
    Right,
}

impl Heading {
    /// Heading requested by a directional command
    pub fn from_command(command: Command) -> Option<Self> {
        match command {
            Command::Up => Some(Heading::Up),
            Command::Down => Some(Heading::Down),
            Command::Left => Some(Heading::Left),
            Command::Right => Some(Heading::Right),
            Command::Auto => None,
        }
    }
}

/// Horizontal direction of the automatic sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SweepDirection {
    /// Towards increasing x
    #[default]
    Increasing,
    /// Towards decreasing x
    Decreasing,
}

impl SweepDirection {
    /// The opposite direction
    pub fn reversed(self) -> Self {
        match self {
            SweepDirection::Increasing => SweepDirection::Decreasing,
            SweepDirection::Decreasing => SweepDirection::Increasing,
        }
    }

    /// Heading of one sweep step
    pub fn heading(self) -> Heading {
        match self {
            SweepDirection::Increasing => Heading::Right,
            SweepDirection::Decreasing => Heading::Left,
        }
    }
}
