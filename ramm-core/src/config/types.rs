//! Configuration type definitions

use crate::robot::{Heading, Position};

/// Lattice step in pixels (one robot footprint)
pub const LATTICE_STEP: u8 = 8;

/// Horizontal steps per sweep row before reversing
pub const SWEEP_STEPS: u8 = 14;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Lattice step must be non-zero
    ZeroStep,
    /// Minimum bound exceeds maximum bound
    InvertedBounds,
    /// Bounds span is not a whole number of steps
    UnalignedBounds,
    /// Start cell outside the lattice
    StartOutOfBounds,
    /// Sweep width must be non-zero
    ZeroSweep,
    /// Shape side or tile spacing must be non-zero
    ZeroSize,
}

/// Grid the robot moves on
///
/// Derived from a 128x64 display minus an 8-pixel footprint margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LatticeConfig {
    /// Distance of one move, in pixels
    pub step: u8,
    /// Smallest allowed x
    pub min_x: u8,
    /// Largest allowed x
    pub max_x: u8,
    /// Smallest allowed y
    pub min_y: u8,
    /// Largest allowed y
    pub max_y: u8,
    /// Cell the robot starts in
    pub start: Position,
    /// Horizontal steps per sweep row
    pub sweep_steps: u8,
}

impl Default for LatticeConfig {
    fn default() -> Self {
        Self {
            step: LATTICE_STEP,
            min_x: 8,
            max_x: 112,
            min_y: 8,
            max_y: 56,
            start: Position::new(8, 8),
            sweep_steps: SWEEP_STEPS,
        }
    }
}

impl LatticeConfig {
    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        if self.min_x > self.max_x || self.min_y > self.max_y {
            return Err(ConfigError::InvertedBounds);
        }
        if (self.max_x - self.min_x) % self.step != 0 || (self.max_y - self.min_y) % self.step != 0
        {
            return Err(ConfigError::UnalignedBounds);
        }
        if !self.contains(self.start) {
            return Err(ConfigError::StartOutOfBounds);
        }
        if self.sweep_steps == 0 {
            return Err(ConfigError::ZeroSweep);
        }
        Ok(())
    }

    /// Check if a position is within bounds
    pub fn contains(&self, position: Position) -> bool {
        (self.min_x..=self.max_x).contains(&position.x)
            && (self.min_y..=self.max_y).contains(&position.y)
    }

    /// Cell one step away in `heading`, if it stays within bounds
    pub fn neighbor(&self, position: Position, heading: Heading) -> Option<Position> {
        let Position { x, y } = position;
        let next = match heading {
            Heading::Up => Position::new(x, y.checked_sub(self.step)?),
            Heading::Down => Position::new(x, y.checked_add(self.step)?),
            Heading::Left => Position::new(x.checked_sub(self.step)?, y),
            Heading::Right => Position::new(x.checked_add(self.step)?, y),
        };

        self.contains(next).then_some(next)
    }
}

/// What gets drawn on the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SceneConfig {
    /// Side of the robot square
    pub robot_side: u8,
    /// Side of a dust tile
    pub dust_side: u8,
    /// Offset of the first dust tile on both axes
    pub dust_origin: u8,
    /// Distance between dust tiles on both axes
    pub dust_spacing: u8,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            robot_side: 8,
            dust_side: 4,
            dust_origin: 8,
            dust_spacing: 16,
        }
    }
}

impl SceneConfig {
    /// Check the configuration for consistency
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.robot_side == 0 || self.dust_side == 0 || self.dust_spacing == 0 {
            return Err(ConfigError::ZeroSize);
        }
        Ok(())
    }
}

/// Fixed pauses used to pace the control loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PacingConfig {
    /// Pause at the end of every loop iteration
    pub loop_interval_ms: u32,
    /// Pause after each automatic sweep step
    pub auto_step_interval_ms: u32,
    /// Pause between drawing the robot and erasing its previous cell
    pub frame_pause_ms: u32,
    /// Pause between dust tiles during the boot animation
    pub dust_pause_ms: u32,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            loop_interval_ms: 50,
            auto_step_interval_ms: 800,
            frame_pause_ms: 50,
            dust_pause_ms: 10,
        }
    }
}
