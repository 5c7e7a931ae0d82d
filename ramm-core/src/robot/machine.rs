//! State machine definition
//!
//! Position, sweep progress and mode are owned by a single
//! [`RobotStateMachine`]. Commands and ticks mutate it synchronously; moves
//! that would leave the lattice saturate instead of failing.

use ramm_protocol::Command;

use super::events::{Applied, Motion, RobotEvent};
use super::position::{Heading, Position, SweepDirection};
use crate::config::LatticeConfig;

/// Operating modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Robot follows directional commands
    #[default]
    Manual,
    /// Robot sweeps the area on every tick
    Automatic,
}

impl Mode {
    /// Check if ticks advance the sweep in this mode
    pub fn is_automatic(&self) -> bool {
        matches!(self, Mode::Automatic)
    }
}

/// Robot position, sweep progress and mode
#[derive(Debug, Clone)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RobotStateMachine {
    lattice: LatticeConfig,
    position: Position,
    direction: SweepDirection,
    /// Sweep steps since the last reversal
    step_count: u8,
    mode: Mode,
}

impl Default for RobotStateMachine {
    fn default() -> Self {
        Self::new()
    }
}

impl RobotStateMachine {
    /// Create a state machine on the default 128x64 lattice
    pub fn new() -> Self {
        Self::with_lattice(LatticeConfig::default())
    }

    /// Create a state machine on a custom lattice
    ///
    /// The robot starts at `lattice.start`, sweeping towards increasing x,
    /// in manual mode.
    pub fn with_lattice(lattice: LatticeConfig) -> Self {
        Self {
            lattice,
            position: lattice.start,
            direction: SweepDirection::Increasing,
            step_count: 0,
            mode: Mode::Manual,
        }
    }

    pub fn position(&self) -> Position {
        self.position
    }

    pub fn direction(&self) -> SweepDirection {
        self.direction
    }

    pub fn step_count(&self) -> u8 {
        self.step_count
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn lattice(&self) -> &LatticeConfig {
        &self.lattice
    }

    /// Move one cell towards the top, unless already in the top row
    pub fn move_up(&mut self) -> Motion {
        self.step(Heading::Up)
    }

    /// Move one cell towards the bottom, unless already in the bottom row
    pub fn move_down(&mut self) -> Motion {
        self.step(Heading::Down)
    }

    /// Move one cell left, unless already in the leftmost column
    pub fn move_left(&mut self) -> Motion {
        self.step(Heading::Left)
    }

    /// Move one cell right, unless already in the rightmost column
    pub fn move_right(&mut self) -> Motion {
        self.step(Heading::Right)
    }

    /// Move one cell in `heading`, saturating at the lattice bounds
    pub fn step(&mut self, heading: Heading) -> Motion {
        let from = self.position;
        match self.lattice.neighbor(from, heading) {
            Some(to) => {
                self.position = to;
                Motion::Moved { from, to }
            }
            None => Motion::Blocked { at: from, heading },
        }
    }

    /// Switch mode
    ///
    /// Returns an event only if the mode actually changed. Sweep progress is
    /// kept, so switching back to automatic resumes the current row.
    pub fn set_mode(&mut self, mode: Mode) -> Option<RobotEvent> {
        if self.mode == mode {
            return None;
        }
        self.mode = mode;
        Some(RobotEvent::ModeChanged(mode))
    }

    /// Advance the automatic sweep by one step
    ///
    /// Does nothing in manual mode. After `sweep_steps` horizontal steps the
    /// direction flips and the robot descends one row. In the bottom row the
    /// descent saturates and the robot keeps sweeping that row.
    pub fn tick(&mut self) -> Option<RobotEvent> {
        if !self.mode.is_automatic() {
            return None;
        }

        if self.step_count < self.lattice.sweep_steps {
            let motion = self.step(self.direction.heading());
            self.step_count += 1;
            Some(RobotEvent::Motion(motion))
        } else {
            self.direction = self.direction.reversed();
            self.step_count = 0;
            let descent = self.move_down();
            Some(RobotEvent::Reversed {
                direction: self.direction,
                descent,
            })
        }
    }

    /// Apply a command from the control page
    ///
    /// `Auto` switches to automatic mode without moving. Directional commands
    /// drop back to manual mode and take exactly one bounded step.
    pub fn apply(&mut self, command: Command) -> Applied {
        match Heading::from_command(command) {
            None => Applied {
                mode_changed: self.set_mode(Mode::Automatic).map(|_| Mode::Automatic),
                motion: None,
            },
            Some(heading) => Applied {
                mode_changed: self.set_mode(Mode::Manual).map(|_| Mode::Manual),
                motion: Some(self.step(heading)),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn automatic() -> RobotStateMachine {
        let mut robot = RobotStateMachine::new();
        robot.set_mode(Mode::Automatic);
        robot
    }

    fn at(x: u8, y: u8) -> RobotStateMachine {
        RobotStateMachine::with_lattice(LatticeConfig {
            start: Position::new(x, y),
            ..Default::default()
        })
    }

    #[test]
    fn test_initial_state() {
        let robot = RobotStateMachine::new();
        assert_eq!(robot.position(), Position::new(8, 8));
        assert_eq!(robot.direction(), SweepDirection::Increasing);
        assert_eq!(robot.step_count(), 0);
        assert_eq!(robot.mode(), Mode::Manual);
    }

    #[test]
    fn test_moves() {
        let mut robot = at(56, 32);

        assert!(robot.move_up().is_moved());
        assert_eq!(robot.position(), Position::new(56, 24));
        assert!(robot.move_down().is_moved());
        assert_eq!(robot.position(), Position::new(56, 32));
        assert!(robot.move_left().is_moved());
        assert_eq!(robot.position(), Position::new(48, 32));
        assert!(robot.move_right().is_moved());
        assert_eq!(robot.position(), Position::new(56, 32));
    }

    #[test]
    fn test_saturation_at_every_edge() {
        let mut robot = at(8, 8);
        assert_eq!(
            robot.move_left(),
            Motion::Blocked {
                at: Position::new(8, 8),
                heading: Heading::Left
            }
        );
        assert!(!robot.move_up().is_moved());
        assert_eq!(robot.position(), Position::new(8, 8));

        let mut robot = at(112, 56);
        assert!(!robot.move_right().is_moved());
        assert!(!robot.move_down().is_moved());
        assert_eq!(robot.position(), Position::new(112, 56));
    }

    #[test]
    fn test_tick_ignored_in_manual_mode() {
        let mut robot = RobotStateMachine::new();
        assert_eq!(robot.tick(), None);
        assert_eq!(robot.position(), Position::new(8, 8));
        assert_eq!(robot.step_count(), 0);
    }

    #[test]
    fn test_first_sweep_row() {
        let mut robot = automatic();

        for _ in 0..14 {
            assert!(robot.tick().is_some());
        }
        assert_eq!(robot.position(), Position::new(112, 8));
        assert_eq!(robot.step_count(), 14);

        let event = robot.tick().unwrap();
        assert_eq!(
            event,
            RobotEvent::Reversed {
                direction: SweepDirection::Decreasing,
                descent: Motion::Moved {
                    from: Position::new(112, 8),
                    to: Position::new(112, 16),
                },
            }
        );
        assert_eq!(robot.position(), Position::new(112, 16));
        assert_eq!(robot.step_count(), 0);
        assert_eq!(robot.direction(), SweepDirection::Decreasing);
    }

    #[test]
    fn test_last_step_of_row_saturates() {
        let mut robot = automatic();

        // 13 steps cross the lattice, the 14th runs into the edge
        for _ in 0..13 {
            assert!(robot.tick().unwrap().is_position_change());
        }
        assert_eq!(robot.position(), Position::new(112, 8));
        assert!(!robot.tick().unwrap().is_position_change());
    }

    #[test]
    fn test_second_row_sweeps_back() {
        let mut robot = automatic();
        for _ in 0..15 {
            robot.tick();
        }
        for _ in 0..14 {
            robot.tick();
        }
        assert_eq!(robot.position(), Position::new(8, 16));

        robot.tick();
        assert_eq!(robot.position(), Position::new(8, 24));
        assert_eq!(robot.direction(), SweepDirection::Increasing);
    }

    #[test]
    fn test_bottom_row_keeps_oscillating() {
        let mut robot = automatic();
        // 7 rows (y = 8..=56), 15 ticks per row
        for _ in 0..(15 * 7) {
            robot.tick();
        }
        let bottom = robot.position();
        assert_eq!(bottom.y, 56);

        // Further reversals try to descend and saturate
        for _ in 0..(15 * 4) {
            if let Some(RobotEvent::Reversed { descent, .. }) = robot.tick() {
                assert!(!descent.is_moved());
            }
            assert_eq!(robot.position().y, 56);
        }

        let xs: Vec<u8> = (0..15)
            .map(|_| {
                robot.tick();
                robot.position().x
            })
            .collect();
        assert!(xs.contains(&8) || xs.contains(&112));
    }

    #[test]
    fn test_set_mode_reports_changes_only() {
        let mut robot = RobotStateMachine::new();
        assert_eq!(robot.set_mode(Mode::Manual), None);
        assert_eq!(
            robot.set_mode(Mode::Automatic),
            Some(RobotEvent::ModeChanged(Mode::Automatic))
        );
        assert_eq!(robot.set_mode(Mode::Automatic), None);
    }

    #[test]
    fn test_auto_command_keeps_position() {
        let mut robot = at(40, 24);
        let applied = robot.apply(Command::Auto);

        assert_eq!(applied.mode_changed, Some(Mode::Automatic));
        assert_eq!(applied.motion, None);
        assert_eq!(robot.mode(), Mode::Automatic);
        assert_eq!(robot.position(), Position::new(40, 24));
    }

    #[test]
    fn test_directional_command_leaves_automatic() {
        for (command, expected) in [
            (Command::Up, Position::new(40, 16)),
            (Command::Down, Position::new(40, 32)),
            (Command::Left, Position::new(32, 24)),
            (Command::Right, Position::new(48, 24)),
        ] {
            let mut robot = at(40, 24);
            robot.set_mode(Mode::Automatic);

            let applied = robot.apply(command);
            assert_eq!(applied.mode_changed, Some(Mode::Manual));
            assert_eq!(
                applied.motion,
                Some(Motion::Moved {
                    from: Position::new(40, 24),
                    to: expected
                })
            );
            assert_eq!(robot.mode(), Mode::Manual);
            assert_eq!(robot.position(), expected);
        }
    }

    #[test]
    fn test_directional_command_in_manual_mode() {
        let mut robot = RobotStateMachine::new();
        let applied = robot.apply(Command::Right);
        assert_eq!(applied.mode_changed, None);
        assert_eq!(robot.position(), Position::new(16, 8));
    }

    #[test]
    fn test_blocked_command_still_switches_mode() {
        let mut robot = automatic();
        let applied = robot.apply(Command::Up);
        assert_eq!(applied.mode_changed, Some(Mode::Manual));
        assert!(!applied.motion.unwrap().is_moved());
        assert_eq!(robot.position(), Position::new(8, 8));
    }

    #[test]
    fn test_sweep_resumes_after_manual_detour() {
        let mut robot = automatic();
        for _ in 0..3 {
            robot.tick();
        }
        robot.apply(Command::Down);
        assert_eq!(robot.tick(), None);

        robot.apply(Command::Auto);
        robot.tick();
        assert_eq!(robot.step_count(), 4);
        assert_eq!(robot.position(), Position::new(40, 16));
    }

    fn any_command() -> impl Strategy<Value = Command> {
        prop::sample::select(Command::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn position_stays_on_lattice(
            inputs in proptest::collection::vec(prop::option::of(any_command()), 0..400),
        ) {
            let mut robot = RobotStateMachine::new();
            let lattice = *robot.lattice();

            for input in inputs {
                match input {
                    Some(command) => {
                        robot.apply(command);
                    }
                    None => {
                        robot.tick();
                    }
                }

                let position = robot.position();
                prop_assert!(lattice.contains(position));
                prop_assert_eq!((position.x - lattice.min_x) % lattice.step, 0);
                prop_assert_eq!((position.y - lattice.min_y) % lattice.step, 0);
                prop_assert!(robot.step_count() <= lattice.sweep_steps);
            }
        }

        #[test]
        fn step_count_resets_only_on_reversal(ticks in 1usize..200) {
            let mut robot = automatic();
            for _ in 0..ticks {
                let before = robot.step_count();
                match robot.tick() {
                    Some(RobotEvent::Reversed { .. }) => {
                        prop_assert_eq!(before, 14);
                        prop_assert_eq!(robot.step_count(), 0);
                    }
                    Some(_) => prop_assert_eq!(robot.step_count(), before + 1),
                    None => prop_assert!(false, "tick ignored in automatic mode"),
                }
            }
        }
    }
}
