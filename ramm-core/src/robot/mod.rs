//! Robot state machine
//!
//! The robot lives on a coarse lattice over the display. It either follows
//! directional commands (manual mode) or sweeps the area row by row on its
//! own (automatic mode). Every operation reports what happened as an event.

pub mod events;
pub mod machine;
pub mod position;

pub use events::{Applied, Motion, RobotEvent};
pub use machine::{Mode, RobotStateMachine};
pub use position::{Heading, Position, SweepDirection};
