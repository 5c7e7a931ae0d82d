//! Board-agnostic core logic for the RAMM vacuum robot
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Page-packed monochrome framebuffer with shape and glyph rendering
//! - Robot state machine (lattice position, sweep, manual/automatic mode)
//! - Scene renderer diffing robot positions into framebuffer edits
//! - Mode indicator outputs over `embedded-hal` pins
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod graphics;
pub mod robot;
pub mod scene;
pub mod traits;

pub use graphics::{Framebuffer, Oled128x64};
pub use robot::{Mode, Position, RobotEvent, RobotStateMachine};
pub use scene::{FrameDiff, Scene};
